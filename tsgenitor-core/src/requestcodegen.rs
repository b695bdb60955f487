//! Generates the request parameter fragments of a single operation.
//!
//! Parameters are first collapsed into a uniquely named set, then each
//! surviving parameter is resolved, typed and emitted into exactly one of the
//! path, query, body, header or form data fragments of a [RequestParameters]
//! bundle.

use std::borrow::Cow;
use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::source::{SwaggerResolver, SwaggerSource};
use crate::translate::{parameter_to_ts_binding, ref_class_name, to_base_type};
use crate::types::{Parameter, ParameterLocation, RefOr, Schema};

mod fragment;


#[derive(Debug, thiserror::Error)]
pub enum CodegenError {
    #[error("could not find property type on schema of parameter '{parameter}'")]
    UnresolvableType { parameter: String },
    #[error("parameter reference '{reference}' not found in document")]
    UnknownReference { reference: String },
}

/**
The generated fragments for one operation. The string fragments are spliced
verbatim into the request function, `imports` lists the model classes the
fragments refer to.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParameters {
    /// members of the `params` type literal
    pub request_parameters: String,
    pub request_form_data: String,
    pub request_path_replace: String,
    pub query_parameters: Vec<String>,
    /// either a single value expression or a `{...}` object of several body parameters
    pub body_parameter: String,
    pub header_parameters: Vec<String>,
    pub imports: Vec<String>,
}

impl RequestParameters {
    pub fn has_form_data(&self) -> bool {
        !self.request_form_data.is_empty()
    }

    pub fn has_body(&self) -> bool {
        !self.body_parameter.is_empty()
    }

    fn add_import(&mut self, class_name: &str) {
        if !self.imports.iter().any(|i| i == class_name) {
            self.imports.push(class_name.to_string());
        }
    }
}

/// parameters of a DTO class with a `List<T>` member show up as `list[0].prop`
const LIST_ELEMENT_MARKER: &str = "[0]";

/**
The name a parameter is known by before it is resolved. References without an
explicit name are named after the class they point to.
*/
pub fn parameter_name(param: &RefOr<Parameter>) -> Cow<'_, str> {
    match param {
        RefOr::Object(p) => Cow::Borrowed(&p.name),
        RefOr::Reference {
            name: Some(name), ..
        } => Cow::Borrowed(name),
        RefOr::Reference {
            reference,
            name: None,
        } => Cow::Owned(ref_class_name(reference)),
    }
}

/**
Keeps one parameter per name. Documents often declare the same parameter
twice, in that case the last declaration wins while the position of the first
one is kept. List element sub-fields are dropped.
*/
pub fn uniq_parameters<'a>(
    params: impl IntoIterator<Item = &'a RefOr<Parameter>>,
) -> Vec<&'a RefOr<Parameter>> {
    let mut uniq: IndexMap<Cow<'a, str>, &'a RefOr<Parameter>> = IndexMap::new();
    for param in params {
        let name = parameter_name(param);
        if name.contains(LIST_ELEMENT_MARKER) {
            debug!("dropping list element parameter '{name}'");
            continue;
        }
        if uniq.contains_key(&name) {
            debug!("parameter '{name}' declared more than once, keeping the last declaration");
        }
        uniq.insert(name, param);
    }
    uniq.into_values().collect()
}

/** The shape of a parameter schema, which determines its TypeScript type */
#[derive(Debug, PartialEq)]
enum SchemaShape<'a> {
    ArrayOf {
        item: ItemShape<'a>,
        declared_array: bool,
    },
    Reference(&'a str),
    InlineObject(&'a Schema),
    Primitive {
        type_: &'a str,
        format: Option<&'a str>,
    },
    // none of items, $ref or type present
    Unresolvable,
}

#[derive(Debug, PartialEq)]
enum ItemShape<'a> {
    Reference(&'a str),
    Primitive {
        type_: Option<&'a str>,
        format: Option<&'a str>,
    },
}

fn shape_of(schema: &Schema) -> SchemaShape<'_> {
    if let Some(items) = &schema.items {
        return SchemaShape::ArrayOf {
            item: item_shape_of(items),
            declared_array: schema.type_.as_deref() == Some("array"),
        };
    }
    if let Some(reference) = &schema.reference {
        return SchemaShape::Reference(reference);
    }
    match schema.type_.as_deref() {
        Some("object") if !schema.properties.is_empty() => SchemaShape::InlineObject(schema),
        Some(type_) => SchemaShape::Primitive {
            type_,
            format: schema.format.as_deref(),
        },
        None => SchemaShape::Unresolvable,
    }
}

fn item_shape_of(items: &Schema) -> ItemShape<'_> {
    match &items.reference {
        Some(reference) => ItemShape::Reference(reference),
        None => ItemShape::Primitive {
            type_: items.type_.as_deref(),
            format: items.format.as_deref(),
        },
    }
}

fn class_type(reference: &str, out: &mut RequestParameters) -> String {
    let class_name = ref_class_name(reference);
    out.add_import(&class_name);
    class_name
}

fn item_type(item: &ItemShape, out: &mut RequestParameters) -> String {
    match item {
        ItemShape::Reference(reference) => class_type(reference, out),
        ItemShape::Primitive { type_, format } => to_base_type(*type_, *format),
    }
}

fn schema_type(
    schema: &Schema,
    param_name: &str,
    out: &mut RequestParameters,
) -> Result<String, CodegenError> {
    let ts_type = match shape_of(schema) {
        SchemaShape::ArrayOf {
            item,
            declared_array,
        } => {
            let item_type = item_type(&item, out);
            if declared_array {
                format!("{item_type}[]")
            } else {
                item_type
            }
        }
        SchemaShape::Reference(reference) => class_type(reference, out),
        SchemaShape::InlineObject(schema) => {
            let mut members = Vec::new();
            for (name, property) in &schema.properties {
                let optional = if schema.required.contains(name) { "" } else { "?" };
                let property_type = schema_type(property, param_name, out)?;
                members.push(format!("'{name}'{optional}:{property_type}"));
            }
            format!("{{{}}}", members.join(";"))
        }
        SchemaShape::Primitive { type_, format } => to_base_type(Some(type_), format),
        SchemaShape::Unresolvable => {
            return Err(CodegenError::UnresolvableType {
                parameter: param_name.to_string(),
            });
        }
    };
    Ok(ts_type)
}

fn parameter_type(param: &Parameter, out: &mut RequestParameters) -> Result<String, CodegenError> {
    if let Some(schema) = &param.schema {
        return schema_type(schema, &param.name, out);
    }
    if let Some(items) = &param.items {
        let item_type = item_type(&item_shape_of(items), out);
        return Ok(format!("{item_type}[]"));
    }
    Ok(to_base_type(param.type_.as_deref(), param.format.as_deref()))
}

fn deref_parameter<'a>(
    param: &'a RefOr<Parameter>,
    source: &'a SwaggerSource,
) -> Result<&'a Parameter, CodegenError> {
    source
        .resolve(param)
        .ok_or_else(|| CodegenError::UnknownReference {
            reference: param.reference().unwrap_or_default().to_string(),
        })
}

/**
Generates the request parameter fragments for one operation.

`params` is the operation's declared parameter list, `use_header_parameters`
controls whether `in: header` parameters are part of the generated request.
Fails without returning any fragments if a parameter's type cannot be
determined or a parameter reference does not resolve.
*/
pub fn request_parameters<'a>(
    params: impl IntoIterator<Item = &'a RefOr<Parameter>>,
    use_header_parameters: bool,
    source: &SwaggerSource,
) -> Result<RequestParameters, CodegenError> {
    let resolved = uniq_parameters(params)
        .into_iter()
        .map(|p| deref_parameter(p, source))
        .collect::<Result<Vec<_>, _>>()?;

    let mut seen = HashSet::new();
    for param in &resolved {
        if !seen.insert(param.name.as_str()) {
            warn!(
                "more than one parameter resolves to the name '{}', it is emitted more than once",
                param.name
            );
        }
    }

    let more_body_params = resolved
        .iter()
        .filter(|p| p.in_ == ParameterLocation::Body)
        .count()
        > 1;

    let mut out = RequestParameters::default();
    let mut body_parameters = Vec::new();

    for param in resolved {
        if !use_header_parameters && param.in_ == ParameterLocation::Header {
            debug!("skipping header parameter '{}'", param.name);
            continue;
        }

        let ts_type = parameter_type(param, &mut out)?;
        let binding = parameter_to_ts_binding(&param.name);

        out.request_parameters
            .push_str(&fragment::signature_field(param, &binding, &ts_type));

        match param.in_ {
            ParameterLocation::FormData => out
                .request_form_data
                .push_str(&fragment::form_data_snippet(param, &binding)),
            ParameterLocation::Path => out
                .request_path_replace
                .push_str(&fragment::path_replace_snippet(param, &binding)),
            ParameterLocation::Query => out
                .query_parameters
                .push(fragment::key_value_pair(param, &binding)),
            ParameterLocation::Body => body_parameters.push(if more_body_params {
                fragment::key_value_pair(param, &binding)
            } else {
                fragment::value_ref(&binding)
            }),
            ParameterLocation::Header => out
                .header_parameters
                .push(fragment::key_value_pair(param, &binding)),
        }
    }

    out.body_parameter = if more_body_params {
        format!("{{{}}}", body_parameters.join(","))
    } else {
        body_parameters.join(",")
    };

    Ok(out)
}
