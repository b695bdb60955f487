use http::Method;
use indexmap::IndexMap;
use serde::Deserialize;

/// https://swagger.io/specification/v2/#parameter-object, see `in`
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Body,
    Header,
    FormData,
}

/**
Either a `$ref` pointer into the document or an inlined object.

Swagger 2.0 reference objects carry no siblings, but real world documents
sometimes put a `name` next to the `$ref`. If present, that explicit name wins
over the name derived from the reference.
*/
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
        name: Option<String>,
    },
    Object(T),
}

impl<T> RefOr<T> {
    pub fn reference(&self) -> Option<&str> {
        match self {
            RefOr::Reference { reference, .. } => Some(reference),
            RefOr::Object(_) => None,
        }
    }
}

/// see https://swagger.io/specification/v2/#parameter-object
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub in_: ParameterLocation,
    #[serde(default)]
    pub required: bool,
    pub description: Option<String>,
    /// primitive type tag of non-body parameters
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub format: Option<String>,
    /// only allowed for `in: body`, but some generators emit it elsewhere as well
    pub schema: Option<Schema>,
    /// item description of `type: array` parameters
    pub items: Option<Box<Schema>>,
}

/**
Subset of the Swagger 2.0 schema object needed to derive TypeScript type expressions.
See https://swagger.io/specification/v2/#schema-object

The same struct is used for the `items` object of non-body parameters, which is
a restricted schema.
*/
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Schema {
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
    pub format: Option<String>,
    pub items: Option<Box<Schema>>,
    #[serde(default)]
    pub properties: IndexMap<String, Schema>,
    #[serde(default)]
    pub required: Vec<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Info {
    pub title: Option<String>,
    pub description: Option<String>,
}

// see https://swagger.io/specification/v2/#path-item-object
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PathItem {
    pub get: Option<Operation>,
    pub put: Option<Operation>,
    pub post: Option<Operation>,
    pub delete: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,
    pub patch: Option<Operation>,
    /// parameters shared by all operations of this path
    #[serde(default)]
    pub parameters: Vec<RefOr<Parameter>>,
}

impl PathItem {
    pub fn operations_iter(&self) -> impl Iterator<Item = (Method, &Operation)> {
        [
            (Method::GET, &self.get),
            (Method::PUT, &self.put),
            (Method::POST, &self.post),
            (Method::DELETE, &self.delete),
            (Method::OPTIONS, &self.options),
            (Method::HEAD, &self.head),
            (Method::PATCH, &self.patch),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.as_ref().map(|op| (method, op)))
    }
}

// see https://swagger.io/specification/v2/#operation-object
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub consumes: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<RefOr<Parameter>>,
    #[serde(default)]
    pub deprecated: bool,
}
