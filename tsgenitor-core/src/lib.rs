use std::collections::HashSet;
use std::{io::Read, path::Path, str::FromStr};

use anyhow::Context;
use log::{info, warn};

mod codewriter;
mod probe;
mod requestcodegen;
mod source;
mod translate;
mod types;


pub use probe::{ProbeError, SpecVersion};
pub use requestcodegen::{
    CodegenError, RequestParameters, parameter_name, request_parameters, uniq_parameters,
};
pub use source::{SwaggerResolver, SwaggerSource};
pub use types::{Info, Operation, Parameter, ParameterLocation, PathItem, RefOr, Schema};

/// Settings that influence the generated code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// include `in: header` parameters in the generated requests
    pub use_header_parameters: bool,
    /// module the referenced model classes are imported from
    pub models_module: String,
    /// module providing `request`, `getConfigs` and the request config types
    pub runtime_module: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            use_header_parameters: false,
            models_module: "./models".to_string(),
            runtime_module: "./runtime".to_string(),
        }
    }
}

/** Everything needed to write the request function of one operation */
#[derive(Debug, Clone, PartialEq)]
pub struct OperationCode {
    pub method: http::Method,
    pub path: String,
    pub fn_name: String,
    pub doc: String,
    pub content_type: String,
    pub parameters: RequestParameters,
}

pub fn generate_from_path(path: &Path, options: &Options) -> anyhow::Result<String> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {} failed", path.display()))?;

    generate_from_reader(file, options)
}

pub fn generate_from_str(s: &str, options: &Options) -> anyhow::Result<String> {
    let source = SwaggerSource::from_str(s)?;
    generate_code(&source, options)
}

pub fn generate_from_reader(input: impl Read, options: &Options) -> anyhow::Result<String> {
    let source = SwaggerSource::from_reader(input)?;
    generate_code(&source, options)
}

fn generate_code(source: &SwaggerSource, options: &Options) -> anyhow::Result<String> {
    let operations = build_operations(source, options)?;
    let base_path = source.base_path.as_deref().unwrap_or_default();

    codewriter::write_to_string(&operations, base_path, options)
}

/**
Generates the request parameters of every operation in the document.
Fails on the first operation whose parameters cannot be generated.
*/
pub fn build_operations(
    source: &SwaggerSource,
    options: &Options,
) -> anyhow::Result<Vec<OperationCode>> {
    let mut operations = Vec::new();
    let mut fn_names = HashSet::new();

    for (path, method, path_item, operation) in source.operations() {
        info!("generating request for {method} {path}");

        // operation level parameters come last so they override path level ones
        let params = path_item.parameters.iter().chain(operation.parameters.iter());
        let parameters = request_parameters(params, options.use_header_parameters, source)
            .with_context(|| format!("generating parameters of {method} {path} failed"))?;

        for import in &parameters.imports {
            if SwaggerResolver::<Schema>::resolve_reference(source, import).is_none() {
                warn!("{method} {path} refers to '{import}', which has no definition");
            }
        }

        let fn_name = translate::uncollide(
            &fn_names,
            translate::path_method_to_ts_fn_name(
                &method,
                path,
                operation.operation_id.as_deref(),
            ),
        );
        fn_names.insert(fn_name.clone());

        operations.push(OperationCode {
            content_type: content_type(source, operation, &parameters),
            doc: operation_doc(operation),
            method,
            path: path.to_string(),
            fn_name,
            parameters,
        });
    }

    Ok(operations)
}

fn operation_doc(operation: &Operation) -> String {
    let mut doc: Vec<&str> = [operation.summary.as_deref(), operation.description.as_deref()]
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect();
    if operation.deprecated {
        doc.push("@deprecated");
    }
    doc.join("\n")
}

fn content_type(
    source: &SwaggerSource,
    operation: &Operation,
    parameters: &RequestParameters,
) -> String {
    if parameters.has_form_data() {
        return "multipart/form-data".to_string();
    }
    operation
        .consumes
        .first()
        .or(source.consumes.first())
        .map(String::as_str)
        .unwrap_or("application/json")
        .to_string()
}
