use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use http::Method;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::probe::{SpecVersion, probe_version};
use crate::types::{Info, Operation, Parameter, PathItem, RefOr, Schema};

/**
A loaded Swagger 2.0 document.

Besides the paths, this is the registry `$ref` pointers are resolved
against: shared parameters live under `#/parameters/`, model definitions under
`#/definitions/`. It is never modified after loading.
*/
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwaggerSource {
    #[serde(default)]
    pub info: Info,
    pub base_path: Option<String>,
    #[serde(default)]
    pub consumes: Vec<String>,
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    #[serde(default)]
    pub definitions: IndexMap<String, Schema>,
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,
}

impl FromStr for SwaggerSource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, anyhow::Error> {
        match probe_version(s)? {
            SpecVersion::Swagger20 => Ok(serde_yaml::from_str(s)?),
        }
    }
}

impl SwaggerSource {
    pub fn from_reader(mut r: impl Read) -> anyhow::Result<Self> {
        let mut s = String::new();
        r.read_to_string(&mut s)?;
        Self::from_str(&s)
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// all operations of the document, in path declaration order
    pub fn operations(&self) -> impl Iterator<Item = (&str, Method, &PathItem, &Operation)> {
        self.paths.iter().flat_map(|(path, path_item)| {
            path_item
                .operations_iter()
                .map(move |(method, op)| (path.as_str(), method, path_item, op))
        })
    }
}

/// Resolves `$ref` pointers of one kind of object against a [SwaggerSource]
pub trait SwaggerResolver<T> {
    fn resolve<'a>(&'a self, ro: &'a RefOr<T>) -> Option<&'a T> {
        match ro {
            RefOr::Reference { reference, .. } => {
                let name = reference.strip_prefix(self.prefix())?;
                self.resolve_reference(name)
            }
            RefOr::Object(o) => Some(o),
        }
    }

    fn prefix(&self) -> &str;
    fn resolve_reference(&self, name: &str) -> Option<&T>;
}

impl SwaggerResolver<Parameter> for SwaggerSource {
    fn prefix(&self) -> &str {
        "#/parameters/"
    }

    fn resolve_reference(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }
}

impl SwaggerResolver<Schema> for SwaggerSource {
    fn prefix(&self) -> &str {
        "#/definitions/"
    }

    fn resolve_reference(&self, name: &str) -> Option<&Schema> {
        self.definitions.get(name)
    }
}
