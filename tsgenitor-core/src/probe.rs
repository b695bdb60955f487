use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer};

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("no Swagger version declaration found in input")]
    NoVersionFound,
    #[error("unsupported document version '{0}', only Swagger 2.0 is supported")]
    UnsupportedVersion(String),
    #[error("input is not a YAML or JSON document")]
    InvalidDocument(#[source] serde_yaml::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpecVersion {
    Swagger20,
}

lazy_static! {
    static ref VERSION_STR: Regex = Regex::new(r"^\s*((\d+)\.(\d+))(\.\d+)?\s*$").unwrap();
}

/// the only top level keys we look at before committing to a full parse
#[derive(Deserialize)]
struct VersionDeclaration {
    #[serde(default, deserialize_with = "version_string")]
    swagger: Option<String>,
    #[serde(default, deserialize_with = "version_string")]
    openapi: Option<String>,
}

/// `swagger: 2.0` without quotes is a YAML float, so numbers are accepted as well
fn version_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_yaml::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_yaml::Value::String(s)) => Some(s),
        Some(serde_yaml::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

pub(crate) fn probe_version(input: &str) -> Result<SpecVersion, ProbeError> {
    let decl: VersionDeclaration =
        serde_yaml::from_str(input).map_err(ProbeError::InvalidDocument)?;

    match (decl.swagger, decl.openapi) {
        (Some(version), _) => {
            let major_minor = VERSION_STR
                .captures(&version)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str());
            match major_minor {
                Some("2.0") => Ok(SpecVersion::Swagger20),
                _ => Err(ProbeError::UnsupportedVersion(version)),
            }
        }
        (None, Some(version)) => Err(ProbeError::UnsupportedVersion(version)),
        (None, None) => Err(ProbeError::NoVersionFound),
    }
}

#[cfg(test)]
mod tests {
    use crate::probe::{ProbeError, SpecVersion, probe_version};

    #[test]
    pub fn test_match() {
        let input = r#"
            swagger: "2.0"
            info:
                title: probe
            "#;

        let v = probe_version(input).unwrap();
        assert_eq!(v, SpecVersion::Swagger20);
    }

    #[test]
    pub fn test_unquoted_version() {
        let v = probe_version("swagger: 2.0\npaths: {}\n").unwrap();
        assert_eq!(v, SpecVersion::Swagger20);
    }

    #[test]
    pub fn test_json() {
        let v = probe_version(r#"{"swagger":"2.0","paths":{}}"#).unwrap();
        assert_eq!(v, SpecVersion::Swagger20);
    }

    #[test]
    pub fn test_openapi3() {
        match probe_version("openapi: 3.0.3\npaths: {}\n") {
            Ok(_) => panic!("OpenAPI 3 documents must be rejected"),
            Err(ProbeError::UnsupportedVersion(v)) => assert_eq!(v, "3.0.3"),
            Err(e) => panic!("expected UnsupportedVersion, got {e:?}"),
        }
    }

    #[test]
    pub fn test_no_version() {
        match probe_version("info:\n  title: nothing\n") {
            Err(ProbeError::NoVersionFound) => (),
            other => panic!("expected NoVersionFound, got {other:?}"),
        }
    }

    #[test]
    pub fn test_junk() {
        match probe_version("just a line of text") {
            Err(ProbeError::InvalidDocument(_)) => (),
            other => panic!("expected InvalidDocument, got {other:?}"),
        }
    }

    #[test]
    pub fn test_invalid_document_location() {
        let err = anyhow::Error::from(
            probe_version("swagger: \"2.0\"\npaths:\n  /x: [unclosed\n").unwrap_err(),
        );
        let message = format!("{err:#}");
        assert!(message.contains("not a YAML or JSON document"), "{message}");
        assert!(message.contains("line "), "{message}");
    }
}
