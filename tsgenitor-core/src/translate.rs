use std::collections::HashSet;

use heck::ToLowerCamelCase;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // anything that may not appear in a TypeScript identifier. Generic markers
    // like the guillemets springfox puts into definition names ('List«Pet»')
    // are covered by this as well
    static ref NON_IDENTIFIER_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_$]+").unwrap();
}

/// Prefixes names starting with a digit, which TypeScript does not allow
fn avoid_leading_digit(s: String) -> String {
    match s.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{s}"),
        None => "_".to_string(),
        _ => s,
    }
}

/**
Turns a `$ref` pointer like `#/definitions/Pet` into the name of the class
it refers to (`Pet`). Characters that are not allowed in identifiers are
replaced by underscores.
*/
pub fn ref_class_name(reference: &str) -> String {
    let name = reference.rsplit('/').next().unwrap_or(reference);
    let name = NON_IDENTIFIER_CHARS.replace_all(name, "_");
    avoid_leading_digit(name.trim_end_matches('_').to_string())
}

/// The identifier a parameter is bound to in generated code
pub fn parameter_to_ts_binding(param_name: &str) -> String {
    avoid_leading_digit(param_name.to_lower_camel_case())
}

/**
Maps a Swagger primitive `type`/`format` pair to a TypeScript type.
Type tags we don't know are passed through unchanged, as some documents use
model names there.
*/
pub fn to_base_type(type_: Option<&str>, format: Option<&str>) -> String {
    let ts_type = match (type_, format) {
        (None, _) | (Some(""), _) => "any",
        (Some("integer" | "number"), _) => "number",
        (Some("boolean"), _) => "boolean",
        (Some("string"), Some("binary")) => "any",
        (Some("string"), _) => "string",
        (Some("file"), _) => "any",
        (Some("object"), _) => "any",
        (Some("array"), _) => "any[]",
        (Some(other), _) => other,
    };
    ts_type.to_string()
}

/**
Derives the name of the generated request function. The operation id is
preferred; without one, the path and method are used, so that
`GET /pet/{petId}` becomes `petPetIdGet`.
*/
pub fn path_method_to_ts_fn_name(
    method: &http::Method,
    path: &str,
    operation_id: Option<&str>,
) -> String {
    if let Some(operation_id) = operation_id.filter(|id| !id.trim().is_empty()) {
        return avoid_leading_digit(operation_id.to_lower_camel_case());
    }

    let cleaned_path = NON_IDENTIFIER_CHARS.replace_all(path, " ");
    let candidate = format!("{cleaned_path} {}", method.as_str().to_lowercase());

    avoid_leading_digit(candidate.to_lower_camel_case())
}

pub trait ContainsPredicate {
    fn contains_str(&self, item: &str) -> bool;
}

impl ContainsPredicate for HashSet<String> {
    fn contains_str(&self, value: &str) -> bool {
        self.contains(value)
    }
}

/** Implements a collision strategy for generating unique names across a namespace */
pub fn uncollide(predicate: &impl ContainsPredicate, name_candidate: String) -> String {
    let mut n = 0;
    let mut candidate = name_candidate.clone();
    while predicate.contains_str(&candidate) {
        n += 1;
        candidate = format!("{name_candidate}{n}");
    }

    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;

    #[test]
    fn test_ref_class_name() {
        assert_eq!(ref_class_name("#/definitions/Pet"), "Pet");
        assert_eq!(ref_class_name("#/parameters/limitParam"), "limitParam");
        assert_eq!(ref_class_name("Pet"), "Pet");
    }

    #[test]
    fn test_ref_class_name_generics() {
        assert_eq!(ref_class_name("#/definitions/List«Pet»"), "List_Pet");
        assert_eq!(
            ref_class_name("#/definitions/Result<Page<Pet>>"),
            "Result_Page_Pet"
        );
        assert_eq!(ref_class_name("#/definitions/1stPlace"), "_1stPlace");
    }

    #[test]
    fn test_binding() {
        assert_eq!(parameter_to_ts_binding("petId"), "petId");
        assert_eq!(parameter_to_ts_binding("api_key"), "apiKey");
        assert_eq!(parameter_to_ts_binding("X-Request-Id"), "xRequestId");
        assert_eq!(parameter_to_ts_binding("filter.username"), "filterUsername");
        assert_eq!(parameter_to_ts_binding("2fa"), "_2fa");
    }

    #[test]
    fn test_base_types() {
        assert_eq!(to_base_type(Some("integer"), Some("int64")), "number");
        assert_eq!(to_base_type(Some("number"), Some("double")), "number");
        assert_eq!(to_base_type(Some("boolean"), None), "boolean");
        assert_eq!(to_base_type(Some("string"), Some("date-time")), "string");
        assert_eq!(to_base_type(Some("string"), Some("binary")), "any");
        assert_eq!(to_base_type(Some("file"), None), "any");
        assert_eq!(to_base_type(Some("object"), None), "any");
        assert_eq!(to_base_type(Some("array"), None), "any[]");
        assert_eq!(to_base_type(None, None), "any");
        assert_eq!(to_base_type(Some("Guid"), None), "Guid");
    }

    #[test]
    fn test_operation_id() {
        let result = path_method_to_ts_fn_name(&Method::GET, "/pet/{petId}", Some("getPetById"));
        assert_eq!(result, "getPetById");
        let result = path_method_to_ts_fn_name(&Method::GET, "/pet", Some("get_all_pets"));
        assert_eq!(result, "getAllPets");
    }

    #[test]
    fn test_simple_path() {
        let result = path_method_to_ts_fn_name(&Method::GET, "/foo", None);
        assert_eq!(result, "fooGet");
    }

    #[test]
    fn test_path_with_parameters() {
        let result = path_method_to_ts_fn_name(&Method::GET, "/bars/{bar_name}", None);
        assert_eq!(result, "barsBarNameGet");
    }

    #[test]
    fn test_blank_operation_id() {
        let result = path_method_to_ts_fn_name(&Method::DELETE, "/foo", Some("  "));
        assert_eq!(result, "fooDelete");
    }

    #[test]
    fn test_different_methods() {
        assert_eq!(path_method_to_ts_fn_name(&Method::PUT, "/foo", None), "fooPut");
        assert_eq!(
            path_method_to_ts_fn_name(&Method::PATCH, "/foo", None),
            "fooPatch"
        );
    }

    #[test]
    fn test_root_path() {
        let result = path_method_to_ts_fn_name(&Method::GET, "/", None);
        assert_eq!(result, "get");
    }

    #[test]
    fn test_uncollide() {
        let mut taken = HashSet::new();
        assert_eq!(uncollide(&taken, "addPet".to_string()), "addPet");
        taken.insert("addPet".to_string());
        assert_eq!(uncollide(&taken, "addPet".to_string()), "addPet1");
        taken.insert("addPet1".to_string());
        assert_eq!(uncollide(&taken, "addPet".to_string()), "addPet2");
    }
}
