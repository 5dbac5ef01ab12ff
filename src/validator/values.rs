//! Recursive, depth-aware validation of value schemas.
//!
//! The type vocabulary is a closed set dispatched exhaustively; an unknown
//! `type` is a data error, not a dispatch failure. `depth` counts descents
//! into array `items` or object `properties` entries: at depth 0 a missing
//! `example` is synthesized (or, for booleans, required), while nested
//! schemas are left untouched.

use super::Collector;
use crate::document::{Document, Mapping};

pub(crate) fn validate_value(
    value: &mut Mapping,
    errors: &mut Collector,
    path: &[&str],
    option_name: &str,
    depth: usize,
) {
    let Some(type_value) = value.get("type") else {
        errors.report(path, "Every value must contain a `type` attribute");
        return;
    };
    let Some(value_type) = type_value.as_str().map(str::to_owned) else {
        errors.report(path, "Attribute `type` must be a string");
        return;
    };

    match value_type.as_str() {
        "string" => validate_string(value, errors, path, option_name, depth),
        "integer" | "number" => validate_number(value, errors, path, option_name, depth, &value_type),
        "boolean" => validate_boolean(value, errors, path, depth),
        "array" => validate_array(value, errors, path, option_name, depth),
        "object" => validate_object(value, errors, path, option_name, depth),
        unknown => errors.report(path, format!("Unknown type `{unknown}`")),
    }
}

/// Example placeholder for an option with no explicit example, e.g. `<FOO>`.
fn placeholder(option_name: &str) -> String {
    format!("<{}>", option_name.to_uppercase())
}

fn validate_string(
    value: &mut Mapping,
    errors: &mut Collector,
    path: &[&str],
    option_name: &str,
    depth: usize,
) {
    match value.get("example") {
        Some(Document::String(_)) => {}
        Some(_) => errors.report(path, "Attribute `example` for `type` string must be a string"),
        None if depth == 0 => {
            value.insert("example", Document::String(placeholder(option_name)));
        }
        None => {}
    }

    match value.get("pattern") {
        Some(Document::String(_)) | None => {}
        Some(_) => errors.report(path, "Attribute `pattern` for `type` string must be a string"),
    }
}

fn validate_number(
    value: &mut Mapping,
    errors: &mut Collector,
    path: &[&str],
    option_name: &str,
    depth: usize,
    value_type: &str,
) {
    match value.get("example") {
        Some(example) if example.is_number() => {}
        Some(_) => errors.report(
            path,
            format!("Attribute `example` for `type` {value_type} must be a number"),
        ),
        None if depth == 0 => {
            value.insert("example", Document::String(placeholder(option_name)));
        }
        None => {}
    }

    let minimum = numeric_bound(value, "minimum", value_type, errors, path);
    let maximum = numeric_bound(value, "maximum", value_type, errors, path);
    if let (Some(minimum), Some(maximum)) = (minimum, maximum) {
        if maximum <= minimum {
            errors.report(
                path,
                format!(
                    "Attribute `maximum` for `type` {value_type} must be \
                     greater than attribute `minimum`"
                ),
            );
        }
    }
}

/// Read an optional numeric bound, reporting a wrong-type value and treating
/// it as absent for the range comparison.
fn numeric_bound(
    value: &Mapping,
    attribute: &str,
    value_type: &str,
    errors: &mut Collector,
    path: &[&str],
) -> Option<f64> {
    let bound = value.get(attribute)?;
    match bound.as_f64() {
        Some(bound) => Some(bound),
        None => {
            errors.report(
                path,
                format!("Attribute `{attribute}` for `type` {value_type} must be a number"),
            );
            None
        }
    }
}

fn validate_boolean(value: &mut Mapping, errors: &mut Collector, path: &[&str], depth: usize) {
    match value.get("example") {
        Some(Document::Bool(_)) => {}
        Some(_) => errors.report(
            path,
            "Attribute `example` for `type` boolean must be true or false",
        ),
        // Booleans have no sensible placeholder, so a top-level default is
        // required rather than synthesized.
        None if depth == 0 => errors.report(
            path,
            "Every boolean must contain a default `example` attribute",
        ),
        None => {}
    }
}

fn validate_array(
    value: &mut Mapping,
    errors: &mut Collector,
    path: &[&str],
    option_name: &str,
    depth: usize,
) {
    match value.get("example") {
        Some(Document::Sequence(_)) => {}
        Some(_) => errors.report(path, "Attribute `example` for `type` array must be an array"),
        None if depth == 0 => {
            value.insert("example", Document::Sequence(Vec::new()));
        }
        None => {}
    }

    match value.get("uniqueItems") {
        Some(Document::Bool(_)) | None => {}
        Some(_) => errors.report(
            path,
            "Attribute `uniqueItems` for `type` array must be true or false",
        ),
    }

    let min_items = size_bound(value, "minItems", errors, path);
    let max_items = size_bound(value, "maxItems", errors, path);
    if let (Some(min_items), Some(max_items)) = (min_items, max_items) {
        if max_items <= min_items {
            errors.report(
                path,
                "Attribute `maxItems` for `type` array must be greater than attribute `minItems`",
            );
        }
    }

    match value.get_mut("items") {
        Some(Document::Mapping(items)) => {
            validate_value(items, errors, path, option_name, depth + 1);
        }
        Some(_) => errors.report(
            path,
            "Attribute `items` for `type` array must be a mapping object",
        ),
        None => errors.report(path, "Every array must contain an `items` attribute"),
    }
}

/// Read an optional array size bound, which must be an integer (floats are
/// rejected, unlike the numeric range bounds).
fn size_bound(
    value: &Mapping,
    attribute: &str,
    errors: &mut Collector,
    path: &[&str],
) -> Option<i64> {
    match value.get(attribute)? {
        Document::Int(bound) => Some(*bound),
        _ => {
            errors.report(
                path,
                format!("Attribute `{attribute}` for `type` array must be an integer"),
            );
            None
        }
    }
}

fn validate_object(
    value: &mut Mapping,
    errors: &mut Collector,
    path: &[&str],
    option_name: &str,
    depth: usize,
) {
    match value.get("example") {
        Some(Document::Mapping(_)) => {}
        Some(_) => errors.report(
            path,
            "Attribute `example` for `type` object must be a mapping object",
        ),
        None if depth == 0 => {
            value.insert("example", Document::Mapping(Mapping::new()));
        }
        None => {}
    }

    let mut required_entries: Option<Vec<Document>> = None;
    match value.get("required") {
        None => {}
        Some(Document::Sequence(entries)) => {
            if entries.is_empty() {
                errors.report(
                    path,
                    "Remove attribute `required` for `type` object if no properties are required",
                );
            } else {
                if has_duplicates(entries) {
                    errors.report(
                        path,
                        "All entries in attribute `required` for `type` object must be unique",
                    );
                }
                required_entries = Some(entries.clone());
            }
        }
        Some(_) => errors.report(path, "Attribute `required` for `type` object must be an array"),
    }

    if !value.contains_key("properties") {
        value.insert("properties", Document::Sequence(Vec::new()));
    }

    let mut property_names: Vec<String> = Vec::new();
    let mut properties_valid = false;
    match value.get_mut("properties") {
        Some(Document::Sequence(entries)) => {
            properties_valid = true;
            for entry in entries.iter_mut() {
                let Some(property) = entry.as_mapping_mut() else {
                    errors.report(
                        path,
                        "Every entry in `properties` for `type` object must be a mapping object",
                    );
                    continue;
                };
                let Some(name_value) = property.get("name") else {
                    errors.report(
                        path,
                        "Every entry in `properties` for `type` object must \
                         contain a `name` attribute",
                    );
                    continue;
                };
                let Some(name) = name_value.as_str().map(str::to_owned) else {
                    errors.report(path, "Attribute `name` for `type` object must be a string");
                    continue;
                };
                property_names.push(name);
                validate_value(property, errors, path, option_name, depth + 1);
            }

            if has_duplicates(&property_names) {
                errors.report(
                    path,
                    "All entries in attribute `properties` for `type` object \
                     must have unique names",
                );
            }
        }
        Some(_) => errors.report(
            path,
            "Attribute `properties` for `type` object must be an array",
        ),
        None => {}
    }

    // Only meaningful against a well-formed property list; a non-string
    // entry can never name a declared property and is reported here too.
    // The message wording (including the missing space) is load-bearing for
    // downstream tooling that matches on it.
    if let Some(required) = required_entries {
        if properties_valid {
            let satisfied = required.iter().all(|entry| {
                entry
                    .as_str()
                    .is_some_and(|name| property_names.iter().any(|known| known == name))
            });
            if !satisfied {
                errors.report(
                    path,
                    "All entries in attribute `required` for `type` object \
                     must be defined in the`properties` attribute",
                );
            }
        }
    }
}

fn has_duplicates<T: PartialEq>(entries: &[T]) -> bool {
    entries
        .iter()
        .enumerate()
        .any(|(index, entry)| entries[..index].contains(entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse;

    fn schema(text: &str) -> Mapping {
        parse(text).unwrap().as_mapping().unwrap().clone()
    }

    fn check(value: &mut Mapping, depth: usize) -> Vec<String> {
        let mut errors = Collector::new("test");
        validate_value(value, &mut errors, &["test.yaml", "instances", "foo"], "foo", depth);
        errors.into_errors()
    }

    #[test]
    fn test_placeholder_uppercases_option_name() {
        assert_eq!(placeholder("foo"), "<FOO>");
        assert_eq!(placeholder("proxy_url"), "<PROXY_URL>");
    }

    #[test]
    fn test_has_duplicates() {
        assert!(!has_duplicates::<&str>(&[]));
        assert!(!has_duplicates(&["a", "b"]));
        assert!(has_duplicates(&["a", "b", "a"]));
    }

    #[test]
    fn test_string_example_synthesized_only_at_depth_zero() {
        let mut top = schema("type: string");
        assert!(check(&mut top, 0).is_empty());
        assert_eq!(
            top.get("example"),
            Some(&Document::String("<FOO>".to_string()))
        );

        let mut nested = schema("type: string");
        assert!(check(&mut nested, 1).is_empty());
        assert!(!nested.contains_key("example"));
    }

    #[test]
    fn test_number_bounds_accept_mixed_int_and_float() {
        let mut value = schema("type: number\nminimum: 1\nmaximum: 1.5");
        assert!(check(&mut value, 0).is_empty());

        let mut value = schema("type: number\nminimum: 1.5\nmaximum: 1");
        assert_eq!(
            check(&mut value, 0),
            ["test, test.yaml, instances, foo: Attribute `maximum` for `type` \
              number must be greater than attribute `minimum`"]
        );
    }

    #[test]
    fn test_unknown_type_stops_further_checks() {
        let mut value = schema("type: custom\nexample: 5");
        assert_eq!(
            check(&mut value, 0),
            ["test, test.yaml, instances, foo: Unknown type `custom`"]
        );
    }
}
