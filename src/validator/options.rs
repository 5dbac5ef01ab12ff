//! Validation of the options within one section.
//!
//! Attribute-type failures here are non-terminal: a bad `description` still
//! lets `required`, `secret`, and `value` be checked, so one pass reports as
//! much as possible.

use super::{values, Collector};
use crate::document::Document;

pub(crate) fn validate_options(
    options: &mut [Document],
    errors: &mut Collector,
    file_name: &str,
    section_name: &str,
) {
    let mut option_names: Vec<(String, usize)> = Vec::new();

    for (position, entry) in options.iter_mut().enumerate() {
        let index = position + 1;
        let label = format!("option #{index}");

        let Some(option) = entry.as_mapping_mut() else {
            errors.report(
                &[file_name, section_name, &label],
                "Option attribute must be a mapping object",
            );
            continue;
        };

        let Some(name_value) = option.get("name") else {
            errors.report(
                &[file_name, section_name, &label],
                "Every option must contain a `name` attribute",
            );
            continue;
        };
        let Some(name) = name_value.as_str().map(str::to_owned) else {
            errors.report(
                &[file_name, section_name, &label],
                "Attribute `name` must be a string",
            );
            continue;
        };

        match option_names.iter().find(|(seen, _)| *seen == name) {
            Some((_, first)) => errors.report(
                &[file_name, section_name, &label],
                format!("Option name `{name}` already used by option #{first}"),
            ),
            None => option_names.push((name.clone(), index)),
        }

        // Once the name is known, diagnostics address the option by it.
        let path = [file_name, section_name, name.as_str()];

        match option.get("description") {
            Some(Document::String(_)) => {}
            Some(_) => errors.report(&path, "Attribute `description` must be a string"),
            None => errors.report(&path, "Every option must contain a `description` attribute"),
        }

        for flag in ["required", "secret"] {
            match option.get(flag) {
                Some(Document::Bool(_)) => {}
                Some(_) => errors.report(&path, format!("Attribute `{flag}` must be true or false")),
                None => option.insert(flag, Document::Bool(false)),
            }
        }

        let Some(value) = option.get_mut("value") else {
            errors.report(&path, "Every option must contain a `value` attribute");
            continue;
        };
        let Some(value) = value.as_mapping_mut() else {
            errors.report(&path, "Attribute `value` must be a mapping object");
            continue;
        };

        values::validate_value(value, errors, &path, &name, 0);
    }
}
