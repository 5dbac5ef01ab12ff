//! Validation of top-level file entries.
//!
//! Files own two global namespaces: generated file names and example file
//! names. Both are tracked across the whole `files` array so a duplicate can
//! be reported against the earliest entry that claimed the name.

use super::{sections, Collector};
use crate::document::Document;

/// File names carrying this prefix target the auto-discovery pipeline and
/// follow its naming convention instead of the standard one.
const AUTODISCOVERY_PREFIX: &str = "auto_conf";

/// Example file name shipped alongside a standard configuration file.
const STANDARD_EXAMPLE_NAME: &str = "conf.yaml.example";

fn is_autodiscovery(file_name: &str) -> bool {
    file_name.starts_with(AUTODISCOVERY_PREFIX)
}

pub(crate) fn validate_files(files: &mut [Document], errors: &mut Collector) {
    // name -> first claiming index, in first-seen order
    let mut file_names: Vec<(String, usize)> = Vec::new();
    let mut example_names: Vec<(String, usize)> = Vec::new();

    for (position, entry) in files.iter_mut().enumerate() {
        let index = position + 1;
        let label = format!("file #{index}");

        let Some(file) = entry.as_mapping_mut() else {
            errors.report(&[&label], "File attribute must be a mapping object");
            continue;
        };

        let Some(name_value) = file.get("name") else {
            errors.report(
                &[&label],
                "Every file must contain a `name` attribute representing \
                 the final destination the Agent loads",
            );
            continue;
        };
        let Some(name) = name_value.as_str().map(str::to_owned) else {
            errors.report(&[&label], "Attribute `name` must be a string");
            continue;
        };

        match file_names.iter().find(|(seen, _)| *seen == name) {
            Some((_, first)) => errors.report(
                &[&label],
                format!("File name `{name}` already used by file #{first}"),
            ),
            None => file_names.push((name.clone(), index)),
        }

        if is_autodiscovery(&name) {
            if !file.contains_key("example_name") {
                file.insert("example_name", Document::String(name.clone()));
            }
        } else {
            // Advisory only: a non-standard name is flagged but the entry is
            // still validated in full.
            let expected = format!("{}.yaml", errors.source());
            if name != expected {
                errors.report(
                    &[&label],
                    format!("File name `{name}` should be `{expected}`"),
                );
            }
            if !file.contains_key("example_name") {
                file.insert(
                    "example_name",
                    Document::String(STANDARD_EXAMPLE_NAME.to_string()),
                );
            }
        }

        // Present for certain after defaulting above.
        let example_name = match file.get("example_name").and_then(Document::as_str) {
            Some(example) => Some(example.to_owned()),
            None => {
                errors.report(&[&label], "Attribute `example_name` must be a string");
                None
            }
        };

        if let Some(example_name) = example_name {
            if is_autodiscovery(&name) && example_name != name {
                errors.report(
                    &[&label],
                    format!("Example file name `{example_name}` should be `{name}`"),
                );
            }

            match example_names.iter().find(|(seen, _)| *seen == example_name) {
                Some((_, first)) => errors.report(
                    &[&label],
                    format!("Example file name `{example_name}` already used by file #{first}"),
                ),
                None => example_names.push((example_name, index)),
            }
        }

        let Some(sections) = file.get_mut("sections") else {
            errors.report(
                &[&name],
                "Every file must contain a `sections` attribute containing \
                 things like `init_config`, `instances`, etc.",
            );
            continue;
        };
        let Some(sections) = sections.as_sequence_mut() else {
            errors.report(&[&name], "The `sections` attribute must be an array");
            continue;
        };

        sections::validate_sections(sections, errors, &name);
    }
}
