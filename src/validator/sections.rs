//! Validation of the sections within one file.

use super::{options, Collector};
use crate::document::Document;

pub(crate) fn validate_sections(
    sections: &mut [Document],
    errors: &mut Collector,
    file_name: &str,
) {
    // Section names are unique per file, not globally.
    let mut section_names: Vec<(String, usize)> = Vec::new();

    for (position, entry) in sections.iter_mut().enumerate() {
        let index = position + 1;
        let label = format!("section #{index}");

        let Some(section) = entry.as_mapping_mut() else {
            errors.report(
                &[file_name, &label],
                "Section attribute must be a mapping object",
            );
            continue;
        };

        let Some(name_value) = section.get("name") else {
            errors.report(
                &[file_name, &label],
                "Every section must contain a `name` attribute representing \
                 the top-level keys such as `instances` or `logs`",
            );
            continue;
        };
        let Some(name) = name_value.as_str().map(str::to_owned) else {
            errors.report(&[file_name, &label], "Attribute `name` must be a string");
            continue;
        };

        match section_names.iter().find(|(seen, _)| *seen == name) {
            Some((_, first)) => errors.report(
                &[file_name, &label],
                format!("Section name `{name}` already used by section #{first}"),
            ),
            None => section_names.push((name.clone(), index)),
        }

        if !section.contains_key("options") {
            section.insert("options", Document::Sequence(Vec::new()));
        }
        let Some(section_options) = section.get_mut("options").and_then(Document::as_sequence_mut)
        else {
            errors.report(
                &[file_name, &name],
                "The `options` attribute must be an array",
            );
            continue;
        };

        options::validate_options(section_options, errors, file_name, &name);
    }
}
