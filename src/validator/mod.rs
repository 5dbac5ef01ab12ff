//! Recursive validation and normalization of specification documents.
//!
//! Each level of the document (files, sections, options, value schemas) has
//! its own validator that reports into a shared [`Collector`] and mutates the
//! document in place to fill defaults. Validators return normally in every
//! case; a malformed subtree is reported and skipped while siblings continue
//! to be processed.

mod files;
mod options;
mod sections;
mod values;

use std::fmt::Display;

use crate::document::Document;

/// Ordered accumulator for path-prefixed diagnostics.
///
/// Location segments (file, section, option) are passed down through the
/// recursive validators as slices and joined only when a diagnostic is
/// emitted, so nested checks pay nothing on the happy path.
#[derive(Debug)]
pub(crate) struct Collector {
    source: String,
    errors: Vec<String>,
}

impl Collector {
    pub(crate) fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            errors: Vec::new(),
        }
    }

    /// The specification identifier used as the first location segment.
    pub(crate) fn source(&self) -> &str {
        &self.source
    }

    /// Append a diagnostic scoped to the given location path.
    pub(crate) fn report(&mut self, path: &[&str], message: impl Display) {
        let mut location = self.source.clone();
        for segment in path {
            location.push_str(", ");
            location.push_str(segment);
        }
        self.errors.push(format!("{location}: {message}"));
    }

    pub(crate) fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

/// Validate a parsed specification document from the root down.
///
/// Root-level failures are terminal: without a well-formed `files` array
/// there is nothing further to check.
pub(crate) fn validate_spec(document: &mut Document, errors: &mut Collector) {
    let Some(root) = document.as_mapping_mut() else {
        errors.report(&[], "Configuration specifications must be a mapping object");
        return;
    };

    let Some(files) = root.get_mut("files") else {
        errors.report(
            &[],
            "Configuration specifications must contain a top-level `files` attribute",
        );
        return;
    };

    let Some(files) = files.as_sequence_mut() else {
        errors.report(&[], "The top-level `files` attribute must be an array");
        return;
    };

    files::validate_files(files, errors);
}
