//! Loading and validation of one configuration specification.

use std::mem;

use tracing::debug;

use crate::document::{self, Document};
use crate::validator::{self, Collector};

/// One configuration specification under validation.
///
/// Holds the raw source text, the short identifier used as the first segment
/// of every diagnostic, and - after [`load`](Self::load) - the normalized
/// document plus the ordered list of violations. `load` never fails: callers
/// decide validity by inspecting [`errors`](Self::errors).
#[derive(Debug, Clone)]
pub struct ConfigSpec {
    /// Identifier prefixed to every diagnostic, e.g. a check name.
    pub source: String,
    /// Normalized document tree. `Null` until loaded, and left `Null` when
    /// the source text does not parse.
    pub data: Document,
    /// Ordered diagnostics accumulated during the single validation pass.
    pub errors: Vec<String>,
    contents: String,
    loaded: bool,
}

impl ConfigSpec {
    pub fn new(contents: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            data: Document::Null,
            errors: Vec::new(),
            contents: contents.into(),
            loaded: false,
        }
    }

    /// Parse, validate, and normalize the held source text.
    ///
    /// Idempotent: the first call does all the work and marks the spec
    /// loaded, whatever the outcome; subsequent calls return immediately and
    /// never reprocess externally mutated data or duplicate diagnostics.
    pub fn load(&mut self) {
        if mem::replace(&mut self.loaded, true) {
            return;
        }

        let mut errors = Collector::new(&self.source);
        match document::parse(&self.contents) {
            Ok(mut data) => {
                validator::validate_spec(&mut data, &mut errors);
                // The partially-normalized document is kept even when
                // validation found errors, so tooling can inspect it.
                self.data = data;
            }
            Err(error) => {
                debug!(source = %self.source, %error, "specification source failed to parse");
                errors.report(&[], "Unable to parse the configuration specification");
            }
        }

        self.errors = errors.into_errors();
        debug!(
            source = %self.source,
            errors = self.errors.len(),
            "configuration specification loaded"
        );
    }

    /// Whether the specification has been loaded and passed every check.
    pub fn is_valid(&self) -> bool {
        self.loaded && self.errors.is_empty()
    }

    /// The normalized document as JSON, for downstream tooling.
    pub fn to_json(&self) -> serde_json::Value {
        self.data.to_json()
    }
}
