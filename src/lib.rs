//! Validator and normalizer for Agent configuration specification documents.
//!
//! A configuration specification describes the shape of the configuration a
//! monitoring agent accepts: which files are generated, the sections inside
//! each file, the options inside each section, and the typed value schema of
//! every option. This crate parses such a document from YAML, checks the
//! structural and semantic rules at every nesting level in a single pass,
//! fills in defaults (`required`/`secret` flags, empty `options` arrays,
//! example file names, type-appropriate `example` values), and accumulates
//! every violation found instead of failing fast.
//!
//! ## Architecture
//!
//! 1. **Document model** (`document`): a closed tree of tagged variants
//!    produced from the YAML parser, with order-preserving mappings.
//!
//! 2. **Loader** (`spec`): [`ConfigSpec`] owns the source text, the
//!    normalized document, and the ordered diagnostic list; `load()` is
//!    idempotent and never fails.
//!
//! 3. **Validators** (`validator`): one validator per nesting level
//!    (files, sections, options, recursive value schemas), all reporting
//!    into a shared collector that prefixes each diagnostic with its
//!    location path.
//!
//! ## Example
//!
//! ```
//! use config_spec::ConfigSpec;
//!
//! let mut spec = ConfigSpec::new(
//!     "
//! files:
//! - name: test.yaml
//!   sections:
//!   - name: instances
//!     options:
//!     - name: server
//!       description: The server to monitor.
//!       required: true
//!       value:
//!         type: string
//! ",
//!     "test",
//! );
//! spec.load();
//!
//! assert!(spec.is_valid());
//! assert_eq!(
//!     spec.to_json()["files"][0]["sections"][0]["options"][0]["value"]["example"],
//!     "<SERVER>"
//! );
//! ```

pub mod document;
pub mod error;
pub mod spec;

mod validator;

pub use document::{parse, Document, Mapping};
pub use error::{DocumentError, Result};
pub use spec::ConfigSpec;
