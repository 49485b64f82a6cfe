//! Riftbound importer - Convert plain-text rulebooks into viewer JSON documents.
//!
//! This crate reads the Riftbound "Core Rules" and "Tournament Rules" as
//! plain text, recognises rule headers such as `103.1.b.2.`, accumulates each
//! rule's body text, derives breadcrumb paths and writes the JSON document
//! consumed by the rules viewer.
//!
//! # Example
//!
//! ```
//! use riftbound_importer::{build_document, DocumentFamily, DocumentOverrides};
//!
//! let text = "103. To play Riftbound...\n103.1.b.2. Your deck's Domain Identity is dictated...\n";
//! let doc = build_document(DocumentFamily::CoreRules, text, &DocumentOverrides::default()).unwrap();
//!
//! assert_eq!(doc.entries.len(), 2);
//! assert_eq!(doc.entries[1].key, "CR-103.1.b.2");
//! assert_eq!(doc.entries[1].path[..2], ["103", "To play Riftbound..."]);
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Per-family defaults and validation
//! - [`types`]: Rule and document types
//! - [`error`]: Error types and Result alias
//! - [`source`]: Lossy reading of rulebook text files
//! - [`reference`]: Dotted reference helpers and sort key
//! - [`hierarchy`]: Breadcrumb paths and macro sections
//! - [`parser`]: Line classifier, rule accumulator and family parsers
//! - [`document`]: Metadata resolution and JSON output
//! - [`importer`]: Read, parse and write in one call
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod hierarchy;
pub mod importer;
pub mod parser;
pub mod reference;
pub mod source;
pub mod types;

// Re-export main functions
pub use document::{build_document, generate_json, save_json, DocumentOverrides};
pub use importer::{import_rulebook, parse_rulebook};

// Re-export commonly used items
pub use config::validate_date;
pub use error::{ImporterError, Result};
pub use types::{Document, DocumentEntry, DocumentFamily, RuleEntry};
