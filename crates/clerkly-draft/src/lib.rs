/*
 * lib.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! Template-based legal document assembly.
//!
//! This crate turns a document type plus a sparse map of case fields into an
//! ordered, styled sequence of blocks ready for an encoder. It supports:
//!
//! - A closed set of document types, each with one registered template
//! - Flat field substitution with bracketed placeholders for empty fields
//! - A required-field gate that refuses to emit placeholder-filled documents
//! - JSON, plain-text and Markdown serialization of the result
//!
//! # Architecture
//!
//! ```text
//! FieldStore ──snapshot──▶ FieldMap
//!                             │
//!        DocumentType ──▶ TemplateRegistry::lookup
//!                             │
//!                    validate_required
//!                             │
//!                   ResolvedFields::resolve
//!                             │
//!                      builder(&resolved)
//!                             │
//!                          Document ──▶ writers::write_document
//! ```
//!
//! Assembly is pure and synchronous: the same `(type, fields)` pair always
//! yields the same blocks.
//!
//! # Example
//!
//! ```
//! use clerkly_draft::{FieldMap, assemble};
//!
//! let fields: FieldMap = [("clientName", "Jane Doe"), ("caseDetails", "rent was not paid")]
//!     .into_iter()
//!     .collect();
//!
//! let doc = assemble("legal-notice", &fields)?;
//! assert_eq!(doc.blocks()[0].plain_text(), "LEGAL NOTICE");
//! # Ok::<(), clerkly_draft::DraftError>(())
//! ```

pub mod assembler;
pub mod block;
pub mod document;
pub mod error;
pub mod fields;
pub mod registry;
pub mod resolver;
pub mod templates;
pub mod types;
pub mod writers;

// Re-export main types at crate root
pub use assembler::{Assembler, assemble};
pub use block::{Alignment, Block, Blocks, Run};
pub use document::{Document, DocumentProperties};
pub use error::{DraftError, DraftResult, ExportError};
pub use fields::{FIELDS, FieldMap, FieldSpec, FieldStore, field_spec, required_fields};
pub use registry::TemplateRegistry;
pub use resolver::{ResolvedFields, resolve, validate_required};
pub use templates::{Builder, template_fields};
pub use types::DocumentType;
pub use writers::{OutputFormat, output_file_name, write_document, write_to_string};
