/*
 * error.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! Error types for document assembly and export.
//!
//! Assembly errors and export errors are kept apart: a failure to serialize
//! or save a finished document says nothing about whether assembly was valid.

use thiserror::Error;

/// Errors that can occur while assembling a document.
///
/// Both variants are caller errors. Assembly is deterministic, so retrying
/// with the same input reproduces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    /// The selected document type has no registered template.
    #[error("Unknown template type: {name}")]
    UnknownTemplateType { name: String },

    /// One or more required fields are empty after trimming.
    #[error("Missing required field(s): {}", .fields.join(", "))]
    MissingRequiredField { fields: Vec<String> },
}

/// Errors raised when serializing a finished document.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Unknown output format: {name}")]
    UnknownFormat { name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for assembly operations.
pub type DraftResult<T> = Result<T, DraftError>;
