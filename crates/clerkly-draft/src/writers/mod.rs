/*
 * writers/mod.rs
 * Copyright (c) 2025 Clerkly Contributors
 *
 * Text serializers for assembled documents.
 */

//! Text serializers for assembled documents.
//!
//! Encoding into a word-processor package is left to an external encoder;
//! the JSON writer produces the hand-off form that encoder consumes. The
//! plain and Markdown writers exist for previewing and for piping into
//! other tools.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::ExportError;
use crate::types::DocumentType;

pub mod json;
pub mod markdown;
pub mod plain;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tagged block sequence for an external encoder
    #[default]
    Json,
    /// One line per paragraph
    Plain,
    /// Markdown with `#` headings and `**` bold runs
    Markdown,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Plain => "plain",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// File extension used for output files, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Plain => "txt",
            OutputFormat::Markdown => "md",
        }
    }

    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Plain, OutputFormat::Markdown]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "plain" | "txt" | "text" => Ok(OutputFormat::Plain),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(ExportError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}

/// Write a document in the given format.
pub fn write_document<W: Write>(
    doc: &Document,
    format: OutputFormat,
    buf: &mut W,
) -> Result<(), ExportError> {
    match format {
        OutputFormat::Json => json::write(doc, buf),
        OutputFormat::Plain => Ok(plain::write(doc, buf)?),
        OutputFormat::Markdown => Ok(markdown::write(doc, buf)?),
    }
}

/// Write a document in the given format to a string.
pub fn write_to_string(doc: &Document, format: OutputFormat) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_document(doc, format, &mut buf)?;
    // Every writer emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Conventional output file name: `{documentType}-{timestamp}.{ext}`.
///
/// `timestamp_millis` is the creation time in milliseconds since the Unix
/// epoch. It is passed in so naming stays independent of the clock.
pub fn output_file_name(
    document_type: DocumentType,
    timestamp_millis: u128,
    format: OutputFormat,
) -> String {
    format!(
        "{}-{}.{}",
        document_type.id(),
        timestamp_millis,
        format.extension()
    )
}
