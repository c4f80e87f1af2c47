/*
 * writers/json.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! JSON writer.
//!
//! Emits the document as pretty-printed JSON with each block tagged by
//! `type` (`heading`, `paragraph`, `blank-line`).

use std::io::Write;

use crate::document::Document;
use crate::error::ExportError;

pub fn write<W: Write>(doc: &Document, buf: &mut W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *buf, doc)?;
    writeln!(buf)?;
    Ok(())
}
