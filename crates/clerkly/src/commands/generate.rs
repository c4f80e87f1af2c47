/*
 * generate.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! Generate command implementation.
//!
//! Collects fields from an optional JSON file and `--field KEY=VALUE`
//! arguments, assembles the document, and writes it to a file or stdout.
//! Assembly errors and write errors are reported separately.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing::{info, warn};

use clerkly_draft::{
    Assembler, Document, DocumentType, DraftError, FieldMap, FieldStore, OutputFormat,
    field_spec, output_file_name, write_document,
};

use crate::config::Config;

/// Arguments for the generate command
#[derive(Debug)]
pub struct GenerateArgs {
    /// Document type id
    pub document_type: String,
    /// `KEY=VALUE` field arguments
    pub fields: Vec<String>,
    /// JSON file with field values
    pub fields_file: Option<PathBuf>,
    /// Output format
    pub to: Option<String>,
    /// Output file path, or `-` for stdout
    pub output: Option<String>,
    /// Output directory
    pub output_dir: Option<PathBuf>,
}

/// Execute the generate command
pub fn execute(args: GenerateArgs, config: &Config) -> Result<()> {
    let document_type = DocumentType::from_id(&args.document_type)?;

    let mut store = match &args.fields_file {
        Some(path) => FieldStore::from(read_fields_file(path)?),
        None => FieldStore::new(),
    };
    for (name, value) in parse_field_args(&args.fields)? {
        if field_spec(&name).is_none() {
            warn!(field = %name, "Ignoring unknown field");
        }
        store.set(name, value);
    }

    let format = match &args.to {
        Some(name) => name.parse::<OutputFormat>()?,
        None => config.format,
    };

    let doc = Assembler::new()
        .assemble_type(document_type, &store.snapshot())
        .map_err(|err| match err {
            DraftError::MissingRequiredField { .. } => {
                anyhow::anyhow!("{}. Please fill in the required fields.", err)
            }
            other => other.into(),
        })?;

    match args.output.as_deref() {
        Some("-") => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_document(&doc, format, &mut out)?;
            out.flush()?;
        }
        Some(path) => write_file(&doc, format, Path::new(path))?,
        None => {
            let dir = args.output_dir.as_deref().unwrap_or(config.output_dir.as_path());
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            let path = dir.join(output_file_name(document_type, timestamp_millis()?, format));
            write_file(&doc, format, &path)?;
        }
    }

    Ok(())
}

/// Parse `KEY=VALUE` arguments. The value may itself contain `=`.
pub fn parse_field_args(args: &[String]) -> Result<Vec<(String, String)>> {
    args.iter()
        .map(|arg| -> Result<(String, String)> {
            let (name, value) = arg
                .split_once('=')
                .with_context(|| format!("Invalid field '{}': expected KEY=VALUE", arg))?;
            let name = name.trim();
            if name.is_empty() {
                anyhow::bail!("Invalid field '{}': empty field name", arg);
            }
            Ok((name.to_string(), value.to_string()))
        })
        .collect()
}

fn read_fields_file(path: &Path) -> Result<FieldMap> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read fields file: {}", path.display()))?;
    serde_json::from_str(&source)
        .with_context(|| format!("Fields file must be a JSON object of strings: {}", path.display()))
}

fn write_file(doc: &Document, format: OutputFormat, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_document(doc, format, &mut out)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    out.flush()?;

    info!(
        document_type = doc.document_type().id(),
        format = format.as_str(),
        "Wrote {}",
        path.display()
    );
    Ok(())
}

fn timestamp_millis() -> Result<u128> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before the Unix epoch")?
        .as_millis())
}
