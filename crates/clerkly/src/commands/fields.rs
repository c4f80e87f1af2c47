/*
 * fields.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! Fields command implementation

use anyhow::Result;

use clerkly_draft::{DocumentType, field_spec, template_fields};

/// Execute the fields command
pub fn execute(document_type: &str) -> Result<()> {
    let document_type = DocumentType::from_id(document_type)?;

    for name in template_fields(document_type) {
        let Some(spec) = field_spec(name) else {
            continue;
        };
        let required = if spec.required { "required" } else { "optional" };
        println!(
            "{:<18} {:<18} {:<9} {}",
            spec.name, spec.label, required, spec.placeholder
        );
    }
    Ok(())
}
