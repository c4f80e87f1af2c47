/*
 * list.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! List command implementation

use anyhow::Result;

use clerkly_draft::TemplateRegistry;

/// Execute the list command
pub fn execute() -> Result<()> {
    let registry = TemplateRegistry::new();
    for doc_type in registry.document_types() {
        println!("{:<20} {}", doc_type.id(), doc_type.display_name());
    }
    Ok(())
}
