/*
 * templates/mod.rs
 * Copyright (c) 2025 Clerkly Contributors
 *
 * Boilerplate builders for each document type.
 *
 * A builder is a pure function from resolved fields to blocks. Builders do
 * no I/O and read no clock, so identical fields always produce identical
 * documents.
 */

use crate::block::Blocks;
use crate::resolver::ResolvedFields;
use crate::types::DocumentType;

pub mod bail_application;
pub mod legal_notice;

/// A template builder.
pub type Builder = fn(&ResolvedFields) -> Blocks;

/// Get the built-in builder for a document type.
pub fn builtin_builder(document_type: DocumentType) -> Builder {
    match document_type {
        DocumentType::LegalNotice => legal_notice::build,
        DocumentType::BailApplication => bail_application::build,
    }
}

/// Names of the fields a document type's template reads, in form order.
pub fn template_fields(document_type: DocumentType) -> &'static [&'static str] {
    match document_type {
        DocumentType::LegalNotice => legal_notice::FIELDS,
        DocumentType::BailApplication => bail_application::FIELDS,
    }
}
