/*
 * assembler.rs
 * Copyright (c) 2025 Clerkly Contributors
 *
 * Document assembly.
 */

//! Document assembly.
//!
//! Assembly composes registry lookup, required-field validation, field
//! resolution and builder invocation into one synchronous step. It reads
//! the caller's [`FieldMap`] without mutating it and returns either a
//! complete [`Document`] or an error; there is no partial result.

use tracing::debug;

use crate::document::Document;
use crate::error::DraftResult;
use crate::fields::FieldMap;
use crate::registry::TemplateRegistry;
use crate::resolver::{ResolvedFields, validate_required};
use crate::types::DocumentType;

/// Assembles documents against a template registry.
#[derive(Debug, Clone, Default)]
pub struct Assembler {
    registry: TemplateRegistry,
}

impl Assembler {
    /// Create an assembler using the built-in templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assembler using a custom registry.
    pub fn with_registry(registry: TemplateRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    /// Assemble a document from a string document type id.
    ///
    /// # Errors
    ///
    /// Returns `DraftError::UnknownTemplateType` if `document_type` does not
    /// name a registered template, and `DraftError::MissingRequiredField` if
    /// any required field is blank.
    pub fn assemble(&self, document_type: &str, fields: &FieldMap) -> DraftResult<Document> {
        let (document_type, _) = self.registry.lookup_id(document_type)?;
        self.assemble_type(document_type, fields)
    }

    /// Assemble a document for an already-parsed document type.
    pub fn assemble_type(
        &self,
        document_type: DocumentType,
        fields: &FieldMap,
    ) -> DraftResult<Document> {
        let builder = self.registry.lookup(document_type)?;
        validate_required(fields)?;

        let resolved = ResolvedFields::resolve(fields);
        let blocks = builder(&resolved);

        debug!(
            document_type = document_type.id(),
            blocks = blocks.len(),
            "Assembled document"
        );

        Ok(Document::new(document_type, blocks))
    }
}

/// Assemble a document using the built-in templates.
pub fn assemble(document_type: &str, fields: &FieldMap) -> DraftResult<Document> {
    Assembler::new().assemble(document_type, fields)
}
