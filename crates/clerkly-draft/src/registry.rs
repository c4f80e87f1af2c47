/*
 * registry.rs
 * Copyright (c) 2025 Clerkly Contributors
 *
 * Registry of document templates.
 */

//! Registry of document templates.
//!
//! The registry maps each [`DocumentType`] to the builder that produces its
//! blocks. It is populated once at startup and only read afterwards. Looking
//! up a type with no builder is an error, never a silent fallback: producing
//! the wrong document is worse than producing none.

use std::collections::HashMap;

use crate::error::{DraftError, DraftResult};
use crate::templates::{Builder, builtin_builder};
use crate::types::DocumentType;

/// Registry of template builders keyed by document type.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    builders: HashMap<DocumentType, Builder>,
}

impl TemplateRegistry {
    /// Create a registry with a builder for every document type.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for doc_type in DocumentType::all() {
            registry.register(*doc_type, builtin_builder(*doc_type));
        }
        registry
    }

    /// Create an empty registry (for testing).
    pub fn empty() -> Self {
        Self {
            builders: HashMap::new(),
        }
    }

    /// Register a builder.
    ///
    /// If a builder for the same type already exists, it is replaced.
    pub fn register(&mut self, document_type: DocumentType, builder: Builder) {
        self.builders.insert(document_type, builder);
    }

    /// Get the builder for a document type.
    pub fn lookup(&self, document_type: DocumentType) -> DraftResult<Builder> {
        self.builders
            .get(&document_type)
            .copied()
            .ok_or_else(|| DraftError::UnknownTemplateType {
                name: document_type.id().to_string(),
            })
    }

    /// Get the builder for a document type given by its string id.
    pub fn lookup_id(&self, id: &str) -> DraftResult<(DocumentType, Builder)> {
        let document_type = DocumentType::from_id(id)?;
        let builder = self.lookup(document_type)?;
        Ok((document_type, builder))
    }

    /// Check if a builder is registered for a document type.
    pub fn has_template(&self, document_type: DocumentType) -> bool {
        self.builders.contains_key(&document_type)
    }

    /// List registered document types in declaration order.
    pub fn document_types(&self) -> Vec<DocumentType> {
        let mut types: Vec<_> = self.builders.keys().copied().collect();
        types.sort();
        types
    }

    pub fn len(&self) -> usize {
        self.builders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}
