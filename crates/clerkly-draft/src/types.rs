/*
 * types.rs
 * Copyright (c) 2025 Clerkly Contributors
 *
 * Document type identifiers.
 */

use serde::{Deserialize, Serialize};

use crate::error::DraftError;

/// Type of legal document to assemble.
///
/// Each document type has exactly one template in the default registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    /// Notice served on an opposing party on behalf of a client
    LegalNotice,

    /// Application to a sessions court for grant of bail
    BailApplication,
}

impl DocumentType {
    /// Get the display name for this document type.
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::LegalNotice => "Legal Notice",
            DocumentType::BailApplication => "Bail Application",
        }
    }

    /// Get the kebab-case identifier for this document type.
    pub fn id(&self) -> &'static str {
        match self {
            DocumentType::LegalNotice => "legal-notice",
            DocumentType::BailApplication => "bail-application",
        }
    }

    /// Parse a document type from a string identifier.
    ///
    /// Accepts the kebab-case id as well as the camelCase ids used by
    /// older form submissions (`legalNotice`, `bailApplication`).
    pub fn from_id(id: &str) -> Result<Self, DraftError> {
        match id.trim() {
            "legal-notice" | "legalNotice" => Ok(DocumentType::LegalNotice),
            "bail-application" | "bailApplication" => Ok(DocumentType::BailApplication),
            _ => Err(DraftError::UnknownTemplateType {
                name: id.to_string(),
            }),
        }
    }

    /// List all document types.
    pub fn all() -> &'static [DocumentType] {
        &[DocumentType::LegalNotice, DocumentType::BailApplication]
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for DocumentType {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DocumentType::from_id(s)
    }
}
