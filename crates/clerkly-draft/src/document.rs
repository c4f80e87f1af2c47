/*
 * document.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! The assembled document handed to a writer.

use serde::{Deserialize, Serialize};

use crate::block::{Block, Blocks};
use crate::types::DocumentType;

/// Document-level properties.
///
/// Only the source document type is recorded; page setup and styles are
/// left to the encoder's defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProperties {
    pub document_type: DocumentType,
}

/// An assembled document.
///
/// Built once from a field snapshot and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    properties: DocumentProperties,
    blocks: Blocks,
}

impl Document {
    pub fn new(document_type: DocumentType, blocks: Blocks) -> Self {
        Self {
            properties: DocumentProperties { document_type },
            blocks,
        }
    }

    pub fn properties(&self) -> &DocumentProperties {
        &self.properties
    }

    pub fn document_type(&self) -> DocumentType {
        self.properties.document_type
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Take ownership of the block sequence.
    pub fn into_blocks(self) -> Blocks {
        self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
