/*
 * block.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! Structural units of an assembled document.
//!
//! The block model is deliberately small: headings, paragraphs made of
//! styled runs, and explicit blank lines. It is the compatibility contract
//! with whatever encodes a [`Document`](crate::Document) into a
//! word-processor package, so adding a variant here requires matching
//! support on the encoder side.

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// The minimal styled text unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
}

impl Run {
    /// A run with no emphasis.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// A bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// One structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    /// Level 1 is the document title, level 2 a section.
    Heading {
        text: String,
        level: u8,
        #[serde(default)]
        alignment: Alignment,
    },

    /// A paragraph is always a sequence of runs, even for a single plain
    /// sentence.
    Paragraph { runs: Vec<Run> },

    /// An empty paragraph used for vertical spacing. Must survive every
    /// writer verbatim.
    BlankLine,
}

pub type Blocks = Vec<Block>;

impl Block {
    pub fn heading(text: impl Into<String>, level: u8, alignment: Alignment) -> Self {
        debug_assert!(level >= 1, "heading levels start at 1");
        Block::Heading {
            text: text.into(),
            level,
            alignment,
        }
    }

    /// A paragraph holding a single plain run.
    pub fn text(text: impl Into<String>) -> Self {
        Block::Paragraph {
            runs: vec![Run::plain(text)],
        }
    }

    pub fn paragraph(runs: Vec<Run>) -> Self {
        Block::Paragraph { runs }
    }

    pub fn blank() -> Self {
        Block::BlankLine
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Block::BlankLine)
    }

    /// The unstyled text of this block.
    ///
    /// Paragraph runs are concatenated; a blank line yields an empty string.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { text, .. } => text.clone(),
            Block::Paragraph { runs } => runs.iter().map(|r| r.text.as_str()).collect(),
            Block::BlankLine => String::new(),
        }
    }
}
