/*
 * writers/plain.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! Plain-text writer.
//!
//! Each heading or paragraph becomes one line; each blank line becomes an
//! empty line. Styling is dropped.

use std::io::{self, Write};

use crate::block::Block;
use crate::document::Document;

pub fn write<W: Write>(doc: &Document, buf: &mut W) -> io::Result<()> {
    for block in doc.blocks() {
        write_block(block, buf)?;
    }
    Ok(())
}

fn write_block<W: Write>(block: &Block, buf: &mut W) -> io::Result<()> {
    match block {
        Block::Heading { text, .. } => writeln!(buf, "{}", text),
        Block::Paragraph { runs } => {
            for run in runs {
                write!(buf, "{}", run.text)?;
            }
            writeln!(buf)
        }
        Block::BlankLine => writeln!(buf),
    }
}
