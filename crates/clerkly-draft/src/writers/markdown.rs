/*
 * writers/markdown.rs
 * Copyright (c) 2025 Clerkly Contributors
 */

//! Markdown writer.
//!
//! Heading level maps to the number of `#` marks and bold runs to `**`.
//! Markdown collapses empty lines, so a blank line is written as a
//! paragraph holding a non-breaking space to keep the vertical gap.
//!
//! Paragraph text is literal content. Inline markup characters are escaped,
//! and so is anything at the start of a line that CommonMark would read as
//! block structure (list markers, headings, quotes, fences). Line breaks
//! inside a paragraph become hard breaks so they never split it.

use std::io::{self, Write};

use crate::block::{Block, Run};
use crate::document::Document;

const EMPTY_PARAGRAPH: &str = "&nbsp;";

pub fn write<W: Write>(doc: &Document, buf: &mut W) -> io::Result<()> {
    for (i, block) in doc.blocks().iter().enumerate() {
        if i > 0 {
            writeln!(buf)?;
        }
        write_block(block, buf)?;
    }
    Ok(())
}

fn write_block<W: Write>(block: &Block, buf: &mut W) -> io::Result<()> {
    match block {
        Block::Heading { text, level, .. } => {
            let marks = "#".repeat(usize::from(*level).clamp(1, 6));
            writeln!(buf, "{} {}", marks, escape_markdown(text))
        }
        Block::Paragraph { runs } => {
            let mut text = String::new();
            for run in runs {
                push_run(run, &mut text);
            }
            writeln!(buf, "{}", escape_block_starts(&text))
        }
        Block::BlankLine => writeln!(buf, "{}", EMPTY_PARAGRAPH),
    }
}

fn push_run(run: &Run, out: &mut String) {
    let text = escape_markdown(&run.text);
    if run.bold && !text.trim().is_empty() {
        out.push_str("**");
        out.push_str(&text);
        out.push_str("**");
    } else {
        out.push_str(&text);
    }
}

/// Keep every line of a paragraph inside that paragraph.
///
/// Leading whitespace is insignificant in a Markdown paragraph and four
/// spaces would open a code block, so it is dropped.
fn escape_block_starts(text: &str) -> String {
    text.lines()
        .map(|line| escape_line_start(line.trim_start()))
        .collect::<Vec<_>>()
        .join("\\\n")
}

fn escape_line_start(line: &str) -> String {
    if line.starts_with(['#', '-', '+', '>', '=', '~', '<']) {
        return format!("\\{}", line);
    }

    // `1.` or `1)` opens an ordered list; escape the delimiter.
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if (1..=9).contains(&digits) && line[digits..].starts_with(['.', ')']) {
        return format!("{}\\{}", &line[..digits], &line[digits..]);
    }

    line.to_string()
}

/// Escape characters that would otherwise be read as inline markup.
fn escape_markdown(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
