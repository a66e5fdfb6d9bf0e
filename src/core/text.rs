//! Plain-text extraction and whitespace normalization for blocks.

use super::ast::{Block, TableBlock};
use once_cell::sync::Lazy;
use regex::Regex;

static MULTI_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("valid regex"));
static INLINE_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[Link\]\([^)]+\)").expect("valid regex"));

/// Replaces non-breaking spaces, trims, and collapses whitespace runs.
///
/// Every predicate input goes through this so pattern matching is
/// whitespace-insensitive.
pub fn normalize(text: &str) -> String {
    let replaced = text.replace('\u{00A0}', " ");
    MULTI_SPACE_RE
        .replace_all(replaced.trim(), " ")
        .into_owned()
}

/// Returns the plain text of a block.
///
/// Paragraphs yield their literal text. Tables yield every cell fragment,
/// nested tables included, joined by newlines in document order.
pub fn block_text(block: &Block) -> String {
    match block {
        Block::Paragraph(para) => para.text.clone(),
        Block::Table(table) => table_text(table),
    }
}

fn table_text(table: &TableBlock) -> String {
    let mut parts = Vec::new();
    for cell in table.cells() {
        for block in &cell.blocks {
            match block {
                Block::Paragraph(para) => parts.push(para.text.trim().to_string()),
                Block::Table(nested) => {
                    let nested_text = table_text(nested);
                    if !nested_text.is_empty() {
                        parts.push(nested_text);
                    }
                }
            }
        }
    }

    // At most one blank separator, never a leading one.
    let mut out: Vec<String> = Vec::with_capacity(parts.len());
    for part in parts {
        if part.is_empty() && out.last().map_or(true, |last| last.is_empty()) {
            continue;
        }
        out.push(part);
    }
    out.join("\n").trim().to_string()
}

/// Removes literal `[Link](url)` markup; the link itself is recovered
/// through hyperlink extraction.
pub fn strip_inline_links(text: &str) -> String {
    INLINE_LINK_RE.replace_all(text, "").trim().to_string()
}
