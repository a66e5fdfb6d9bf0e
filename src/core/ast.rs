//! Block model for FAQ documents.
//!
//! The DOCX body is normalized into an ordered list of [`Block`]s before any
//! heuristics run, so the scanner never touches the XML model directly.

use serde::Serialize;
use std::collections::HashMap;

/// Output of the document walker: body blocks in document order plus the
/// relationship table needed to resolve external hyperlinks.
#[derive(Debug, Clone, Default)]
pub struct DocumentBlocks {
    pub blocks: Vec<Block>,
    pub relationships: Relationships,
}

/// One paragraph or one table, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(ParagraphBlock),
    Table(TableBlock),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphBlock {
    /// Visible text, including hyperlink text.
    pub text: String,
    /// Style display name (`Heading 2`, `toc 1`, ...). Falls back to the
    /// style id when the style table has no entry for it.
    pub style: String,
    pub links: Vec<HyperlinkRun>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableBlock {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

/// A table cell holds paragraphs and nested tables in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCell {
    pub blocks: Vec<Block>,
}

/// A hyperlink as found in the document, before relationship resolution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HyperlinkRun {
    pub text: String,
    pub rel_id: Option<String>,
    pub anchor: Option<String>,
}

/// A resolved hyperlink. `target` is either an external URL or `#anchor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hyperlink {
    pub text: String,
    pub target: String,
}

/// One finalized question/answer unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaRecord {
    pub question: String,
    pub answer: String,
    pub links: Vec<Hyperlink>,
}

impl QaRecord {
    /// Both question and answer carry text after trimming.
    pub fn is_complete(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }
}

/// Relationship map (rId -> target URL/path).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Relationships {
    targets: HashMap<String, String>,
}

impl Relationships {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, target: impl Into<String>) {
        self.targets.insert(id.into(), target.into());
    }

    /// Resolves a relationship ID to its target, ignoring empty targets.
    pub fn resolve(&self, id: &str) -> Option<&str> {
        self.targets
            .get(id)
            .map(String::as_str)
            .filter(|target| !target.is_empty())
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Relationships {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut rels = Relationships::new();
        for (id, target) in iter {
            rels.insert(id, target);
        }
        rels
    }
}

impl Block {
    /// Shorthand for a plain paragraph with the given style.
    pub fn paragraph(style: impl Into<String>, text: impl Into<String>) -> Self {
        Block::Paragraph(ParagraphBlock {
            text: text.into(),
            style: style.into(),
            links: Vec::new(),
        })
    }

    pub fn as_paragraph(&self) -> Option<&ParagraphBlock> {
        match self {
            Block::Paragraph(para) => Some(para),
            Block::Table(_) => None,
        }
    }
}

impl TableBlock {
    /// Builds a table from rows of cells, each cell a list of blocks.
    pub fn from_cells(rows: Vec<Vec<Vec<Block>>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .map(|cells| TableRow {
                    cells: cells
                        .into_iter()
                        .map(|blocks| TableCell { blocks })
                        .collect(),
                })
                .collect(),
        }
    }

    /// Iterates over every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &TableCell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }
}
