//! Format-independent document model and extraction helpers.

pub mod ast;
pub mod links;
pub mod text;

pub use ast::{
    Block, DocumentBlocks, Hyperlink, HyperlinkRun, ParagraphBlock, QaRecord, Relationships,
    TableBlock, TableCell, TableRow,
};
pub use links::{extract_links, is_redundant_link};
pub use text::{block_text, normalize, strip_inline_links};
