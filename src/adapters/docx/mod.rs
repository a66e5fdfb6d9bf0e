mod extractor;
mod package;

use crate::core::DocumentBlocks;
use rs_docx::Docx;

/// Walks a parsed document body into format-independent blocks.
pub trait BlockExtractor {
    fn extract<'a>(&self, docx: &'a Docx<'a>) -> DocumentBlocks;
}

pub use extractor::DocxExtractor;
pub use package::validate_docx_package;
