//! Converter modules for DOCX to Q&A record transformation.

mod context;
mod hyperlink;
mod paragraph;
mod run;
mod styles;
mod table;

use crate::adapters::docx::{validate_docx_package, BlockExtractor, DocxExtractor};
use crate::chunk::{chunk_records, Chunk, SourceInfo};
use crate::classify::Patterns;
use crate::core::{DocumentBlocks, QaRecord};
use crate::scan::scan;
use crate::{Error, Result, SplitterOptions};
use log::{debug, error, info, warn};
use rs_docx::{Docx, DocxFile};
use std::path::Path;

pub use self::context::ConversionContext;
pub use self::hyperlink::convert_hyperlink;
pub use self::paragraph::ParagraphConverter;
pub use self::run::RunConverter;
pub use self::styles::StyleResolver;
pub use self::table::TableConverter;

/// Main splitter that turns FAQ documents into Q&A records.
///
/// Holds only compiled, immutable patterns; every call runs its own scan,
/// so one splitter can serve many documents concurrently.
#[derive(Debug, Clone)]
pub struct FaqSplitter {
    patterns: Patterns,
}

impl FaqSplitter {
    /// Creates a new splitter, compiling the configured patterns.
    pub fn new(options: SplitterOptions) -> Result<Self> {
        let patterns = Patterns::compile(&options)?;
        debug!(
            "splitter config: heading_levels={}-{}, skip_patterns={}, question_patterns={}",
            options.min_heading_level,
            options.max_heading_level,
            options.skip_patterns.len(),
            options.question_patterns.len()
        );
        Ok(Self { patterns })
    }

    /// Creates a new splitter with default options.
    pub fn with_defaults() -> Self {
        let patterns = Patterns::compile(&SplitterOptions::default())
            .expect("default patterns are valid regexes");
        Self { patterns }
    }

    /// Splits a DOCX file into complete Q&A records.
    ///
    /// Records whose question or answer is empty are left out.
    ///
    /// # Errors
    /// Returns [`Error::UnreadableDocument`] when the file cannot be opened
    /// or parsed as a Word document. Nothing else fails.
    pub fn split<P: AsRef<Path>>(&self, path: P) -> Result<Vec<QaRecord>> {
        let records = self.scan_file(path.as_ref())?;
        Ok(records
            .into_iter()
            .filter(|record| record.is_complete())
            .collect())
    }

    fn scan_file(&self, path: &Path) -> Result<Vec<QaRecord>> {
        validate_docx_package(path)?;

        let docx_file = DocxFile::from_file(path)
            .map_err(|e| Error::unreadable(path, format!("{:?}", e)))?;
        let docx = docx_file
            .parse()
            .map_err(|e| Error::unreadable(path, format!("{:?}", e)))?;

        let records = self.split_docx(&docx);
        info!("Extracted {} Q&A pairs from {}", records.len(), path.display());
        Ok(records)
    }

    /// Scans an already parsed document. Every finalized record is
    /// returned, including ones with an empty answer; see
    /// [`QaRecord::is_complete`].
    pub fn split_docx<'a>(&self, docx: &'a Docx<'a>) -> Vec<QaRecord> {
        let blocks = DocxExtractor.extract(docx);
        debug!(
            "walked {} body blocks, {} relationships",
            blocks.blocks.len(),
            blocks.relationships.len()
        );
        self.split_blocks(&blocks)
    }

    /// Scans a pre-built block sequence, keeping records without an answer.
    pub fn split_blocks(&self, blocks: &DocumentBlocks) -> Vec<QaRecord> {
        scan(blocks, &self.patterns)
    }

    /// Splits a file and assembles one chunk per complete record.
    pub fn chunk_file(&self, source: &SourceInfo) -> Result<Vec<Chunk>> {
        let records = self.scan_file(&source.path)?;
        let chunks = chunk_records(&records, source);
        debug!("Split {} into {} Q&A chunks", source.path.display(), chunks.len());
        Ok(chunks)
    }

    /// Chunks a batch of sources. Non-DOCX files are skipped and unreadable
    /// documents are logged and skipped, so one bad file never stops a batch.
    pub fn chunk_files(&self, sources: &[SourceInfo]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        for source in sources {
            if !has_docx_extension(&source.path) {
                warn!("Skipping non-DOCX file: {}", source.path.display());
                continue;
            }
            match self.chunk_file(source) {
                Ok(mut doc_chunks) => chunks.append(&mut doc_chunks),
                Err(e) => error!("Error processing {}: {}", source.path.display(), e),
            }
        }
        chunks
    }
}

impl Default for FaqSplitter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn has_docx_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("docx"))
}
