//! Single-pass scanner folding document blocks into Q&A records.
//!
//! The scanner tracks three independent regions: the table of contents, a
//! skipped-heading region (e.g. "Summary"), and the currently open
//! question. TOC and skipped-region flags may overlap.

use crate::classify::{
    heading_level, is_question_heading, is_skip_heading, is_skipped_line, is_stop_heading,
    is_toc_marker, is_toc_noise, Patterns,
};
use crate::core::{
    block_text, extract_links, normalize, strip_inline_links, Block, DocumentBlocks, Hyperlink,
    QaRecord, Relationships,
};
use log::trace;

/// Highest heading level that still closes a TOC region.
const TOC_EXIT_MAX_LEVEL: u32 = 2;

/// Mutable state of one scan. Created per document and dropped with it.
#[derive(Debug, Default)]
struct ScanState {
    current_question: Option<String>,
    answer_lines: Vec<String>,
    links: Vec<Hyperlink>,
    in_toc: bool,
    in_skipped_heading_region: bool,
}

impl ScanState {
    /// Closes the open question. Question, answer lines and links are
    /// cleared together; records without an answer are still emitted so
    /// their position counts at assembly.
    fn finalize(&mut self, out: &mut Vec<QaRecord>) {
        let answer_lines = std::mem::take(&mut self.answer_lines);
        let links = std::mem::take(&mut self.links);
        let Some(question) = self.current_question.take() else {
            return;
        };

        let question = question.trim().to_string();
        let answer = answer_lines.join("\n").trim().to_string();
        if answer.is_empty() {
            trace!("finalized record without answer: {:?}", question);
        }

        out.push(QaRecord {
            question,
            answer,
            links,
        });
    }

    fn open(&mut self, question: String, out: &mut Vec<QaRecord>) {
        self.finalize(out);
        self.current_question = Some(question);
    }

    fn accumulate(&mut self, block: &Block, text: &str, raw: &str, rels: &Relationships) {
        if text.is_empty() {
            return;
        }
        let cleaned = strip_inline_links(raw);
        if !cleaned.is_empty() {
            self.answer_lines.push(cleaned);
        }
        self.links.extend(extract_links(block, rels));
    }
}

/// Scans the document blocks and returns every finalized record in order,
/// including ones whose answer is empty.
pub fn scan(document: &DocumentBlocks, patterns: &Patterns) -> Vec<QaRecord> {
    let mut out = Vec::new();
    let mut state = ScanState::default();

    for block in &document.blocks {
        let raw = block_text(block);
        let text = normalize(&raw);
        let level = heading_level(block);

        if is_toc_marker(block) {
            state.finalize(&mut out);
            state.in_toc = true;
            continue;
        }

        if state.in_toc && level.is_some_and(|l| l <= TOC_EXIT_MAX_LEVEL) {
            state.in_toc = false;
        }

        if state.in_toc && is_toc_noise(block) {
            continue;
        }

        if is_skip_heading(block, patterns) {
            state.in_skipped_heading_region = true;
            continue;
        }

        if state.in_skipped_heading_region && level.is_some() {
            state.in_skipped_heading_region = false;
        }

        if state.current_question.is_some() && is_stop_heading(block, patterns) {
            state.finalize(&mut out);
            continue;
        }

        if !state.in_toc
            && !state.in_skipped_heading_region
            && is_question_heading(block, patterns)
        {
            state.open(text, &mut out);
            continue;
        }

        if state.current_question.is_some() {
            if is_skipped_line(&text, patterns) {
                continue;
            }
            state.accumulate(block, &text, &raw, &document.relationships);
        }
    }

    state.finalize(&mut out);
    out
}
