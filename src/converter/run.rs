//! Run element converter - extracts visible text from runs.

use rs_docx::document::{Run, RunContent};

/// Converter for Run elements.
pub struct RunConverter;

impl RunConverter {
    /// Returns the visible text of a run.
    ///
    /// Tabs and breaks become `\t` and `\n`; field instructions, drawings
    /// and note references carry no answer text and are skipped.
    pub fn text(run: &Run) -> String {
        let mut text = String::new();
        for content in &run.content {
            match content {
                RunContent::Text(t) => text.push_str(&t.text),
                RunContent::Tab(_) => text.push('\t'),
                RunContent::Break(_) | RunContent::CarriageReturn(_) => text.push('\n'),
                _ => {}
            }
        }
        text
    }

    /// Concatenated `w:t` text only, without tab or break characters.
    pub fn plain_text(run: &Run) -> String {
        run.content
            .iter()
            .filter_map(|content| match content {
                RunContent::Text(t) => Some(&*t.text),
                _ => None,
            })
            .collect()
    }
}
