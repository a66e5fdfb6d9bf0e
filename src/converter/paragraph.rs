//! Paragraph converter - turns a DOCX paragraph into a [`ParagraphBlock`].

use super::{convert_hyperlink, ConversionContext, RunConverter};
use crate::core::ParagraphBlock;
use rs_docx::document::{BodyContent, Paragraph, ParagraphContent};

/// Converter for Paragraph elements.
pub struct ParagraphConverter;

impl ParagraphConverter {
    /// Converts a Paragraph, collecting visible text and hyperlinks in
    /// reading order.
    pub fn convert(para: &Paragraph, context: &ConversionContext) -> ParagraphBlock {
        let style = para
            .property
            .as_ref()
            .and_then(|p| p.style_id.as_ref())
            .map(|s| context.style_name(s.value.as_ref()))
            .unwrap_or_default();

        let mut block = ParagraphBlock {
            style,
            ..Default::default()
        };
        Self::collect_content(para, &mut block);
        block
    }

    fn collect_content(para: &Paragraph, block: &mut ParagraphBlock) {
        for content in &para.content {
            match content {
                ParagraphContent::Run(run) => {
                    block.text.push_str(&RunConverter::text(run));
                }
                ParagraphContent::Link(hyperlink) => {
                    let link = convert_hyperlink(hyperlink);
                    block.text.push_str(&link.text);
                    block.links.push(link);
                }
                ParagraphContent::Insertion(ins) => {
                    // Tracked insertions are part of the visible text
                    for run in &ins.runs {
                        block.text.push_str(&RunConverter::text(run));
                    }
                }
                ParagraphContent::SDT(sdt) => {
                    // Inline content controls wrap ordinary paragraph content
                    if let Some(sdt_content) = &sdt.content {
                        for bc in &sdt_content.content {
                            if let BodyContent::Paragraph(inner_para) = bc {
                                Self::collect_content(inner_para, block);
                            }
                        }
                    }
                }
                // Deletions, bookmarks and field markers are invisible
                _ => {}
            }
        }
    }
}
