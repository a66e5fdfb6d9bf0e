use super::BlockExtractor;
use crate::converter::{ConversionContext, ParagraphConverter, TableConverter};
use crate::core::{Block, DocumentBlocks};
use rs_docx::document::BodyContent;
use rs_docx::Docx;

#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl BlockExtractor for DocxExtractor {
    fn extract<'a>(&self, docx: &'a Docx<'a>) -> DocumentBlocks {
        let context = ConversionContext::from_docx(docx);
        let mut blocks = Vec::new();
        for content in &docx.document.body.content {
            self.extract_content(content, &context, &mut blocks);
        }

        DocumentBlocks {
            blocks,
            relationships: context.into_relationships(),
        }
    }
}

impl DocxExtractor {
    fn extract_content(
        &self,
        content: &BodyContent,
        context: &ConversionContext,
        output: &mut Vec<Block>,
    ) {
        match content {
            BodyContent::Paragraph(para) => {
                output.push(Block::Paragraph(ParagraphConverter::convert(para, context)));
            }
            BodyContent::Table(table) => {
                output.push(Block::Table(TableConverter::convert(table, context)));
            }
            BodyContent::Sdt(sdt) => {
                // Generated TOCs and content controls wrap body content
                if let Some(sdt_content) = &sdt.content {
                    for child in &sdt_content.content {
                        self.extract_content(child, context, output);
                    }
                }
            }
            _ => {}
        }
    }
}
