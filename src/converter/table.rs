//! Table converter - converts tables, nested tables included, into blocks.

use super::{ConversionContext, ParagraphConverter};
use crate::core::{Block, TableBlock, TableCell, TableRow};
use rs_docx::document::{Table, TableCellContent, TableRowContent};

/// Converter for Table elements.
pub struct TableConverter;

impl TableConverter {
    /// Converts a Table row by row; cell content keeps document order.
    pub fn convert(table: &Table, context: &ConversionContext) -> TableBlock {
        let rows = table
            .rows
            .iter()
            .map(|row| TableRow {
                cells: row
                    .cells
                    .iter()
                    .filter_map(|cell_content| match cell_content {
                        TableRowContent::TableCell(cell) => Some(TableCell {
                            blocks: Self::convert_cell_content(&cell.content, context),
                        }),
                        #[allow(unreachable_patterns)]
                        _ => None,
                    })
                    .collect(),
            })
            .collect();

        TableBlock { rows }
    }

    fn convert_cell_content(content: &[TableCellContent], context: &ConversionContext) -> Vec<Block> {
        content
            .iter()
            .map(|item| match item {
                TableCellContent::Paragraph(para) => {
                    Block::Paragraph(ParagraphConverter::convert(para, context))
                }
                TableCellContent::Table(table) => Block::Table(Self::convert(table, context)),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{block_text, Relationships};
    use rs_docx::document::{Paragraph, TableCell as DocxTableCell, TableRow as DocxTableRow};

    #[test]
    fn test_nested_table_converted_recursively() {
        let nested = Table::default().push_row(
            DocxTableRow::default()
                .push_cell(DocxTableCell::paragraph(Paragraph::default().push_text("inner"))),
        );

        let mut outer_cell = DocxTableCell::paragraph(Paragraph::default().push_text("outer"));
        outer_cell.content.push(TableCellContent::Table(nested));

        let table = Table::default().push_row(
            DocxTableRow::default()
                .push_cell(DocxTableCell::paragraph(Paragraph::default().push_text("left")))
                .push_cell(outer_cell),
        );

        let docx = rs_docx::Docx::default();
        let context = ConversionContext::new(Relationships::new(), &docx.styles);
        let block = TableConverter::convert(&table, &context);

        assert_eq!(block.rows.len(), 1);
        assert_eq!(block.rows[0].cells.len(), 2);
        assert!(matches!(block.rows[0].cells[1].blocks[1], Block::Table(_)));
        assert_eq!(block_text(&Block::Table(block)), "left\nouter\ninner");
    }
}
