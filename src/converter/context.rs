use super::StyleResolver;
use crate::core::Relationships;
use rs_docx::styles::Styles;
use rs_docx::Docx;

/// Read-only state shared while converting one document into blocks.
pub struct ConversionContext<'a> {
    rels: Relationships,
    style_resolver: StyleResolver<'a>,
}

impl<'a> ConversionContext<'a> {
    pub fn new(rels: Relationships, styles: &'a Styles<'a>) -> Self {
        Self {
            rels,
            style_resolver: StyleResolver::new(styles),
        }
    }

    /// Builds the context from a parsed document: its relationship table
    /// (rId -> target URL/path) and its style table.
    pub fn from_docx(docx: &'a Docx<'a>) -> Self {
        let rels: Relationships = docx
            .document_rels
            .as_ref()
            .map(|doc_rels| {
                doc_rels
                    .relationships
                    .iter()
                    .map(|rel| (rel.id.to_string(), rel.target.to_string()))
                    .collect()
            })
            .unwrap_or_default();

        Self::new(rels, &docx.styles)
    }

    pub fn style_name(&self, style_id: &str) -> String {
        self.style_resolver.display_name(style_id)
    }

    pub fn into_relationships(self) -> Relationships {
        self.rels
    }
}
