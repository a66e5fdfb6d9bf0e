//! Style resolver - maps paragraph style ids to their display names.

use rs_docx::styles::{Style, Styles};
use std::collections::HashMap;

/// Resolver for DOCX paragraph style names.
///
/// Paragraphs only reference a style id (`Heading2`, `TOC1`); the heuristics
/// work on the display name (`heading 2`, `toc 1`) declared in the style
/// table, falling back to the id when the table has no entry.
pub struct StyleResolver<'a> {
    style_map: HashMap<&'a str, &'a Style<'a>>,
}

impl<'a> StyleResolver<'a> {
    pub fn new(styles: &'a Styles<'a>) -> Self {
        let mut style_map = HashMap::new();
        for style in &styles.styles {
            style_map.insert(style.style_id.as_ref(), style);
        }
        Self { style_map }
    }

    /// Returns the display name for a style id.
    pub fn display_name(&self, style_id: &str) -> String {
        self.style_map
            .get(style_id)
            .and_then(|style| style.name.as_ref())
            .map(|name| name.value.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(style_id)
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.style_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.style_map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_falls_back_to_id() {
        let docx = rs_docx::Docx::default();
        let resolver = StyleResolver::new(&docx.styles);
        assert_eq!(resolver.display_name("Heading2"), "Heading2");
        assert_eq!(resolver.display_name(""), "");
    }

    #[test]
    fn test_declared_style_uses_display_name() {
        use hard_xml::XmlRead;

        let styles = Styles::from_str(
            r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
                <w:style w:type="paragraph" w:styleId="Heading2">
                    <w:name w:val="heading 2"/>
                </w:style>
                <w:style w:type="paragraph" w:styleId="TOC1">
                    <w:name w:val="toc 1"/>
                </w:style>
            </w:styles>"#,
        )
        .expect("Failed to parse styles XML");

        let resolver = StyleResolver::new(&styles);
        assert_eq!(resolver.len(), 2);
        assert_eq!(resolver.display_name("Heading2"), "heading 2");
        assert_eq!(resolver.display_name("TOC1"), "toc 1");
    }
}
