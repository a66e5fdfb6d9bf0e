//! Hyperlink converter - captures link text and raw targets.

use super::RunConverter;
use crate::core::HyperlinkRun;
use rs_docx::document::Hyperlink;

/// Captures a hyperlink with its text nodes joined (tabs and breaks are
/// not part of link text). Relationship ids are kept
/// unresolved; resolution happens against the document's relationship map.
pub fn convert_hyperlink(hyperlink: &Hyperlink) -> HyperlinkRun {
    let text = hyperlink
        .content
        .iter()
        .map(RunConverter::plain_text)
        .collect::<String>();

    HyperlinkRun {
        text,
        rel_id: hyperlink.id.as_ref().map(|id| id.to_string()),
        anchor: hyperlink.anchor.as_ref().map(|anchor| anchor.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hard_xml::XmlRead;
    use rs_docx::document::{Run, RunContent, Text};
    use std::borrow::Cow;

    fn text_run(text: &str) -> Run<'static> {
        let mut run = Run::default();
        run.content.push(RunContent::Text(Text {
            text: text.to_string().into(),
            ..Default::default()
        }));
        run
    }

    #[test]
    fn test_hyperlink_text_concatenates_runs() {
        let mut hyperlink = Hyperlink {
            id: Some(Cow::Borrowed("rId7")),
            ..Default::default()
        };
        hyperlink.content.push(text_run("Pricing "));
        hyperlink.content.push(text_run("Docs"));

        let run = convert_hyperlink(&hyperlink);
        assert_eq!(run.text, "Pricing Docs");
        assert_eq!(run.rel_id.as_deref(), Some("rId7"));
        assert_eq!(run.anchor, None);
    }

    #[test]
    fn test_hyperlink_text_ignores_tabs_and_breaks() {
        let run = Run::from_str(r#"<w:r><w:t>Pricing</w:t><w:tab/><w:br/><w:t>Docs</w:t></w:r>"#)
            .expect("Failed to parse run XML");

        let mut hyperlink = Hyperlink {
            id: Some(Cow::Borrowed("rId7")),
            ..Default::default()
        };
        hyperlink.content.push(run);

        assert_eq!(convert_hyperlink(&hyperlink).text, "PricingDocs");
    }

    #[test]
    fn test_anchor_hyperlink() {
        let mut hyperlink = Hyperlink {
            anchor: Some(Cow::Borrowed("_Toc123456789")),
            ..Default::default()
        };
        hyperlink.content.push(text_run("Introduction"));

        let run = convert_hyperlink(&hyperlink);
        assert_eq!(run.anchor.as_deref(), Some("_Toc123456789"));
        assert_eq!(run.rel_id, None);
    }
}
