use crate::core::{is_redundant_link, QaRecord};

pub const REFERENCES_HEADER: &str = "References (hyperlinks from the answer):";

/// Renders a record as retrieval text.
///
/// Links whose text merely restates their URL are left out of the
/// references block; the rest keep extraction order.
pub fn render_record(record: &QaRecord) -> String {
    let mut out = format!("Q: {}\n\nA: {}", record.question, record.answer);

    let references: Vec<String> = record
        .links
        .iter()
        .filter(|link| !is_redundant_link(&link.text, &link.target))
        .map(|link| format!("- {}: {}", link.text, link.target))
        .collect();

    if !references.is_empty() {
        out.push_str("\n\n");
        out.push_str(REFERENCES_HEADER);
        out.push('\n');
        out.push_str(&references.join("\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Hyperlink;
    use pretty_assertions::assert_eq;

    fn link(text: &str, target: &str) -> Hyperlink {
        Hyperlink {
            text: text.to_string(),
            target: target.to_string(),
        }
    }

    #[test]
    fn test_record_without_links() {
        let record = QaRecord {
            question: "What is X?".to_string(),
            answer: "A tool.".to_string(),
            links: Vec::new(),
        };
        assert_eq!(render_record(&record), "Q: What is X?\n\nA: A tool.");
    }

    #[test]
    fn test_redundant_links_filtered_from_references() {
        let record = QaRecord {
            question: "Where are prices?".to_string(),
            answer: "See the docs.".to_string(),
            links: vec![
                link("https://example.com", "https://example.com"),
                link("Pricing Docs", "https://example.com/pricing"),
                link("Setup", "#setup"),
            ],
        };
        assert_eq!(
            render_record(&record),
            "Q: Where are prices?\n\nA: See the docs.\n\n\
             References (hyperlinks from the answer):\n\
             - Pricing Docs: https://example.com/pricing\n\
             - Setup: #setup"
        );
    }

    #[test]
    fn test_only_redundant_links_omit_references_block() {
        let record = QaRecord {
            question: "Q?".to_string(),
            answer: "A".to_string(),
            links: vec![link("www.example.com", "https://www.example.com")],
        };
        assert_eq!(render_record(&record), "Q: Q?\n\nA: A");
    }
}
