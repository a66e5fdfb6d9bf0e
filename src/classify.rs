//! Heading and line classification heuristics.
//!
//! Every predicate is a free function of a [`Block`] and the compiled
//! [`Patterns`], so the scanner composes them without hidden state.

use crate::core::{block_text, normalize, Block};
use crate::{Error, Result, SplitterOptions};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static HEADING_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^heading\s*(\d+)$")
        .case_insensitive(true)
        .build()
        .expect("valid regex")
});
static DOT_LEADER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.{2,}\s*\d{1,4}\s*$").expect("valid regex"));
static PAGE_NUMBER_TRAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s\d{1,4}\s*$").expect("valid regex"));

const TOC_MARKERS: [&str; 2] = ["table of contents", "contents"];
const TOC_STYLE_PREFIX: &str = "toc";

/// Classification patterns compiled once from [`SplitterOptions`].
#[derive(Debug, Clone)]
pub struct Patterns {
    pub min_heading_level: u32,
    pub max_heading_level: u32,
    /// Upper-cased boilerplate lines dropped from answers.
    skip_patterns: Vec<String>,
    /// Lower-cased heading titles opening a skipped region.
    skip_headings: Vec<String>,
    /// Lower-cased question prefixes.
    question_patterns: Vec<String>,
    stop_sections: Vec<Regex>,
}

impl Patterns {
    /// Compiles the options. Stop-section patterns must match the whole
    /// normalized text and are case-insensitive.
    pub fn compile(options: &SplitterOptions) -> Result<Self> {
        let stop_sections = options
            .stop_section_patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(&format!("^(?:{})$", pattern))
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| Error::InvalidPattern {
                        pattern: pattern.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            min_heading_level: options.min_heading_level,
            max_heading_level: options.max_heading_level,
            skip_patterns: options
                .skip_patterns
                .iter()
                .map(|p| p.to_uppercase())
                .collect(),
            skip_headings: options
                .skip_headings
                .iter()
                .map(|h| h.to_lowercase())
                .collect(),
            question_patterns: options
                .question_patterns
                .iter()
                .map(|p| p.to_lowercase())
                .collect(),
            stop_sections,
        })
    }

    fn is_skip_title(&self, lower_title: &str) -> bool {
        self.skip_headings.iter().any(|h| h == lower_title)
    }
}

/// Parses a "Heading N" style label into its level.
pub fn parse_heading_style(style: &str) -> Option<u32> {
    HEADING_STYLE_RE
        .captures(style.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|level| level.as_str().parse().ok())
}

/// Heading level of a paragraph, `None` for body text and tables.
pub fn heading_level(block: &Block) -> Option<u32> {
    block
        .as_paragraph()
        .and_then(|para| parse_heading_style(&para.style))
}

/// Normalized, lower-cased paragraph text; empty for tables.
fn paragraph_title(block: &Block) -> String {
    block
        .as_paragraph()
        .map(|para| normalize(&para.text).to_lowercase())
        .unwrap_or_default()
}

/// A heading inside the configured level range that reads like a question.
pub fn is_question_heading(block: &Block, patterns: &Patterns) -> bool {
    let Some(para) = block.as_paragraph() else {
        return false;
    };
    let text = normalize(&para.text);
    if text.is_empty() {
        return false;
    }

    let lower = text.to_lowercase();
    if patterns.is_skip_title(&lower) {
        return false;
    }

    match heading_level(block) {
        Some(level)
            if (patterns.min_heading_level..=patterns.max_heading_level).contains(&level) => {}
        _ => return false,
    }

    if text.contains('?') {
        return true;
    }

    patterns
        .question_patterns
        .iter()
        .any(|prefix| lower.starts_with(prefix.as_str()))
}

/// "Table of Contents" / "Contents" marker paragraph.
pub fn is_toc_marker(block: &Block) -> bool {
    block.as_paragraph().is_some() && TOC_MARKERS.contains(&paragraph_title(block).as_str())
}

/// A paragraph that looks like a TOC entry: TOC style, dot leader, or a
/// trailing page number on a line with several periods.
pub fn is_toc_noise(block: &Block) -> bool {
    let Some(para) = block.as_paragraph() else {
        return false;
    };
    para.style.to_lowercase().starts_with(TOC_STYLE_PREFIX) || is_toc_line(&para.text)
}

/// Dotted-leader TOC line detection on raw text.
pub fn is_toc_line(text: &str) -> bool {
    let text = normalize(text);
    if text.is_empty() {
        return false;
    }
    DOT_LEADER_RE.is_match(&text)
        || (PAGE_NUMBER_TRAIL_RE.is_match(&text) && text.matches('.').count() >= 3)
}

/// A heading whose title opens a skipped region (e.g. "Summary").
pub fn is_skip_heading(block: &Block, patterns: &Patterns) -> bool {
    heading_level(block).is_some() && patterns.is_skip_title(&paragraph_title(block))
}

/// A block whose whole normalized text is a stop-section title.
pub fn is_stop_heading(block: &Block, patterns: &Patterns) -> bool {
    let text = normalize(&block_text(block));
    patterns.stop_sections.iter().any(|re| re.is_match(&text))
}

/// Boilerplate line matching a skip pattern, compared case-insensitively.
pub fn is_skipped_line(normalized_text: &str, patterns: &Patterns) -> bool {
    let upper = normalized_text.to_uppercase();
    patterns.skip_patterns.iter().any(|p| *p == upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TableBlock;

    fn patterns() -> Patterns {
        Patterns::compile(&SplitterOptions::default()).expect("default patterns compile")
    }

    fn heading(level: u32, text: &str) -> Block {
        Block::paragraph(format!("Heading {}", level), text)
    }

    #[test]
    fn test_parse_heading_style_variants() {
        assert_eq!(parse_heading_style("Heading 2"), Some(2));
        assert_eq!(parse_heading_style("Heading2"), Some(2));
        assert_eq!(parse_heading_style("heading 3"), Some(3));
        assert_eq!(parse_heading_style("Heading"), None);
        assert_eq!(parse_heading_style("Heading 2 Char"), None);
        assert_eq!(parse_heading_style("Normal"), None);
        assert_eq!(parse_heading_style("Subheading 2"), None);
    }

    #[test]
    fn test_question_mark_heading_in_range() {
        let p = patterns();
        assert!(is_question_heading(&heading(2, "Can I reset it?"), &p));
        assert!(is_question_heading(&heading(6, "Why?"), &p));
        assert!(!is_question_heading(&heading(1, "Top level?"), &p));
        assert!(!is_question_heading(&heading(7, "Too deep?"), &p));
        assert!(!is_question_heading(&Block::paragraph("Normal", "Body?"), &p));
    }

    #[test]
    fn test_question_prefix_heading() {
        let p = patterns();
        assert!(is_question_heading(&heading(3, "I cannot log in"), &p));
        assert!(is_question_heading(&heading(3, "How do I\u{00A0}\u{00A0}deploy"), &p));
        assert!(!is_question_heading(&heading(3, "Installation"), &p));
        assert!(!is_question_heading(&heading(3, "Mystery"), &p));
    }

    #[test]
    fn test_skip_heading_never_a_question() {
        let p = patterns();
        let summary = heading(2, "Summary");
        assert!(is_skip_heading(&summary, &p));
        assert!(!is_question_heading(&summary, &p));
        assert!(!is_skip_heading(&Block::paragraph("Normal", "Summary"), &p));
    }

    #[test]
    fn test_toc_marker() {
        assert!(is_toc_marker(&Block::paragraph("Normal", "Table of Contents")));
        assert!(is_toc_marker(&Block::paragraph("Heading 1", "  CONTENTS ")));
        assert!(!is_toc_marker(&Block::paragraph("Normal", "Contents of the box")));
    }

    #[test]
    fn test_toc_noise() {
        assert!(is_toc_noise(&Block::paragraph("Normal", "Intro ..... 3")));
        assert!(is_toc_noise(&Block::paragraph("toc 1", "Intro")));
        assert!(is_toc_noise(&Block::paragraph("TOC Heading", "Anything")));
        assert!(is_toc_noise(&Block::paragraph("Normal", "1.2.3. Setup 14")));
        assert!(!is_toc_noise(&Block::paragraph("Normal", "Version 2 released")));
        assert!(!is_toc_noise(&Block::Table(TableBlock::default())));
    }

    #[test]
    fn test_stop_heading_requires_full_match() {
        let p = patterns();
        assert!(is_stop_heading(&heading(2, "Related Articles"), &p));
        assert!(is_stop_heading(&heading(2, "related article"), &p));
        assert!(is_stop_heading(&Block::paragraph("Normal", "See  also"), &p));
        assert!(is_stop_heading(&heading(3, "Related resources"), &p));
        assert!(!is_stop_heading(&heading(2, "Related articles about SSO"), &p));
    }

    #[test]
    fn test_skipped_line_case_insensitive() {
        let p = patterns();
        assert!(is_skipped_line("confidential", &p));
        assert!(is_skipped_line("Search the FAQ", &p));
        assert!(!is_skipped_line("Confidential data handling", &p));
    }

    #[test]
    fn test_invalid_stop_pattern_is_config_error() {
        let options = SplitterOptions {
            stop_section_patterns: vec!["(unclosed".to_string()],
            ..Default::default()
        };
        let err = Patterns::compile(&options).expect_err("pattern should fail");
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }
}
