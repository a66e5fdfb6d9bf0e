//! # faqsplit
//!
//! Splits FAQ-style DOCX documents into question/answer records using
//! `rs_docx` for parsing.
//!
//! ## Example
//!
//! ```no_run
//! use faqsplit::{FaqSplitter, SplitterOptions};
//!
//! let options = SplitterOptions {
//!     min_heading_level: 1,
//!     ..Default::default()
//! };
//!
//! let splitter = FaqSplitter::new(options).unwrap();
//! for record in splitter.split("faq.docx").unwrap() {
//!     println!("{}\n", faqsplit::render_record(&record));
//! }
//! ```

pub mod adapters;
pub mod chunk;
pub mod classify;
pub mod converter;
pub mod core;
pub mod error;
pub mod loader;
pub mod render;
pub mod scan;

pub use chunk::{chunk_records, content_hash, Chunk, SourceInfo};
pub use converter::FaqSplitter;
pub use crate::core::{Block, DocumentBlocks, Hyperlink, QaRecord};
pub use error::{Error, Result};
pub use loader::load_qna_file;
pub use render::{render_record, sorted_contents, write_contents_json};

use serde::Deserialize;
use std::path::Path;

/// Options controlling how headings and lines are classified.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SplitterOptions {
    /// Lowest heading level treated as a question.
    pub min_heading_level: u32,
    /// Highest heading level treated as a question.
    pub max_heading_level: u32,
    /// Lines dropped from answers when they match exactly (case-insensitive).
    pub skip_patterns: Vec<String>,
    /// Heading titles that open a skipped region instead of a question.
    pub skip_headings: Vec<String>,
    /// Prefixes that mark a non-heading paragraph as a problem statement.
    pub question_patterns: Vec<String>,
    /// Regexes for headings that end the current question's answer.
    #[serde(alias = "stop_sections")]
    pub stop_section_patterns: Vec<String>,
}

impl Default for SplitterOptions {
    fn default() -> Self {
        Self {
            min_heading_level: 2,
            max_heading_level: 6,
            skip_patterns: strings(&["CONFIDENTIAL", "Search the FAQ", "Search Artifactory FAQ"]),
            skip_headings: strings(&["summary"]),
            question_patterns: strings(&[
                "i am ",
                "i cannot ",
                "i can't ",
                "i see ",
                "i have ",
                "i need ",
                "my ",
                "when i ",
                "how do i ",
                "how can i ",
                "what is ",
                "what are ",
                "why does ",
                "why is ",
                "where is ",
                "where can ",
            ]),
            stop_section_patterns: strings(&[
                r"^\s*related\s*articles?\s*$",
                r"^\s*related\s*resources?\s*$",
                r"^\s*see\s*also\s*$",
            ]),
        }
    }
}

impl SplitterOptions {
    /// Parses options from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| Error::Config(e.to_string()))
    }

    /// Loads options from a TOML file.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::prelude::*;

    fn to_py_err(e: Error) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(e.to_string())
    }

    /// Splits a DOCX file into rendered Q&A texts.
    #[pyfunction]
    fn split_faq(path: String) -> PyResult<Vec<String>> {
        let records = FaqSplitter::with_defaults().split(&path).map_err(to_py_err)?;
        Ok(records.iter().map(render_record).collect())
    }

    /// Splits a DOCX file into (question, answer) tuples.
    #[pyfunction]
    fn split_faq_pairs(path: String) -> PyResult<Vec<(String, String)>> {
        let records = FaqSplitter::with_defaults().split(&path).map_err(to_py_err)?;
        Ok(records
            .into_iter()
            .map(|record| (record.question, record.answer))
            .collect())
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn faqsplit(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(split_faq, m)?)?;
        m.add_function(wrap_pyfunction!(split_faq_pairs, m)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_options() {
        let options = SplitterOptions::default();
        assert_eq!(options.min_heading_level, 2);
        assert_eq!(options.max_heading_level, 6);
        assert_eq!(options.skip_headings, vec!["summary"]);
        assert_eq!(options.question_patterns.len(), 16);
        assert_eq!(options.stop_section_patterns.len(), 3);
    }

    #[test]
    fn test_toml_overrides_keep_defaults() {
        let options = SplitterOptions::from_toml_str(
            r#"
            min_heading_level = 1
            skip_headings = ["Summary", "Overview"]
            "#,
        )
        .expect("valid toml");

        assert_eq!(options.min_heading_level, 1);
        assert_eq!(options.max_heading_level, 6);
        assert_eq!(options.skip_headings, vec!["Summary", "Overview"]);
        assert_eq!(
            options.question_patterns,
            SplitterOptions::default().question_patterns
        );
    }

    #[test]
    fn test_toml_accepts_stop_sections_key() {
        let options = SplitterOptions::from_toml_str(r#"stop_sections = ['^\s*faq\s*links\s*$']"#)
            .expect("valid toml");
        assert_eq!(options.stop_section_patterns, vec![r"^\s*faq\s*links\s*$"]);
    }

    #[test]
    fn test_toml_type_error_is_config_error() {
        let err = SplitterOptions::from_toml_str("min_heading_level = \"two\"")
            .expect_err("wrong type must fail");
        assert!(matches!(err, Error::Config(_)));
    }
}
