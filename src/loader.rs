//! Loader for Q&A pairs that are already structured as JSON.
//!
//! The input is an array of enriched Q&A objects (one per conversation
//! thread). Rephrased fields win over the originals; expert answers win
//! over other answers.

use crate::chunk::Chunk;
use crate::{Error, Result};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

pub const DEFAULT_QNA_TAG: &str = "enriched-qna";
const DEFAULT_TOPIC: &str = "General";
const MAX_DOCUMENT_ID_LEN: usize = 128;

static UNSAFE_ID_CHARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_-]").expect("valid regex"));

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QnaEntry {
    pub thread_id: Option<Value>,
    pub question: Option<String>,
    pub rephrased_question: Option<String>,
    pub rephrased_answer: Option<String>,
    pub topic: Option<String>,
    pub source_link: Option<String>,
    pub answers: Vec<QnaAnswer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QnaAnswer {
    pub answer: Option<String>,
    pub is_expert: bool,
}

impl QnaEntry {
    fn question(&self) -> &str {
        non_empty(&self.rephrased_question)
            .or_else(|| self.question.as_deref())
            .unwrap_or("")
    }

    fn answer(&self) -> &str {
        non_empty(&self.rephrased_answer).unwrap_or_else(|| self.best_answer())
    }

    /// First expert answer, else the first answer.
    fn best_answer(&self) -> &str {
        self.answers
            .iter()
            .find(|a| a.is_expert)
            .or_else(|| self.answers.first())
            .and_then(|a| a.answer.as_deref())
            .unwrap_or("")
    }

    fn thread_id(&self) -> Option<String> {
        match &self.thread_id {
            Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
            Some(Value::Null) | Some(Value::String(_)) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Replaces characters unsafe for search-index keys and caps the length.
pub fn sanitize_id(raw: &str) -> String {
    UNSAFE_ID_CHARS_RE
        .replace_all(raw, "_")
        .chars()
        .take(MAX_DOCUMENT_ID_LEN)
        .collect()
}

/// Converts parsed entries into chunks, skipping entries without a
/// question or an answer.
pub fn chunks_from_entries(entries: &[QnaEntry], tag: &str) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        let question = entry.question();
        let answer = entry.answer();
        if question.trim().is_empty() || answer.trim().is_empty() {
            debug!("Skipping Q&A pair {} - missing question or answer", idx);
            continue;
        }

        let topic = entry.topic.as_deref().unwrap_or(DEFAULT_TOPIC);
        let thread_id = entry.thread_id().unwrap_or_else(|| format!("qna_{}", idx));
        let document_id = sanitize_id(&thread_id);
        debug!("Loaded Q&A: {} | Topic: {}", document_id, topic);

        chunks.push(Chunk {
            chunk_id: format!("{}_chunk_0", document_id),
            document_name: format!("{} - FAQ", topic),
            tag: tag.to_string(),
            content: format!("Q: {}\n\nA: {}", question, answer),
            source_link: entry
                .source_link
                .as_deref()
                .unwrap_or("")
                .trim()
                .to_string(),
            document_id,
        });
    }
    chunks
}

/// Loads a JSON array of enriched Q&A objects from disk.
pub fn load_qna_file(path: &Path, tag: &str) -> Result<Vec<Chunk>> {
    info!("Loading structured Q&A from {}", path.display());
    let raw = std::fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;

    let entries: Vec<QnaEntry> = match value {
        Value::Array(items) if !items.is_empty() => serde_json::from_value(Value::Array(items))?,
        Value::Array(_) | Value::Null => Vec::new(),
        Value::Object(map) if map.is_empty() => Vec::new(),
        other => {
            return Err(Error::Config(format!(
                "Expected JSON array of Q&A objects, got {}",
                json_type_name(&other)
            )))
        }
    };

    if entries.is_empty() {
        warn!("No Q&A pairs found in JSON file: {}", path.display());
        return Ok(Vec::new());
    }

    let chunks = chunks_from_entries(&entries, tag);
    info!("Successfully loaded {} enriched Q&A pairs from JSON", chunks.len());
    Ok(chunks)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
