//! Chunk assembly - stable identifiers and metadata for Q&A records.

use crate::core::QaRecord;
use crate::render::render_record;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::PathBuf;

/// Where a document came from, carried onto every chunk cut from it.
#[derive(Debug, Clone, Default)]
pub struct SourceInfo {
    pub path: PathBuf,
    pub tag: String,
    pub source_url: Option<String>,
}

impl SourceInfo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }

    fn document_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// One retrievable unit of text with its identity and provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub document_id: String,
    pub chunk_id: String,
    pub document_name: String,
    pub tag: String,
    pub content: String,
    pub source_link: String,
}

/// Hex-encoded SHA-256 of the text.
pub fn content_hash(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}

/// Assembles one chunk per complete record. Chunk ids number records from 1
/// in scan order, so records dropped for an empty question or answer still
/// use up their index. The document id is the hash of the rendered text.
pub fn chunk_records(records: &[QaRecord], source: &SourceInfo) -> Vec<Chunk> {
    let document_name = source.document_name();
    let source_link = source.source_url.clone().unwrap_or_default();

    records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.is_complete())
        .map(|(idx, record)| {
            let content = render_record(record);
            let document_id = content_hash(&content);
            Chunk {
                chunk_id: format!("{}_{}", document_id, idx + 1),
                document_id,
                document_name: document_name.clone(),
                tag: source.tag.clone(),
                content,
                source_link: source_link.clone(),
            }
        })
        .collect()
}
