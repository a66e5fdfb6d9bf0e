use crate::chunk::Chunk;
use crate::Result;
use log::info;
use std::path::Path;

/// Non-empty chunk contents, sorted so the output checksum only changes
/// when the text does.
pub fn sorted_contents(chunks: &[Chunk]) -> Vec<String> {
    let mut contents: Vec<String> = chunks
        .iter()
        .filter(|chunk| !chunk.content.is_empty())
        .map(|chunk| chunk.content.clone())
        .collect();
    contents.sort();
    contents
}

/// Writes the sorted contents as a pretty JSON array, creating parent
/// directories. Returns the number of entries written.
pub fn write_contents_json(chunks: &[Chunk], output: &Path) -> Result<usize> {
    let contents = sorted_contents(chunks);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output, serde_json::to_string_pretty(&contents)?)?;

    info!(
        "Wrote {} chunk content entries to {}",
        contents.len(),
        output.display()
    );
    Ok(contents.len())
}
