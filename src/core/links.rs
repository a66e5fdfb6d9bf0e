//! Hyperlink extraction and redundancy filtering.

use super::ast::{Block, Hyperlink, HyperlinkRun, Relationships, TableBlock};

/// Anchors with this prefix are scroll/navigation bookmarks added by wiki
/// exporters and carry nothing worth retrieving.
const SCROLL_BOOKMARK_PREFIX: &str = "scroll-bookmark";

/// Extracts resolved hyperlinks from a block, recursing into nested tables.
pub fn extract_links(block: &Block, rels: &Relationships) -> Vec<Hyperlink> {
    let mut links = Vec::new();
    collect_links(block, rels, &mut links);
    links
}

fn collect_links(block: &Block, rels: &Relationships, out: &mut Vec<Hyperlink>) {
    match block {
        Block::Paragraph(para) => {
            out.extend(para.links.iter().filter_map(|run| resolve_link(run, rels)));
        }
        Block::Table(table) => collect_table_links(table, rels, out),
    }
}

fn collect_table_links(table: &TableBlock, rels: &Relationships, out: &mut Vec<Hyperlink>) {
    for cell in table.cells() {
        for block in &cell.blocks {
            collect_links(block, rels, out);
        }
    }
}

/// Resolves one hyperlink run.
///
/// External relationships win over anchors. Links without visible text and
/// scroll bookmarks are dropped.
pub fn resolve_link(run: &HyperlinkRun, rels: &Relationships) -> Option<Hyperlink> {
    if run.text.is_empty() {
        return None;
    }

    if let Some(url) = run.rel_id.as_deref().and_then(|id| rels.resolve(id)) {
        return Some(Hyperlink {
            text: run.text.clone(),
            target: url.to_string(),
        });
    }

    match run.anchor.as_deref() {
        Some(anchor) if !anchor.is_empty() && !anchor.starts_with(SCROLL_BOOKMARK_PREFIX) => {
            Some(Hyperlink {
                text: run.text.clone(),
                target: format!("#{}", anchor),
            })
        }
        _ => None,
    }
}

/// Returns true when the visible link text merely restates its URL.
pub fn is_redundant_link(text: &str, url: &str) -> bool {
    let text = clean_link_part(text);
    let url = clean_link_part(url);

    if text == url {
        return true;
    }

    let url_without_protocol = strip_protocol(&url);
    if strip_protocol(&text) == url_without_protocol {
        return true;
    }

    let url_without_www = url_without_protocol
        .strip_prefix("www.")
        .unwrap_or(url_without_protocol);
    text == url_without_www
}

fn clean_link_part(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .trim_end_matches(&[')', '.', ',', ';', ':', ' '][..])
        .to_string()
}

fn strip_protocol(value: &str) -> &str {
    value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .unwrap_or(value)
}
