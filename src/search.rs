// =============== Imports ================
use anyhow::{Context, Result};
use serde::Deserialize;
use std::process::{Command, Stdio};

const AUTOGENERATED_MARKER: &str = "Auto-generated by YouTube";
const PROVIDED_PREFIX: &str = "Provided to YouTube by ";
const AUTOGENERATED_CLOSING: &str = "Auto-generated by YouTube.";
const SEPARATOR: &str = " \u{00B7} ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub location: String,
    pub name: String,
    pub artist: Option<String>,
    pub album: Option<String>,
}

// Only the parts of the yt-dlp info dict we read
#[derive(Deserialize, Debug)]
pub struct YdlResult {
    entries: Vec<YdlEntry>,
}

#[derive(Deserialize, Debug)]
struct YdlEntry {
    webpage_url: String,
    title: String,
    description: String,
}

/// Search YouTube through `extractor` (yt-dlp) and shape the first hit.
/// Returns `Ok(None)` when the search has no results.
pub fn search(extractor: &str, query: &str, autogenerated: bool) -> Result<Option<SearchResult>> {
    let ydl_url = construct_ydl_url(query, autogenerated);
    log::info!("Searching with {}: {}", extractor, ydl_url);

    let output = Command::new(extractor)
        .arg("--dump-single-json")
        .arg("--no-warnings")
        .arg(&ydl_url)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("Failed to run extractor: {}", extractor))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        log::error!("{} exited with {}: {}", extractor, output.status, stderr.trim());
        return Err(anyhow::anyhow!("{} search failed: {}", extractor, stderr.trim()));
    }

    let ydl_result: YdlResult = serde_json::from_slice(&output.stdout)
        .with_context(|| format!("Failed to parse {} output as JSON", extractor))?;

    let result = extract_result(ydl_result);
    log::debug!("Search result: {:?}", result);
    Ok(result)
}

pub fn construct_ydl_url(query: &str, autogenerated: bool) -> String {
    if autogenerated {
        format!("ytsearch1:{} \"{}\"", query, AUTOGENERATED_MARKER)
    } else {
        format!("ytsearch1:{}", query)
    }
}

pub fn extract_result(ydl_result: YdlResult) -> Option<SearchResult> {
    let entry = ydl_result.entries.into_iter().next()?;

    let description: Vec<&str> = entry.description.split("\n\n").collect();

    // If we know how to read the description, take the metadata from it
    let (name, artist, album) = match autogenerated_metadata(&description, &entry.title) {
        Some((name, artist, album)) => (
            name.to_string(),
            Some(artist.to_string()),
            Some(album.to_string()),
        ),
        None => (entry.title.clone(), None, None),
    };

    Some(SearchResult {
        location: entry.webpage_url,
        name,
        artist,
        album,
    })
}

// Name, artist and album, all or nothing
fn autogenerated_metadata<'a>(
    description: &[&'a str],
    title: &str,
) -> Option<(&'a str, &'a str, &'a str)> {
    if !is_description_autogenerated(description, title) {
        return None;
    }
    // Paragraph 1 starts with the title and the separator, so this always splits
    let (name, artist) = description[1].split_once(SEPARATOR)?;
    Some((name, artist, description[2]))
}

// * Auto-generated uploads have a very particular description layout
pub fn is_description_autogenerated(description: &[&str], title: &str) -> bool {
    description.len() > 3
        && description[0].starts_with(PROVIDED_PREFIX)
        && description[1].starts_with(&format!("{}{}", title, SEPARATOR))
        && description
            .last()
            .is_some_and(|last| last.trim() == AUTOGENERATED_CLOSING)
}
