use std::fs;
use std::io;
use std::path::Path;

use anyhow::{anyhow, Result};
use indexmap::IndexMap;
use tracing::warn;

/// Trailing marker that makes a line a category header instead of a channel.
pub const GENRE_MARKER: &str = ",#genre#";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub url: String,
}

/// Channels grouped by category, in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    categories: IndexMap<String, Vec<Channel>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: &str, channel: Channel) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .push(channel);
    }

    /// Registers a category at its first-appearance position, with no
    /// channels yet. No-op when it already exists.
    pub fn add_category(&mut self, category: &str) {
        self.categories.entry(category.to_string()).or_default();
    }

    /// Channels of one category; an empty slice when the category is unknown.
    pub fn channels(&self, category: &str) -> &[Channel] {
        self.categories.get(category).map_or(&[], Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Channel])> {
        self.categories
            .iter()
            .map(|(name, channels)| (name.as_str(), channels.as_slice()))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn channel_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.channel_count() == 0
    }
}

// Order-sensitive on purpose: two catalogs are equal only when their
// categories appear in the same order. IndexMap's own PartialEq ignores order.
impl PartialEq for Catalog {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for Catalog {}

/// Parses the channel-list text format: `<label>,#genre#` lines switch the
/// current category, every other line with a comma is one `<name>,<url>`
/// pair split at the first comma (the URL keeps any further commas).
pub fn parse_channel_list(content: &str) -> Catalog {
    let mut catalog = Catalog::new();
    let mut current_category = String::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(label) = line.strip_suffix(GENRE_MARKER) {
            catalog.add_category(label);
            current_category = label.to_string();
            continue;
        }

        if let Some((name, url)) = line.split_once(',') {
            catalog.push(
                &current_category,
                Channel {
                    name: name.to_string(),
                    url: url.to_string(),
                },
            );
        }
        // Lines without a comma carry no channel and are skipped.
    }

    catalog
}

/// Reads and parses a channel list. A missing file is not an error: the
/// notice is logged and an empty catalog comes back.
pub fn read_channel_list(path: &Path) -> Result<Catalog> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            warn!("Channel list not found: {}", path.display());
            return Ok(Catalog::new());
        }
        Err(err) => return Err(anyhow!("failed to read {}: {err}", path.display())),
    };
    Ok(parse_channel_list(&content))
}
