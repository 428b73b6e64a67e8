use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::channels::{Catalog, Channel};

/// Collapses same-named channels within each category to one entry. A later
/// duplicate wins only when its URL is strictly shorter; on a length tie the
/// first-seen channel stays. Each name keeps the position of its first
/// occurrence.
pub fn dedup_channels(catalog: &Catalog) -> Catalog {
    let mut deduped = Catalog::new();

    for (category, channels) in catalog.iter() {
        let mut seen: IndexMap<&str, &Channel> = IndexMap::new();
        for channel in channels {
            match seen.entry(channel.name.as_str()) {
                Entry::Vacant(slot) => {
                    slot.insert(channel);
                }
                Entry::Occupied(mut slot) => {
                    if url_len(&channel.url) < url_len(&slot.get().url) {
                        slot.insert(channel);
                    }
                }
            }
        }
        for channel in seen.into_values() {
            deduped.push(category, channel.clone());
        }
    }

    deduped
}

// Measured in characters, not bytes.
fn url_len(url: &str) -> usize {
    url.chars().count()
}
