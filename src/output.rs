use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};

use crate::channels::{Catalog, GENRE_MARKER};

/// Renders a catalog back to the channel-list text layout. Categories with
/// no channels are skipped; one blank line separates consecutive blocks,
/// with none before the first; output ends at the last channel line.
pub fn serialize_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();
    let mut first_category = true;

    for (category, channels) in catalog.iter() {
        if channels.is_empty() {
            continue;
        }
        if !first_category {
            out.push('\n');
        }
        first_category = false;

        out.push_str(category);
        out.push_str(GENRE_MARKER);
        out.push('\n');
        for channel in channels {
            out.push_str(&channel.name);
            out.push(',');
            out.push_str(&channel.url);
            out.push('\n');
        }
    }

    out
}

/// Writes the catalog to `path`, replacing any existing file. The text is
/// rendered fully in memory before the single write call; the output
/// directory must already exist.
pub fn write_channel_list(path: &Path, catalog: &Catalog) -> Result<()> {
    fs::write(path, serialize_catalog(catalog))
        .map_err(|err| anyhow!("failed to write {}: {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::{parse_channel_list, Channel};

    #[test]
    fn test_serialize_layout() {
        let mut catalog = Catalog::new();
        catalog.push(
            "News",
            Channel { name: "CCTV1".into(), url: "http://[2409:8087:1001::5]/live".into() },
        );
        catalog.push(
            "News",
            Channel { name: "CCTV2".into(), url: "http://[2001:db8::2]/live".into() },
        );
        catalog.push(
            "Sports",
            Channel { name: "CCTV5".into(), url: "http://[2001:db8::5]/live".into() },
        );

        assert_eq!(
            serialize_catalog(&catalog),
            "News,#genre#\n\
             CCTV1,http://[2409:8087:1001::5]/live\n\
             CCTV2,http://[2001:db8::2]/live\n\
             \n\
             Sports,#genre#\n\
             CCTV5,http://[2001:db8::5]/live\n"
        );
    }

    #[test]
    fn test_empty_categories_are_skipped() {
        let mut catalog = Catalog::new();
        catalog.add_category("Empty");
        catalog.push("News", Channel { name: "CCTV1".into(), url: "http://[::1]/live".into() });
        catalog.add_category("AlsoEmpty");

        // No separator for skipped blocks either.
        assert_eq!(serialize_catalog(&catalog), "News,#genre#\nCCTV1,http://[::1]/live\n");
    }

    #[test]
    fn test_serialize_empty_catalog() {
        assert_eq!(serialize_catalog(&Catalog::new()), "");
    }

    #[test]
    fn test_round_trip_identity() {
        let text = "央视,#genre#\n\
                    CCTV1,http://[2409:8087:1001::5]/live\n\
                    CCTV2,http://[2001:db8::2]/live,extra\n\
                    \n\
                    卫视,#genre#\n\
                    湖南卫视,http://[fe80::1]/hls/1.m3u8\n";

        let catalog = parse_channel_list(text);
        let rendered = serialize_catalog(&catalog);
        assert_eq!(rendered, text);
        assert_eq!(parse_channel_list(&rendered), catalog);
    }
}
