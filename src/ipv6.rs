use lazy_static::lazy_static;
use regex::Regex;

use crate::channels::Catalog;

lazy_static! {
    // Bracketed host, e.g. http://[2409:8087:1001::5]/live. Any non-empty
    // run of hex digits and colons inside the brackets counts.
    static ref BRACKETED_HOST: Regex = Regex::new(r"\[[0-9a-fA-F:]+\]").unwrap();
}

// Provider prefixes seen in the wild (2409:8087: is China Mobile's IPTV
// range) plus loopback and link-local forms. Plain substring tests; a hit
// anywhere in the URL counts, path segments included.
const IPV6_MARKERS: [&str; 4] = ["2409:8087:", "2001:", "::1", "fe80:"];

/// Heuristic IPv6 check, not an address parser. Never errors; anything that
/// matches none of the patterns is simply not IPv6.
pub fn is_ipv6_url(url: &str) -> bool {
    BRACKETED_HOST.is_match(url) || IPV6_MARKERS.iter().any(|marker| url.contains(marker))
}

/// Keeps only channels whose URL passes [`is_ipv6_url`]. Categories left
/// without channels drop out of the result entirely.
pub fn filter_ipv6_channels(catalog: &Catalog) -> Catalog {
    let mut filtered = Catalog::new();
    for (category, channels) in catalog.iter() {
        for channel in channels {
            if is_ipv6_url(&channel.url) {
                filtered.push(category, channel.clone());
            }
        }
    }
    filtered
}
