//! RSS feed parsing.

use rss::Channel;

use crate::error::Result;
use crate::feed::entry::Entry;

/// Name of the extension element carrying the attributes payload.
const ATTRIBUTES_ELEMENT: &str = "attributes";

/// Parse an exported RSS feed into the ordered sequence of entries.
///
/// Item order is preserved; it becomes the queue's FIFO pull order. A parse
/// failure is fatal to the whole run, there is no partial processing.
pub fn parse_feed(bytes: &[u8]) -> Result<Vec<Entry>> {
    let channel = Channel::read_from(bytes)?;

    let entries = channel
        .items()
        .iter()
        .map(|item| Entry {
            enclosure_url: item.enclosure().map(|e| e.url().to_string()),
            attributes: extract_attributes(item),
        })
        .collect();

    Ok(entries)
}

/// Pull the raw attributes payload out of an item's namespaced extensions.
///
/// Exports place it in a namespace of their own (e.g. `<soup:attributes>`),
/// so we match on the element name in any namespace.
fn extract_attributes(item: &rss::Item) -> Option<String> {
    for ext_map in item.extensions().values() {
        if let Some(exts) = ext_map.get(ATTRIBUTES_ELEMENT) {
            if let Some(value) = exts.iter().find_map(|e| e.value()) {
                return Some(value.to_string());
            }
        }
    }
    None
}
