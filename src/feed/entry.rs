//! Feed entry representation.

use serde::Deserialize;

use crate::error::{Error, Result};

/// One feed item, immutable once produced by feed parsing.
///
/// An entry may carry a direct file enclosure, a free-form attributes payload
/// describing externally-hosted media, both, or neither.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Direct-download URL from the item's enclosure, if present.
    pub enclosure_url: Option<String>,

    /// Raw attributes payload (a JSON string) from the item's extension
    /// element, if present.
    pub attributes: Option<String>,
}

/// Decoded attributes payload.
///
/// Exported feeds embed a JSON object with a media-type tag and a source URL
/// for media hosted outside the feed's own CDN. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryAttributes {
    /// Media-type tag, e.g. "video".
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// URL of the externally-hosted media.
    pub source: Option<String>,
}

impl Entry {
    /// Decode the attributes payload.
    ///
    /// Returns `Ok(None)` when the entry has no payload at all and
    /// `Err(MalformedMetadata)` when the payload exists but is not valid
    /// JSON. Callers treat the latter as "no match", not as a run failure.
    pub fn parse_attributes(&self) -> Result<Option<EntryAttributes>> {
        match &self.attributes {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| Error::MalformedMetadata(e.to_string())),
        }
    }
}
