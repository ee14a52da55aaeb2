use serde::Deserialize;
use serde::Serialize;

use crate::track::Track;

/// https://developer.spotify.com/documentation/web-api/reference/search
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub tracks: Option<Page<Track>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl SearchResponse {
    /// The API-ranked first match. No further disambiguation happens.
    pub fn first_track(&self) -> Option<&Track> {
        self.tracks.as_ref()?.items.first()
    }
}
