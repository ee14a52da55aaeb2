use crate::track::Track;

/// The fields printed for a resolved track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackSummary {
    pub spotify_link: String,
    pub album_name: String,
    pub album_artists: Vec<String>,
    pub album_image_url: Option<String>,
}

impl From<&Track> for TrackSummary {
    fn from(track: &Track) -> Self {
        TrackSummary {
            spotify_link: track.external_urls.spotify.clone(),
            album_name: track.album.name.clone(),
            album_artists: track
                .album
                .artists
                .iter()
                .map(|artist| artist.name.clone())
                .collect(),
            album_image_url: track
                .album
                .images
                .as_deref()
                .and_then(|images| images.first())
                .map(|image| image.url.clone())
                .filter(|url| !url.is_empty()),
        }
    }
}
