use std::io::Write;

use lyra_spotify_api::lookup::LookupOutcome;
use lyra_spotify_api::track_summary::TrackSummary;

pub fn write_report(mut out: impl Write, outcome: &LookupOutcome) -> std::io::Result<()> {
    match outcome {
        LookupOutcome::Found(summary) => write_summary(out, summary),
        LookupOutcome::NotFound => writeln!(out, "No results found on Spotify."),
        LookupOutcome::NoToken => Ok(()),
        LookupOutcome::TokenRejected { status, body }
        | LookupOutcome::SearchRejected { status, body } => {
            writeln!(out, "Error: {} {}", status.as_u16(), body)
        }
    }
}

fn write_summary(mut out: impl Write, summary: &TrackSummary) -> std::io::Result<()> {
    writeln!(out, "Spotify Link: {}", summary.spotify_link)?;
    writeln!(out, "Album: {}", summary.album_name)?;
    writeln!(out, "Artists: {}", summary.album_artists.join(", "))?;
    match &summary.album_image_url {
        Some(url) => writeln!(out, "Album Artwork: {}", url),
        None => writeln!(out, "No Album Artwork available."),
    }
}
