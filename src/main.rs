mod report;
mod request;

use eyre::WrapErr;
use lyra_init::init;
use lyra_spotify_api::credentials::Credentials;
use lyra_spotify_api::endpoints::Endpoints;
use lyra_spotify_api::lookup::lookup_track;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init()?;

    let request = request::read_request(std::io::stdin().lock())?;
    info!("Looking up {:?} by {:?}", request.song_name, request.artist);

    let credentials = Credentials::from_env()?;
    let endpoints = Endpoints::from_env()?;
    let client = reqwest::Client::new();

    let outcome = lookup_track(&client, &endpoints, &credentials, &request.query())
        .await
        .wrap_err("Spotify lookup failed")?;

    report::write_report(std::io::stdout().lock(), &outcome)?;

    Ok(())
}
