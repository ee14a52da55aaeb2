use crate::api_response::ApiResponse;
use crate::auth::client_credentials::request_bearer_token;
use crate::credentials::Credentials;
use crate::endpoints::Endpoints;
use crate::search::search_tracks;
use crate::track_summary::TrackSummary;
use http::StatusCode;
use tracing::info;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(TrackSummary),
    NotFound,
    /// The token endpoint answered 200 without a usable `access_token`.
    NoToken,
    TokenRejected { status: StatusCode, body: String },
    SearchRejected { status: StatusCode, body: String },
}

/// Acquire a token, then search once. A rejected token ends the run before any search.
pub async fn lookup_track(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    credentials: &Credentials,
    query: &str,
) -> eyre::Result<LookupOutcome> {
    let bearer = match request_bearer_token(client, endpoints, credentials).await? {
        ApiResponse::Success(Some(bearer)) => bearer,
        ApiResponse::Success(None) => {
            warn!("Token endpoint returned no access token; skipping search");
            return Ok(LookupOutcome::NoToken);
        }
        ApiResponse::Failure { status, body } => {
            return Ok(LookupOutcome::TokenRejected { status, body });
        }
    };
    info!("Obtained bearer token");

    let outcome = match search_tracks(client, endpoints, query, &bearer).await? {
        ApiResponse::Success(resp) => match resp.first_track() {
            Some(track) => {
                info!("Matched track {:?}", track.name);
                LookupOutcome::Found(TrackSummary::from(track))
            }
            None => LookupOutcome::NotFound,
        },
        ApiResponse::Failure { status, body } => LookupOutcome::SearchRejected { status, body },
    };
    Ok(outcome)
}
