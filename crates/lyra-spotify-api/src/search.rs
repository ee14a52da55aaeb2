use crate::api_response::ApiResponse;
use crate::bearer_token::BearerToken;
use crate::endpoints::Endpoints;
use crate::fetch::fetch;
use crate::search_response::SearchResponse;
use tracing::debug;

/// https://developer.spotify.com/documentation/web-api/reference/search
///
/// Asks for a single track matching the free-text `query`.
pub async fn search_tracks(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    query: &str,
    bearer: &BearerToken,
) -> eyre::Result<ApiResponse<SearchResponse>> {
    debug!("Searching tracks for {:?}", query);
    let request = client
        .get(endpoints.search_url.clone())
        .query(&[("q", query), ("type", "track"), ("limit", "1")])
        .bearer_auth(bearer.as_ref());
    fetch(request).await
}
