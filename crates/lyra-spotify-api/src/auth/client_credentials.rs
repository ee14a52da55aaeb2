use crate::api_response::ApiResponse;
use crate::bearer_token::BearerToken;
use crate::credentials::Credentials;
use crate::endpoints::Endpoints;
use crate::fetch::fetch;
use eyre::Result;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

/// https://developer.spotify.com/documentation/web-api/tutorials/client-credentials-flow
///
/// A 200 answer without a non-empty `access_token` yields `Success(None)`.
pub async fn request_bearer_token(
    client: &reqwest::Client,
    endpoints: &Endpoints,
    credentials: &Credentials,
) -> Result<ApiResponse<Option<BearerToken>>> {
    debug!("Requesting bearer token for client {}", credentials.client_id);
    let request = client
        .post(endpoints.token_url.clone())
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")]);

    let resp = fetch::<TokenResponse>(request).await?;
    if let ApiResponse::Success(token) = &resp {
        debug!(
            "Access Token: len={}",
            token.access_token.as_deref().map_or(0, str::len)
        );
        debug!("Token type: {}", token.token_type);
        debug!("Expires in: {}s", token.expires_in);
    }

    Ok(resp.map(TokenResponse::into_bearer))
}

#[derive(Debug, Deserialize, Serialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    token_type: String,
    #[serde(default)]
    expires_in: u64,
}

impl TokenResponse {
    fn into_bearer(self) -> Option<BearerToken> {
        self.access_token
            .filter(|token| !token.is_empty())
            .map(BearerToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_response_tolerates_missing_extras() {
        let resp: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();
        assert_eq!(resp.expires_in, 0);
        assert_eq!(resp.into_bearer(), Some(BearerToken("abc".to_string())));
    }

    #[test]
    fn missing_access_token_is_no_bearer() {
        let resp: TokenResponse = serde_json::from_str(r#"{"token_type":"Bearer"}"#).unwrap();
        assert_eq!(resp.into_bearer(), None);
    }

    #[test]
    fn empty_access_token_is_no_bearer() {
        let resp: TokenResponse = serde_json::from_str(r#"{"access_token":""}"#).unwrap();
        assert_eq!(resp.into_bearer(), None);
        let resp: TokenResponse = serde_json::from_str(r#"{"access_token":null}"#).unwrap();
        assert_eq!(resp.into_bearer(), None);
    }
}
