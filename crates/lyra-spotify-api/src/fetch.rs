use crate::api_response::ApiResponse;
use http::StatusCode;
use reqwest::RequestBuilder;
use tracing::debug;
use tracing::warn;

/// Send a request and decode a 200 body as `T`.
///
/// Any other status is returned as [`ApiResponse::Failure`] with the raw body.
pub async fn fetch<T>(request: RequestBuilder) -> eyre::Result<ApiResponse<T>>
where
    T: serde::de::DeserializeOwned,
{
    let res = request.send().await?;
    let status = res.status();
    let url = res.url().clone();
    let body = res.text().await?;
    debug!("{} answered {} ({} bytes)", url, status, body.len());

    if status != StatusCode::OK {
        warn!("{} answered {}", url, status);
        return Ok(ApiResponse::Failure { status, body });
    }

    match serde_json::from_str(&body) {
        Ok(x) => Ok(ApiResponse::Success(x)),
        Err(e) => Err(eyre::Error::new(e).wrap_err(format!("Failed to deserialize:\n{}", body))),
    }
}
