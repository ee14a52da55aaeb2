pub mod api_response;
pub mod bearer_token;
pub mod credentials;
pub mod endpoints;
pub mod fetch;
pub mod lookup;
pub mod search;
pub mod search_response;
pub mod track;
pub mod track_summary;
pub mod auth {
    pub mod client_credentials;
}
