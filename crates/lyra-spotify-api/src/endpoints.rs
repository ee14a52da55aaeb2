use eyre::Result;
use eyre::WrapErr;
use url::Url;

pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SEARCH_URL: &str = "https://api.spotify.com/v1/search";

pub const TOKEN_URL_VAR: &str = "SPOTIFY_TOKEN_URL";
pub const SEARCH_URL_VAR: &str = "SPOTIFY_SEARCH_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub token_url: Url,
    pub search_url: Url,
}

impl Endpoints {
    pub fn new(token_url: &str, search_url: &str) -> Result<Self> {
        Ok(Self {
            token_url: Url::parse(token_url)
                .wrap_err_with(|| format!("Invalid token url: {}", token_url))?,
            search_url: Url::parse(search_url)
                .wrap_err_with(|| format!("Invalid search url: {}", search_url))?,
        })
    }

    /// Spotify's public endpoints, overridable with `SPOTIFY_TOKEN_URL` and `SPOTIFY_SEARCH_URL`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let token_url = lookup(TOKEN_URL_VAR).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());
        let search_url = lookup(SEARCH_URL_VAR).unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());
        Self::new(&token_url, &search_url)
    }
}
