use eyre::Result;
use eyre::eyre;

pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";

/// Application credentials for the client-credentials grant.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).ok_or_else(|| eyre!("Missing env var: {}", name));
        Ok(Self::new(var(CLIENT_ID_VAR)?, var(CLIENT_SECRET_VAR)?))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_both_variables() {
        let creds = Credentials::from_lookup(lookup_in(&[
            (CLIENT_ID_VAR, "id"),
            (CLIENT_SECRET_VAR, "shh"),
        ]))
        .unwrap();
        assert_eq!(creds, Credentials::new("id", "shh"));
    }

    #[test]
    fn missing_secret_names_the_variable() {
        let err = Credentials::from_lookup(lookup_in(&[(CLIENT_ID_VAR, "id")])).unwrap_err();
        assert!(err.to_string().contains(CLIENT_SECRET_VAR));
    }

    #[test]
    fn debug_redacts_secret() {
        let shown = format!("{:?}", Credentials::new("id", "shh"));
        assert!(shown.contains("id"));
        assert!(!shown.contains("shh"));
    }
}
