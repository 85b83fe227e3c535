use std::env;

/// Default API base; override with `VERCEL_API_BASE` (handy for pointing the
/// tool at a local test server).
pub const DEFAULT_API_BASE: &str = "https://api.vercel.com";

const TOKEN_VAR: &str = "VERCEL_TOKEN";
const TEAM_VAR: &str = "VERCEL_TEAM";
const API_BASE_VAR: &str = "VERCEL_API_BASE";

/// Runtime configuration sourced from the process environment.
///
/// The token is required; everything else has a sensible default. Env access
/// is confined to this module.
#[derive(Debug, Clone)]
pub struct Settings {
    token: String,
    team: Option<String>,
    api_base: String,
}

impl Settings {
    #[allow(unused)]
    pub fn new(token: String, team: Option<String>, api_base: String) -> Self {
        Self {
            token,
            team,
            api_base,
        }
    }

    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let token = get(TOKEN_VAR)
            .filter(|value| !value.is_empty())
            .ok_or(SettingsError::MissingToken(TOKEN_VAR))?;
        let team = get(TEAM_VAR).filter(|value| !value.is_empty());
        let api_base = get(API_BASE_VAR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            token,
            team,
            api_base,
        })
    }

    // Borrowing getters (no clones).
    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn team(&self) -> Option<&str> {
        self.team.as_deref()
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// ---- Errors ----
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("missing env var: {0}")]
    MissingToken(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn missing_token_is_an_error() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, SettingsError::MissingToken("VERCEL_TOKEN")));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let result = Settings::from_lookup(lookup(&[("VERCEL_TOKEN", "")]));
        assert!(result.is_err());
    }

    #[test]
    fn token_only_uses_defaults() {
        let settings = Settings::from_lookup(lookup(&[("VERCEL_TOKEN", "tok_123")])).unwrap();
        assert_eq!(settings.token(), "tok_123");
        assert_eq!(settings.team(), None);
        assert_eq!(settings.api_base(), DEFAULT_API_BASE);
    }

    #[test]
    fn team_and_base_override() {
        let settings = Settings::from_lookup(lookup(&[
            ("VERCEL_TOKEN", "tok_123"),
            ("VERCEL_TEAM", "team_abc"),
            ("VERCEL_API_BASE", "http://127.0.0.1:8080"),
        ]))
        .unwrap();
        assert_eq!(settings.team(), Some("team_abc"));
        assert_eq!(settings.api_base(), "http://127.0.0.1:8080");
    }
}
