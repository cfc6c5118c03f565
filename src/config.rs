use std::env;

/// Authentication for the upstream Prometheus API.
///
/// Resolution order when several variables are set: pre-encoded Basic
/// credentials, then a Bearer token, then a user/token pair.
#[derive(Debug, Clone, PartialEq)]
pub enum PromAuth {
    None,
    /// Pre-encoded `base64(user:password)` from PROM_BASIC.
    Basic(String),
    /// Bearer token from PROM_BEARER.
    Bearer(String),
    /// PROM_USER + PROM_TOKEN, encoded by the HTTP client at request time.
    UserToken { user: String, token: String },
}

/// Upstream source configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct PromConfig {
    pub base_url: String,
    pub auth: PromAuth,
}

#[derive(Debug)]
pub enum ConfigError {
    MissingVariable(String),
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVariable(var) => write!(f, "Missing environment variable: {}", var),
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl PromConfig {
    /// Load configuration from environment variables.
    ///
    /// PROM_URL is required and must be http(s). It may point either at
    /// the server root or directly at the /api/v1 prefix; both normalize
    /// to the same base URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("PROM_URL")
            .map_err(|_| ConfigError::MissingVariable("PROM_URL".to_string()))?;

        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ConfigError::MissingVariable("PROM_URL".to_string()));
        }
        if !raw.starts_with("http://") && !raw.starts_with("https://") {
            return Err(ConfigError::InvalidValue(
                "PROM_URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(Self {
            base_url: normalize_base_url(raw),
            auth: auth_from_env(),
        })
    }
}

/// Trim any trailing slash and append /api/v1 unless already present.
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.ends_with("/api/v1") {
        trimmed.to_string()
    } else {
        format!("{}/api/v1", trimmed)
    }
}

fn auth_from_env() -> PromAuth {
    if let Ok(basic) = env::var("PROM_BASIC") {
        return PromAuth::Basic(basic);
    }
    if let Ok(bearer) = env::var("PROM_BEARER") {
        return PromAuth::Bearer(bearer);
    }
    if let (Ok(user), Ok(token)) = (env::var("PROM_USER"), env::var("PROM_TOKEN")) {
        return PromAuth::UserToken { user, token };
    }
    PromAuth::None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gains_api_suffix() {
        assert_eq!(
            normalize_base_url("https://prom.example.com"),
            "https://prom.example.com/api/v1"
        );
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        assert_eq!(
            normalize_base_url("https://prom.example.com/"),
            "https://prom.example.com/api/v1"
        );
    }

    #[test]
    fn test_existing_api_suffix_is_kept() {
        assert_eq!(
            normalize_base_url("https://prom.example.com/api/v1"),
            "https://prom.example.com/api/v1"
        );
        assert_eq!(
            normalize_base_url("https://prom.example.com/api/v1/"),
            "https://prom.example.com/api/v1"
        );
    }
}
