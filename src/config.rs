// Configuration: the portal has exactly one setting, the base URL of the
// rental API. It is resolved once in `main` and handed to the client.

/// Environment variable holding the API base URL.
pub const BASE_URL_VAR: &str = "API_BASE_URL";

/// Used when neither the environment nor `.env` provides a base URL.
/// The backend mounts its controllers under `/api`.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Read the configuration from the process environment, loading a
    /// `.env` file from the working directory first when one exists.
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("loaded environment from {}", path.display());
        }
        let raw = std::env::var(BASE_URL_VAR).ok();
        Self::from_value(raw.as_deref())
    }

    /// Build from an optional raw value. Blank values fall back to the
    /// default; a trailing `/` is dropped so paths join as `{base}/{resource}`.
    pub fn from_value(raw: Option<&str>) -> Self {
        let base = match raw.map(str::trim) {
            Some(v) if !v.is_empty() => v,
            _ => DEFAULT_BASE_URL,
        };
        Config {
            base_url: base.trim_end_matches('/').to_string(),
        }
    }
}
