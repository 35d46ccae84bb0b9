//! Gemini judging client for Skillet.
//!
//! One dish, one request: [`judge`] sends the served dish to the Gemini
//! GenerateContent API and maps the structured response to a
//! [`skillet_types::CookingResult`].
//!
//! # Error Handling
//!
//! The public contract has no failure channel at all. Transport errors,
//! non-success statuses, timeouts, and malformed or incomplete responses are
//! all absorbed here: they are logged via `tracing` and converted into the
//! fixed [`CookingResult::fallback`] verdict. The caller's state machine can
//! therefore treat judging completion as a single unconditional transition.

use std::sync::OnceLock;
use std::time::Duration;

pub(crate) use anyhow::Result;
pub(crate) use skillet_types::{CookingResult, DishSnapshot};

mod gemini;

pub use gemini::{DEFAULT_MODEL, judge};

/// Canonical Gemini API base URL.
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Total per-request deadline. Bounds the Judging phase so the session can
/// never wait on the remote judge forever; on expiry the fallback fires.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

fn base_client_builder() -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .redirect(reqwest::redirect::Policy::none())
}

/// Hardened client for real judge endpoints: refuses plaintext HTTP, so the
/// API key header can never travel unencrypted.
fn hardened_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        base_client_builder()
            .https_only(true)
            .build()
            .unwrap_or_else(|e| {
                tracing::error!(
                    "Failed to build hardened HTTP client: {e}. Attempting minimal hardened fallback."
                );
                reqwest::Client::builder()
                    .https_only(true)
                    .build()
                    .expect("Minimal hardened HTTP client must build; cannot proceed without TLS")
            })
    })
}

/// Plaintext-capable client, reachable only through an explicit non-HTTPS
/// base-URL override (local mock servers).
fn loopback_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        base_client_builder().build().unwrap_or_else(|e| {
            tracing::error!("Failed to build loopback HTTP client: {e}. Using default client.");
            reqwest::Client::new()
        })
    })
}

pub(crate) fn http_client(base_url: &str) -> &'static reqwest::Client {
    if base_url.starts_with("http://") {
        tracing::debug!("Plaintext base URL override; using the loopback client");
        loopback_client()
    } else {
        hardened_client()
    }
}

/// A Gemini API key.
///
/// Wrapped so the secret never leaks through `Debug` output or logs.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey([REDACTED])")
    }
}

/// Judge endpoint configuration.
///
/// The base URL is overridable so tests can point the client at a local mock
/// server; production use keeps [`GEMINI_API_BASE_URL`].
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    api_key: ApiKey,
    model: String,
    base_url: String,
}

impl JudgeConfig {
    #[must_use]
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiKey, GEMINI_API_BASE_URL, JudgeConfig, http_client};

    #[test]
    fn https_base_urls_get_the_hardened_client() {
        // Same static for every secure base, distinct from the loopback one.
        let default_client = http_client(GEMINI_API_BASE_URL);
        assert!(std::ptr::eq(
            default_client,
            http_client("https://other.example")
        ));
        assert!(!std::ptr::eq(
            default_client,
            http_client("http://127.0.0.1:9")
        ));
    }

    #[tokio::test]
    async fn hardened_client_refuses_plaintext_http() {
        // Rejected before any connection is attempted.
        let err = http_client(GEMINI_API_BASE_URL)
            .post("http://127.0.0.1:9/models/x:generateContent")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_builder());
        assert!(!err.is_connect());
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("AIza-very-secret");
        let debug = format!("{key:?}");
        assert!(!debug.contains("very-secret"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn judge_config_debug_is_redacted() {
        let config = JudgeConfig::new(ApiKey::new("AIza-very-secret"));
        assert!(!format!("{config:?}").contains("very-secret"));
    }

    #[test]
    fn judge_config_defaults() {
        let config = JudgeConfig::new(ApiKey::new("k"));
        assert_eq!(config.base_url(), GEMINI_API_BASE_URL);
        assert_eq!(config.model(), super::DEFAULT_MODEL);
    }

    #[test]
    fn judge_config_overrides() {
        let config = JudgeConfig::new(ApiKey::new("k"))
            .with_model("gemini-test")
            .with_base_url("http://127.0.0.1:1234");
        assert_eq!(config.model(), "gemini-test");
        assert_eq!(config.base_url(), "http://127.0.0.1:1234");
    }
}
