//! Bridge configuration types.
//!
//! [`BridgeConfig`] is the immutable, validated configuration built once at
//! startup. [`ConfigFile`] mirrors the optional `config.toml`; every field is
//! optional there because environment variables may supply or override it.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

/// Default budget for a single outbound remote call.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

pub const DEFAULT_SERVICE_NAME: &str = "notebook-backend";
pub const DEFAULT_APP_NAME: &str = "Notebook";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";

/// Process-wide configuration, established at startup and never mutated.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Base URL of the remote service, without trailing slash.
    pub supabase_url: String,
    /// Anonymous API key, sent as the `apikey` header on every call.
    pub supabase_anon_key: SecretString,
    /// Shared secret expected in the `X-Admin-Key` header.
    pub admin_secret: SecretString,
    /// Elevated token used as the default bearer when the caller sends none.
    pub service_token: Option<SecretString>,
    /// Whether calls without a caller bearer may use the default token.
    pub allow_default_credential: bool,
    pub request_timeout: Duration,
    pub service_name: String,
    pub app_name: String,
    pub app_version: String,
    /// Built web frontend served for non-API paths, if set.
    pub web_dir: Option<PathBuf>,
}

impl BridgeConfig {
    /// Bearer used when the caller supplies none: the service token when
    /// configured, otherwise the anonymous key.
    pub fn default_token(&self) -> &SecretString {
        self.service_token.as_ref().unwrap_or(&self.supabase_anon_key)
    }
}

/// On-disk shape of `config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub supabase_url: Option<String>,
    pub supabase_anon_key: Option<String>,
    pub admin_secret: Option<String>,
    pub service_token: Option<String>,
    pub allow_default_credential: Option<bool>,
    pub request_timeout_secs: Option<u64>,
    pub service_name: Option<String>,
    pub app_name: Option<String>,
    pub app_version: Option<String>,
    pub web_dir: Option<PathBuf>,
}
