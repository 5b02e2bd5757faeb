//! Bridge configuration loader.
//!
//! Reads an optional `config.toml`, then lets environment variables override
//! each field, and validates the result into an immutable [`BridgeConfig`].
//! Unlike a preferences file, a bad or incomplete bridge config is fatal:
//! every problem surfaces as a [`ConfigError`] naming the field.

use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::SecretString;

use notebook_bridge_types::config::{
    BridgeConfig, ConfigFile, DEFAULT_APP_NAME, DEFAULT_APP_VERSION, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SERVICE_NAME,
};
use notebook_bridge_types::error::ConfigError;

pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
pub const ENV_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
pub const ENV_ADMIN_SECRET: &str = "ADMIN_SECRET_KEY";
pub const ENV_SERVICE_TOKEN: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const ENV_ALLOW_DEFAULT_CREDENTIAL: &str = "NBRIDGE_ALLOW_DEFAULT_CREDENTIAL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "NBRIDGE_REQUEST_TIMEOUT_SECS";
pub const ENV_SERVICE_NAME: &str = "NBRIDGE_SERVICE_NAME";
pub const ENV_APP_NAME: &str = "NBRIDGE_APP_NAME";
pub const ENV_APP_VERSION: &str = "NBRIDGE_APP_VERSION";
pub const ENV_WEB_DIR: &str = "NBRIDGE_WEB_DIR";

/// Load configuration from `path` (if given) and the process environment.
pub async fn load_bridge_config(path: Option<&Path>) -> Result<BridgeConfig, ConfigError> {
    load_bridge_config_with(path, |key| std::env::var(key).ok()).await
}

/// Load configuration with an injected environment lookup.
pub async fn load_bridge_config_with<F>(
    path: Option<&Path>,
    env: F,
) -> Result<BridgeConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let file = match path {
        Some(path) => read_config_file(path).await?,
        None => ConfigFile::default(),
    };
    resolve(file, env)
}

async fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

    let file = toml::from_str::<ConfigFile>(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    tracing::debug!("Loaded bridge config from {}", path.display());
    Ok(file)
}

fn resolve<F>(file: ConfigFile, env: F) -> Result<BridgeConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let supabase_url = required("supabase_url", env(ENV_SUPABASE_URL).or(file.supabase_url))?;
    let supabase_url = validate_url(&supabase_url)?;

    let supabase_anon_key = required(
        "supabase_anon_key",
        env(ENV_SUPABASE_ANON_KEY).or(file.supabase_anon_key),
    )?;
    let admin_secret = required_secret(
        "admin_secret",
        env(ENV_ADMIN_SECRET).or(file.admin_secret),
    )?;
    let service_token = env(ENV_SERVICE_TOKEN)
        .or(file.service_token)
        .filter(|t| !t.trim().is_empty());

    let allow_default_credential = match env(ENV_ALLOW_DEFAULT_CREDENTIAL) {
        Some(raw) => parse_bool("allow_default_credential", &raw)?,
        None => file.allow_default_credential.unwrap_or(true),
    };

    let timeout_secs = match env(ENV_REQUEST_TIMEOUT_SECS) {
        Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
            field: "request_timeout_secs",
            reason: e.to_string(),
        })?,
        None => file
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
    };
    if timeout_secs == 0 {
        return Err(ConfigError::Invalid {
            field: "request_timeout_secs",
            reason: "must be greater than zero".to_string(),
        });
    }

    let web_dir = env(ENV_WEB_DIR)
        .map(PathBuf::from)
        .or(file.web_dir)
        .filter(|p| !p.as_os_str().is_empty());

    Ok(BridgeConfig {
        supabase_url,
        supabase_anon_key: SecretString::from(supabase_anon_key),
        admin_secret: SecretString::from(admin_secret),
        service_token: service_token.map(SecretString::from),
        allow_default_credential,
        request_timeout: Duration::from_secs(timeout_secs),
        service_name: optional(
            "service_name",
            env(ENV_SERVICE_NAME).or(file.service_name),
            DEFAULT_SERVICE_NAME,
        )?,
        app_name: optional("app_name", env(ENV_APP_NAME).or(file.app_name), DEFAULT_APP_NAME)?,
        app_version: optional(
            "app_version",
            env(ENV_APP_VERSION).or(file.app_version),
            DEFAULT_APP_VERSION,
        )?,
        web_dir,
    })
}

fn required(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    let value = value.ok_or(ConfigError::Missing(field))?;
    if value.trim().is_empty() {
        return Err(ConfigError::Blank(field));
    }
    Ok(value.trim().to_string())
}

/// Like [`required`] but keeps the value byte-for-byte; the gate compares it
/// against the header exactly.
fn required_secret(field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    let value = value.ok_or(ConfigError::Missing(field))?;
    if value.trim().is_empty() {
        return Err(ConfigError::Blank(field));
    }
    Ok(value)
}

fn optional(
    field: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<String, ConfigError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(ConfigError::Blank(field)),
        Some(v) => Ok(v.trim().to_string()),
        None => Ok(default.to_string()),
    }
}

fn parse_bool(field: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid {
            field,
            reason: format!("expected a boolean, got '{other}'"),
        }),
    }
}

fn validate_url(raw: &str) -> Result<String, ConfigError> {
    let parsed = reqwest::Url::parse(raw).map_err(|e| ConfigError::Invalid {
        field: "supabase_url",
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid {
            field: "supabase_url",
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;
    use tempfile::TempDir;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn minimal_env() -> Vec<(&'static str, &'static str)> {
        vec![
            (ENV_SUPABASE_URL, "https://example.supabase.co/"),
            (ENV_SUPABASE_ANON_KEY, "anon-key"),
            (ENV_ADMIN_SECRET, "admin-secret"),
        ]
    }

    #[tokio::test]
    async fn env_only_config_uses_defaults() {
        let config = load_bridge_config_with(None, env_of(&minimal_env()))
            .await
            .unwrap();

        assert_eq!(config.supabase_url, "https://example.supabase.co");
        assert_eq!(config.supabase_anon_key.expose_secret(), "anon-key");
        assert_eq!(config.admin_secret.expose_secret(), "admin-secret");
        assert!(config.service_token.is_none());
        assert!(config.allow_default_credential);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.service_name, "notebook-backend");
        assert_eq!(config.app_name, "Notebook");
        assert_eq!(config.app_version, "1.0.0");
        assert!(config.web_dir.is_none());
    }

    #[tokio::test]
    async fn missing_required_setting_is_named() {
        let err = load_bridge_config_with(
            None,
            env_of(&[(ENV_SUPABASE_URL, "https://example.supabase.co")]),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ConfigError::Missing("supabase_anon_key")));
    }

    #[tokio::test]
    async fn blank_admin_secret_is_rejected() {
        let mut env = minimal_env();
        env.push((ENV_ADMIN_SECRET, "   "));
        // Later pairs win in the map.
        let err = load_bridge_config_with(None, env_of(&env)).await.unwrap_err();
        assert!(matches!(err, ConfigError::Blank("admin_secret")));
    }

    #[tokio::test]
    async fn file_values_are_overridden_by_env() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(
            &path,
            r#"
supabase_url = "https://file.supabase.co"
supabase_anon_key = "file-anon"
admin_secret = "file-admin"
service_token = "file-service"
request_timeout_secs = 30
allow_default_credential = false
app_name = "Notebook Staging"
"#,
        )
        .await
        .unwrap();

        let config = load_bridge_config_with(
            Some(&path),
            env_of(&[
                (ENV_ADMIN_SECRET, "env-admin"),
                (ENV_REQUEST_TIMEOUT_SECS, "5"),
            ]),
        )
        .await
        .unwrap();

        assert_eq!(config.supabase_url, "https://file.supabase.co");
        assert_eq!(config.admin_secret.expose_secret(), "env-admin");
        assert_eq!(config.default_token().expose_secret(), "file-service");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(!config.allow_default_credential);
        assert_eq!(config.app_name, "Notebook Staging");
    }

    #[tokio::test]
    async fn unreadable_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.toml");
        let err = load_bridge_config_with(Some(&path), env_of(&minimal_env()))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[tokio::test]
    async fn invalid_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        tokio::fs::write(&path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let err = load_bridge_config_with(Some(&path), env_of(&minimal_env()))
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[tokio::test]
    async fn zero_timeout_is_rejected() {
        let mut env = minimal_env();
        env.push((ENV_REQUEST_TIMEOUT_SECS, "0"));
        let err = load_bridge_config_with(None, env_of(&env)).await.unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "request_timeout_secs",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn bad_boolean_is_rejected() {
        let mut env = minimal_env();
        env.push((ENV_ALLOW_DEFAULT_CREDENTIAL, "sometimes"));
        let err = load_bridge_config_with(None, env_of(&env)).await.unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "allow_default_credential",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn non_http_url_is_rejected() {
        let mut env = minimal_env();
        env.push((ENV_SUPABASE_URL, "ftp://example.supabase.co"));
        let err = load_bridge_config_with(None, env_of(&env)).await.unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "supabase_url", .. }));
    }

    #[tokio::test]
    async fn blank_service_token_counts_as_absent() {
        let mut env = minimal_env();
        env.push((ENV_SERVICE_TOKEN, ""));
        let config = load_bridge_config_with(None, env_of(&env)).await.unwrap();
        assert!(config.service_token.is_none());
        assert_eq!(config.default_token().expose_secret(), "anon-key");
    }

    #[tokio::test]
    async fn admin_secret_is_kept_verbatim() {
        let mut env = minimal_env();
        env.push((ENV_ADMIN_SECRET, " padded-secret "));
        let config = load_bridge_config_with(None, env_of(&env)).await.unwrap();
        assert_eq!(config.admin_secret.expose_secret(), " padded-secret ");
    }
}
