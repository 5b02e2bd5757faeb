//! `nbridge config` -- print the effective configuration.

use anyhow::Result;
use console::style;
use serde_json::json;

use notebook_bridge_types::config::BridgeConfig;

const REDACTED: &str = "[redacted]";

/// Redacted, printable view of the configuration.
pub fn config_view(config: &BridgeConfig) -> serde_json::Value {
    json!({
        "supabase_url": config.supabase_url,
        "supabase_anon_key": REDACTED,
        "admin_secret": REDACTED,
        "service_token": config.service_token.as_ref().map(|_| REDACTED),
        "allow_default_credential": config.allow_default_credential,
        "request_timeout_secs": config.request_timeout.as_secs(),
        "service_name": config.service_name,
        "app_name": config.app_name,
        "app_version": config.app_version,
        "web_dir": config.web_dir.as_ref().map(|p| p.display().to_string()),
    })
}

pub fn show_config(config: &BridgeConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config_view(config))?);
        return Ok(());
    }

    let default_credential = if config.service_token.is_some() {
        "service token"
    } else {
        "anonymous key"
    };

    println!();
    println!(
        "  {} Notebook bridge v{}",
        style("⚡").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("  {}", style("── Remote ──").dim());
    println!("  URL:      {}", style(&config.supabase_url).cyan());
    println!("  Timeout:  {}s", config.request_timeout.as_secs());
    if config.allow_default_credential {
        println!(
            "  Fallback: {} (calls without a bearer use the {})",
            style("enabled").yellow(),
            default_credential
        );
    } else {
        println!("  Fallback: {}", style("disabled").green());
    }
    println!();
    println!("  {}", style("── Public ──").dim());
    println!("  Service:  {}", config.service_name);
    println!("  App:      {} {}", config.app_name, config.app_version);
    if let Some(dir) = &config.web_dir {
        println!("  Web dir:  {}", dir.display());
    }
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use secrecy::SecretString;

    use super::*;

    #[test]
    fn view_never_contains_secrets() {
        let config = BridgeConfig {
            supabase_url: "https://example.supabase.co".to_string(),
            supabase_anon_key: SecretString::from("anon-key-value"),
            admin_secret: SecretString::from("admin-secret-value"),
            service_token: Some(SecretString::from("service-token-value")),
            allow_default_credential: true,
            request_timeout: Duration::from_secs(15),
            service_name: "notebook-backend".to_string(),
            app_name: "Notebook".to_string(),
            app_version: "1.0.0".to_string(),
            web_dir: None,
        };

        let rendered = config_view(&config).to_string();
        assert!(!rendered.contains("anon-key-value"));
        assert!(!rendered.contains("admin-secret-value"));
        assert!(!rendered.contains("service-token-value"));
        assert!(rendered.contains("https://example.supabase.co"));
        assert_eq!(config_view(&config)["service_token"], json!("[redacted]"));
    }
}
