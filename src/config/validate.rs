use anyhow::{Result, bail};

use super::{AppConfig, defaults};

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.storage.url.trim().is_empty() {
        errors.push("storage.url must not be empty".to_string());
    }

    if cfg.storage.max_connections == 0 {
        errors.push("storage.max_connections must be > 0".to_string());
    }

    if cfg.session.user_id.trim().is_empty() {
        errors.push("session.user_id must not be empty".to_string());
    }

    if !cfg.session.email.contains('@') {
        errors.push(format!(
            "session.email ({}) must be an email address",
            cfg.session.email
        ));
    }

    if let Some(assistant) = cfg.assistant.as_ref() {
        if assistant.api_key.trim().is_empty() {
            errors.push("assistant.api_key must not be empty".to_string());
        }

        if assistant.model.trim().is_empty() {
            errors.push("assistant.model must not be empty".to_string());
        }

        if !assistant.base_url.starts_with("http://") && !assistant.base_url.starts_with("https://")
        {
            errors.push("assistant.base_url must be an http(s) url".to_string());
        }
    }

    if cfg.scanner.delay_ms > defaults::MAX_SCAN_DELAY_MS {
        errors.push(format!(
            "scanner.delay_ms ({}) must be <= {}",
            cfg.scanner.delay_ms,
            defaults::MAX_SCAN_DELAY_MS
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}
