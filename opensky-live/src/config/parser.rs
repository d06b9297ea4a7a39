//! INI parsing logic for converting `Ini` → `Settings`.
//!
//! The single place where INI key names are mapped to struct fields.

use ini::Ini;

use super::file::ConfigError;
use super::settings::{parse_timeout, Settings};

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse an `Ini` object into `Settings`.
///
/// Starts from `Settings::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    // [opensky] section
    if let Some(section) = ini.section(Some("opensky")) {
        if let Some(v) = section.get("client_id") {
            settings.client_id = non_empty(v);
        }
        if let Some(v) = section.get("client_secret") {
            settings.client_secret = non_empty(v);
        }
        if let Some(v) = section.get("api_url").and_then(non_empty) {
            settings.api_url = v;
        }
        if let Some(v) = section.get("token_url").and_then(non_empty) {
            settings.token_url = v;
        }
        if let Some(v) = section.get("timeout") {
            settings.timeout = parse_timeout(v).ok_or_else(|| ConfigError::InvalidValue {
                section: "opensky".to_string(),
                key: "timeout".to_string(),
                value: v.to_string(),
                reason: "must be a positive integer (seconds)".to_string(),
            })?;
        }
    }

    // [summary] section
    if let Some(section) = ini.section(Some("summary")) {
        if let Some(v) = section.get("top_n") {
            settings.default_top_n =
                v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    section: "summary".to_string(),
                    key: "top_n".to_string(),
                    value: v.to_string(),
                    reason: "must be a non-negative integer".to_string(),
                })?;
        }
    }

    Ok(settings)
}
