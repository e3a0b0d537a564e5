pub mod model;

use anyhow::{Context, Result};
use std::path::PathBuf;

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crabform")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    let path = config_path();
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldId;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.form.title, "Contact us");
        assert_eq!(config.form.label(FieldId::Email), "Email");
        assert_eq!(config.ui.form_width, 46);
        assert!(!config.logging.enabled);
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [form]
            title = "Feedback"

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.form.title, "Feedback");
        assert_eq!(config.form.submit_label, "Submit");
        assert!(config.logging.enabled);
        assert_eq!(config.logging.log_dir, "~/.local/share/crabform/logs");
    }
}
