//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::form::FieldId;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Title, labels, and placeholder text for the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_name_label")]
    pub name_label: String,
    #[serde(default = "default_name_placeholder")]
    pub name_placeholder: String,
    #[serde(default = "default_email_label")]
    pub email_label: String,
    #[serde(default = "default_email_placeholder")]
    pub email_placeholder: String,
    #[serde(default = "default_message_label")]
    pub message_label: String,
    #[serde(default = "default_message_placeholder")]
    pub message_placeholder: String,
    #[serde(default = "default_submit_label")]
    pub submit_label: String,
}

impl FormConfig {
    pub fn label(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name_label,
            FieldId::Email => &self.email_label,
            FieldId::Message => &self.message_label,
        }
    }

    pub fn placeholder(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name_placeholder,
            FieldId::Email => &self.email_placeholder,
            FieldId::Message => &self.message_placeholder,
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            name_label: default_name_label(),
            name_placeholder: default_name_placeholder(),
            email_label: default_email_label(),
            email_placeholder: default_email_placeholder(),
            message_label: default_message_label(),
            message_placeholder: default_message_placeholder(),
            submit_label: default_submit_label(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Width of the centered form column, in terminal cells.
    #[serde(default = "default_form_width")]
    pub form_width: u16,
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            form_width: default_form_width(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

/// Submission logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_title() -> String {
    "Contact us".to_string()
}
fn default_name_label() -> String {
    "Name".to_string()
}
fn default_name_placeholder() -> String {
    "Enter your name".to_string()
}
fn default_email_label() -> String {
    "Email".to_string()
}
fn default_email_placeholder() -> String {
    "Enter your email".to_string()
}
fn default_message_label() -> String {
    "Message".to_string()
}
fn default_message_placeholder() -> String {
    "Enter your message".to_string()
}
fn default_submit_label() -> String {
    "Submit".to_string()
}
fn default_form_width() -> u16 {
    46
}
fn default_timestamp_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/crabform/logs".to_string()
}
