//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::style::{ColorMode, Theme};

/// Root configuration for the demo server.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:1337").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:1337".to_string(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Tracing filter directive, used when `RUST_LOG` is unset.
    pub filter: String,

    /// When to color request lines.
    pub color: ColorMode,

    /// Terminal background to tune colors for.
    pub theme: Theme,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "reqlog=info,reqlog_demo=info".to_string(),
            color: ColorMode::Auto,
            theme: Theme::Auto,
        }
    }
}
