use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use crate::models::{PhotoLimits, RefundPolicy};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub pricing: PricingSettings,
    #[serde(default)]
    pub uploads: UploadSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct PricingSettings {
    #[serde(default = "default_platform_fee_rate")]
    pub platform_fee_rate: f64,
    #[serde(default = "default_full_refund_notice_hours")]
    pub full_refund_notice_hours: i64,
    #[serde(default = "default_partial_refund_rate")]
    pub partial_refund_rate: f64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            platform_fee_rate: default_platform_fee_rate(),
            full_refund_notice_hours: default_full_refund_notice_hours(),
            partial_refund_rate: default_partial_refund_rate(),
        }
    }
}

impl PricingSettings {
    pub fn refund_policy(&self) -> RefundPolicy {
        RefundPolicy {
            full_refund_notice_hours: self.full_refund_notice_hours,
            partial_refund_rate: self.partial_refund_rate,
        }
    }
}

fn default_platform_fee_rate() -> f64 { 0.15 }
fn default_full_refund_notice_hours() -> i64 { 24 }
fn default_partial_refund_rate() -> f64 { 0.5 }

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    #[serde(default = "default_max_photos")]
    pub max_photos: usize,
    #[serde(default = "default_max_photo_mb")]
    pub max_photo_mb: u64,
    #[serde(default = "default_allowed_types")]
    pub allowed_types: Vec<String>,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            max_photos: default_max_photos(),
            max_photo_mb: default_max_photo_mb(),
            allowed_types: default_allowed_types(),
        }
    }
}

impl UploadSettings {
    /// Limits for a batch, optionally with a tighter per-form photo count
    pub fn photo_limits(&self, max_files: Option<usize>) -> PhotoLimits {
        PhotoLimits {
            max_files: max_files.map_or(self.max_photos, |n| n.min(self.max_photos)),
            max_file_bytes: self.max_photo_mb.saturating_mul(1024 * 1024),
            allowed_types: self.allowed_types.clone(),
        }
    }
}

fn default_max_photos() -> usize { 5 }
fn default_max_photo_mb() -> u64 { 5 }
fn default_allowed_types() -> Vec<String> {
    PhotoLimits::default().allowed_types
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PAWND)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PAWND__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PAWND")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
