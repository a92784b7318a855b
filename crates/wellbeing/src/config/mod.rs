use std::env;
use std::net::{IpAddr, SocketAddr};

use crate::scoring::{CompletenessPolicy, CutoffPreset, ScoringConfig};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Settings for the assessment service, read from the process environment and an optional
/// `.env` file.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            environment: AppEnvironment::parse(&var_or("APP_ENV", "development")),
            server: ServerConfig::from_env()?,
            telemetry: TelemetryConfig {
                log_level: var_or("APP_LOG_LEVEL", "info"),
            },
            scoring: ScoringSettings::from_env()?,
        })
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// HTTP listener address.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let port = var_or("APP_PORT", "3000")
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        Ok(Self {
            host: var_or("APP_HOST", "127.0.0.1"),
            port,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::from([127, 0, 0, 1])
        } else {
            self.host.parse()?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Cutoff table and completeness policy applied when a request does not choose its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringSettings {
    pub cutoffs: CutoffPreset,
    pub require_complete: bool,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            cutoffs: CutoffPreset::default(),
            require_complete: true,
        }
    }
}

impl ScoringSettings {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let cutoffs = match env::var("APP_SCORE_CUTOFFS") {
            Ok(raw) => CutoffPreset::parse(&raw).ok_or(ConfigError::InvalidCutoffs(raw))?,
            Err(_) => defaults.cutoffs,
        };
        let require_complete = match env::var("APP_REQUIRE_COMPLETE") {
            Ok(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidFlag {
                name: "APP_REQUIRE_COMPLETE",
                value: raw,
            })?,
            Err(_) => defaults.require_complete,
        };

        Ok(Self {
            cutoffs,
            require_complete,
        })
    }

    pub fn scoring_config(&self) -> ScoringConfig {
        let completeness = if self.require_complete {
            CompletenessPolicy::RequireAll
        } else {
            CompletenessPolicy::AllowPartial
        };
        ScoringConfig::new(self.cutoffs.table(), completeness)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_PORT must be a valid u16")]
    InvalidPort,
    #[error("APP_HOST must be 'localhost' or an IPv4/IPv6 address")]
    InvalidHost(#[from] std::net::AddrParseError),
    #[error("APP_SCORE_CUTOFFS must be 'unified' or 'dashboard', got '{0}'")]
    InvalidCutoffs(String),
    #[error("{name} must be true or false, got '{value}'")]
    InvalidFlag { name: &'static str, value: String },
}
