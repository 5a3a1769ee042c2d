use std::env;
use std::fmt;
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::workflows::assessment::{AssessmentConfig, ConfigValidationError};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub assessment: AssessmentConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let assessment = match env::var("ASSESSMENT_CONFIG_PATH") {
            Ok(path) if !path.trim().is_empty() => load_assessment_config(path.trim())?,
            _ => AssessmentConfig::default(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            assessment,
        })
    }
}

/// Read thresholds and weights from a JSON document. Missing sections keep their defaults;
/// the result must pass [`AssessmentConfig::validate`].
pub fn load_assessment_config(path: impl AsRef<Path>) -> Result<AssessmentConfig, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::AssessmentFile {
        path: path.to_path_buf(),
        source,
    })?;

    let config: AssessmentConfig =
        serde_json::from_str(&raw).map_err(|source| ConfigError::AssessmentFormat {
            path: path.to_path_buf(),
            source,
        })?;

    config.validate().map_err(ConfigError::InvalidAssessment)?;
    Ok(config)
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    AssessmentFile {
        path: PathBuf,
        source: std::io::Error,
    },
    AssessmentFormat {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidAssessment(ConfigValidationError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::AssessmentFile { path, .. } => {
                write!(f, "unable to read assessment config {}", path.display())
            }
            ConfigError::AssessmentFormat { path, source } => write!(
                f,
                "assessment config {} is not valid JSON: {}",
                path.display(),
                source
            ),
            ConfigError::InvalidAssessment(err) => {
                write!(f, "assessment config rejected: {}", err)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort => None,
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::AssessmentFile { source, .. } => Some(source),
            ConfigError::AssessmentFormat { source, .. } => Some(source),
            ConfigError::InvalidAssessment(err) => Some(err),
        }
    }
}
