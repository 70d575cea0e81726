use crate::engine::{ComplianceThresholds, EngineConfig, MissingFieldPolicy};
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

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
    pub engine: EngineConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            engine: load_engine_config()?,
        })
    }
}

fn load_engine_config() -> Result<EngineConfig, ConfigError> {
    let missing_fields = match env::var("ENGINE_MISSING_FIELDS") {
        Ok(raw) => MissingFieldPolicy::parse(&raw)
            .ok_or(ConfigError::InvalidMissingFieldPolicy { value: raw })?,
        Err(_) => MissingFieldPolicy::default(),
    };

    let defaults = ComplianceThresholds::default();
    let compliant_min = threshold_var("COMPLIANCE_COMPLIANT_MIN", defaults.compliant_min())?;
    let partial_min = threshold_var("COMPLIANCE_PARTIAL_MIN", defaults.partial_min())?;
    let compliance = ComplianceThresholds::new(compliant_min, partial_min).ok_or(
        ConfigError::InvalidComplianceThresholds {
            compliant_min,
            partial_min,
        },
    )?;

    Ok(EngineConfig {
        missing_fields,
        compliance,
    })
}

fn threshold_var(name: &'static str, default: u8) -> Result<u8, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u8>()
            .map_err(|_| ConfigError::InvalidThreshold { name }),
        Err(_) => Ok(default),
    }
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
    InvalidHost { source: std::net::AddrParseError },
    InvalidMissingFieldPolicy { value: String },
    InvalidThreshold { name: &'static str },
    InvalidComplianceThresholds { compliant_min: u8, partial_min: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidMissingFieldPolicy { value } => write!(
                f,
                "ENGINE_MISSING_FIELDS must be 'reject' or 'assume-least-severe' (found '{}')",
                value
            ),
            ConfigError::InvalidThreshold { name } => {
                write!(f, "{} must be an integer between 0 and 100", name)
            }
            ConfigError::InvalidComplianceThresholds {
                compliant_min,
                partial_min,
            } => write!(
                f,
                "compliance thresholds must satisfy partial ({}) <= compliant ({}) <= 100",
                partial_min, compliant_min
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("ENGINE_MISSING_FIELDS");
        env::remove_var("COMPLIANCE_COMPLIANT_MIN");
        env::remove_var("COMPLIANCE_PARTIAL_MIN");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.engine.missing_fields, MissingFieldPolicy::Reject);
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn reads_engine_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ENGINE_MISSING_FIELDS", "assume-least-severe");
        env::set_var("COMPLIANCE_COMPLIANT_MIN", "90");
        env::set_var("COMPLIANCE_PARTIAL_MIN", "70");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.engine.missing_fields,
            MissingFieldPolicy::AssumeLeastSevere
        );
        assert_eq!(config.engine.compliance.compliant_min(), 90);
        assert_eq!(config.engine.compliance.partial_min(), 70);
        reset_env();
    }

    #[test]
    fn rejects_inverted_compliance_thresholds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("COMPLIANCE_COMPLIANT_MIN", "75");
        env::set_var("COMPLIANCE_PARTIAL_MIN", "80");
        let err = AppConfig::load().expect_err("inverted thresholds rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidComplianceThresholds {
                compliant_min: 75,
                partial_min: 80
            }
        ));
        reset_env();
    }

    #[test]
    fn rejects_unknown_missing_field_policy() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ENGINE_MISSING_FIELDS", "guess");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidMissingFieldPolicy { .. })
        ));
        reset_env();
    }
}
