//! Configuration loading and constants.
//!
//! All settings come from the process environment and are read exactly once at
//! startup. Every variable has a documented default, so an empty environment
//! yields a working configuration. `AppConfig` is the root configuration struct
//! and is shared read-only with every request handler.

use std::net::{IpAddr, SocketAddr};

use const_format::formatcp;
use serde::Serialize;

// =============================================================================
// HTTP Response Cache Control
// =============================================================================
// Probe and API responses are always `no-store`; only the page and assets are
// cacheable.

/// Home page - configuration values only change on redeploy
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 60;

/// Static assets (CSS, JS)
pub const HTTP_CACHE_STATIC_MAX_AGE: u32 = 86400;

pub const CACHE_CONTROL_HOME: &str = formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

pub const CACHE_CONTROL_STATIC: &str = formatcp!("public, max-age={}", HTTP_CACHE_STATIC_MAX_AGE);

pub const CACHE_CONTROL_NO_STORE: &str = "no-store";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_APP_NAME: &str = "APP_NAME";
pub const ENV_APP_VERSION: &str = "APP_VERSION";
pub const ENV_ENVIRONMENT: &str = "ENVIRONMENT";
pub const ENV_HOST: &str = "HOST";
pub const ENV_PORT: &str = "PORT";
/// Debug toggle, kept under its historical name for existing manifests
pub const ENV_DEBUG: &str = "FLASK_DEBUG";
pub const ENV_DEBUG_ALIAS: &str = "APP_DEBUG";
pub const ENV_KUBERNETES_NAMESPACE: &str = "KUBERNETES_NAMESPACE";
/// Kubernetes sets HOSTNAME to the pod name
pub const ENV_POD_NAME: &str = "HOSTNAME";
pub const ENV_KUBERNETES_SERVICE_ACCOUNT: &str = "KUBERNETES_SERVICE_ACCOUNT";
pub const ENV_STATIC_DIR: &str = "STATIC_DIR";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

// =============================================================================
// Defaults
// =============================================================================

pub const DEFAULT_APP_NAME: &str = "K8s-Terraform Portfolio Demo";
pub const DEFAULT_APP_VERSION: &str = "1.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_KUBERNETES_NAMESPACE: &str = "default";
pub const DEFAULT_POD_NAME: &str = "unknown";
pub const DEFAULT_SERVICE_ACCOUNT: &str = "default";

/// Directory for static files
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Reported by the status endpoint in place of a real uptime figure
pub const UPTIME_LABEL: &str = "Running in container";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "portfolio_demo=info,tower_http=info";

/// Log filter used when the debug toggle is on and RUST_LOG is not set
pub const DEBUG_LOG_FILTER: &str = "portfolio_demo=debug,tower_http=debug";

/// Seconds to wait for in-flight requests after a shutdown signal
pub const SHUTDOWN_GRACE_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listener settings
    pub http: HttpServerConfig,
    /// Values shown on the home page and status endpoints
    pub app: ApplicationConfig,
    /// Orchestration identity, reported by the info endpoint
    pub kubernetes: KubernetesConfig,
    /// Directory served under /static
    pub static_dir: String,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplicationConfig {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub debug: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct KubernetesConfig {
    pub namespace: String,
    pub pod_name: String,
    pub service_account: String,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// A variable that is set, even to an empty string, takes precedence over
    /// its default. Only `PORT`, `HOST` and `LOG_FORMAT` are validated.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup(ENV_PORT) {
            Some(value) => match value.trim().parse::<u16>() {
                Ok(port) => port,
                Err(source) => return Err(ConfigError::InvalidPort { value, source }),
            },
            None => DEFAULT_PORT,
        };

        let host_value = var(ENV_HOST, DEFAULT_HOST);
        let host = host_value
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host_value.clone()))?;

        let debug = lookup(ENV_DEBUG)
            .or_else(|| lookup(ENV_DEBUG_ALIAS))
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        let format = match lookup(ENV_LOG_FORMAT) {
            Some(value) => parse_log_format(&value)?,
            None => LogFormat::default(),
        };

        Ok(Self {
            http: HttpServerConfig { host, port },
            app: ApplicationConfig {
                name: var(ENV_APP_NAME, DEFAULT_APP_NAME),
                version: var(ENV_APP_VERSION, DEFAULT_APP_VERSION),
                environment: var(ENV_ENVIRONMENT, DEFAULT_ENVIRONMENT),
                debug,
            },
            kubernetes: KubernetesConfig {
                namespace: var(ENV_KUBERNETES_NAMESPACE, DEFAULT_KUBERNETES_NAMESPACE),
                pod_name: var(ENV_POD_NAME, DEFAULT_POD_NAME),
                service_account: var(ENV_KUBERNETES_SERVICE_ACCOUNT, DEFAULT_SERVICE_ACCOUNT),
            },
            static_dir: var(ENV_STATIC_DIR, DEFAULT_STATIC_DIR),
            logging: LoggingConfig { format },
        })
    }

    /// Address the server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }

    /// Log filter to use when neither the CLI nor RUST_LOG provide one.
    pub fn default_log_filter(&self) -> &'static str {
        if self.app.debug {
            DEBUG_LOG_FILTER
        } else {
            DEFAULT_LOG_FILTER
        }
    }
}

/// A flag is on only when its value is "true", in any letter case.
fn parse_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn parse_log_format(value: &str) -> Result<LogFormat, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::InvalidLogFormat(value.to_string())),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },
    #[error("Invalid HOST address: {0:?}")]
    InvalidHost(String),
    #[error("Invalid LOG_FORMAT {0:?} (expected \"text\" or \"json\")")]
    InvalidLogFormat(String),
}
