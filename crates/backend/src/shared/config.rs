use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::dashboards::d402_sales_analytics::CatalogProduct;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub uploads: UploadsConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsConfig {
    /// Empty list or "*" allows any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UploadsConfig {
    #[serde(default = "default_uploads_dir")]
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    /// Longest accepted `/api/sales` range, in days
    #[serde(default = "default_max_range_days")]
    pub max_range_days: u32,
    #[serde(default = "default_summary_window_days")]
    pub summary_window_days: u32,
    /// Replaces the built-in product table when set
    #[serde(default)]
    pub catalog: Option<Vec<CatalogProduct>>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_uploads_dir() -> String {
    "uploads".to_string()
}

fn default_max_range_days() -> u32 {
    3660
}

fn default_summary_window_days() -> u32 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_uploads_dir(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            max_range_days: default_max_range_days(),
            summary_window_days: default_summary_window_days(),
            catalog: None,
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port)
            .parse::<SocketAddr>()
            .map_err(|e| anyhow::anyhow!("invalid server address {}: {}", self.server.host, e))?;
        Ok(addr)
    }

    /// `PORT` from the environment takes precedence over the file
    fn apply_env_overrides(mut self) -> anyhow::Result<Self> {
        if let Ok(port) = std::env::var("PORT") {
            self.server.port = port
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("invalid PORT {:?}: {}", port, e))?;
        }
        Ok(self)
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 5000

[cors]
allowed_origins = ["http://localhost:3000"]

[uploads]
dir = "uploads"

[analytics]
max_range_days = 3660
summary_window_days = 30
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents)?.apply_env_overrides();
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)?.apply_env_overrides()
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.analytics.max_range_days == 0 {
        anyhow::bail!("analytics.max_range_days must be at least 1");
    }
    Ok(config)
}

/// Resolve a configured path.
/// Relative paths are taken relative to the executable directory.
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    // Fallback: use relative to current directory
    PathBuf::from(configured)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.uploads.dir, "uploads");
        assert_eq!(config.analytics.max_range_days, 3660);
        assert_eq!(config.analytics.summary_window_days, 30);
        assert!(config.analytics.catalog.is_none());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.cors.allowed_origins.is_empty());
        assert_eq!(config.analytics.summary_window_days, 30);
    }

    #[test]
    fn test_catalog_override() {
        let config = parse_config(
            r#"
            [analytics]
            max_range_days = 90

            [[analytics.catalog]]
            id = 1
            name = "Opera"
            base_units = 40

            [[analytics.catalog]]
            id = 2
            name = "Kemi"
            base_units = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.analytics.max_range_days, 90);
        let catalog = config.analytics.catalog.unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[1], CatalogProduct::new(2, "Kemi", 25));
    }

    #[test]
    fn test_zero_range_cap_is_rejected() {
        assert!(parse_config("[analytics]\nmax_range_days = 0\n").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = parse_config("[server]\nhost = \"127.0.0.1\"\nport = 8080\n").unwrap();
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let absolute = if cfg!(windows) { "C:\\data\\uploads" } else { "/data/uploads" };
        assert_eq!(resolve_path(absolute), PathBuf::from(absolute));
    }
}
