use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub vmh: VmhConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Tuning for the VMH record store client.
///
/// Threaded explicitly into the client constructor so tests can point the
/// transport at a fake server and fake artifact base paths.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VmhConfig {
    /// Paginated microbe record store endpoint.
    pub api_base_url: String,
    /// Base path under which `.mat` reconstruction artifacts are published.
    pub mat_base_url: String,
    /// Base path under which fixed SBML artifacts are published.
    pub sbml_base_url: String,
    /// Page size cap sent with every record store query.
    pub page_size: u32,
    /// Per-request timeout for upstream calls, in seconds.
    pub request_timeout_secs: u64,
    /// Freshness window for cached per-query resolutions, in seconds.
    pub cache_ttl_secs: u64,
    /// Maximum number of cached query resolutions.
    pub cache_capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for VmhConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://www.vmh.life/_api/microbes/".to_string(),
            mat_base_url:
                "https://www.vmh.life/files/reconstructions/AGORA2/version2.01/mat_files/individual_reconstructions/"
                    .to_string(),
            sbml_base_url:
                "https://www.vmh.life/files/reconstructions/AGORA2/version2.01/sbml_files_fixed/"
                    .to_string(),
            page_size: 50,
            request_timeout_secs: 30,
            cache_ttl_secs: 1800,
            cache_capacity: 10_000,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
