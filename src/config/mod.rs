// Configuration module entry point
// Loads the immutable process configuration once at startup

mod types;

use std::net::SocketAddr;

pub use types::{
    Config, CorsConfig, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig,
    ServiceConfig, StaticFilesConfig,
};

/// Default configuration file (extension resolved by the `config` crate)
pub const DEFAULT_CONFIG_PATH: &str = "config";

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";

pub const DEFAULT_PORT: u16 = 8080;

/// Directory holding the bundled converter page, relative to the working directory
pub const DEFAULT_ROOT_DIR: &str = "public";

impl Config {
    /// Load configuration from `config.toml` (optional), `SERVER_*` variables
    /// and the `PORT` override
    pub fn load() -> Result<Self, config::ConfigError> {
        let port = std::env::var(PORT_ENV).ok();
        Self::load_from(DEFAULT_CONFIG_PATH, port.as_deref())
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// An empty `port_override` counts as absent.
    pub fn load_from(
        config_path: &str,
        port_override: Option<&str>,
    ) -> Result<Self, config::ConfigError> {
        let port_override = port_override
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(ToString::to_string);

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("SERVER")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("service.name", "protobuf-msg-reader")?
            .set_default("service.health_path", "/health")?
            .set_default("static_files.root_dir", DEFAULT_ROOT_DIR)?
            .set_default("static_files.index_file", "index.html")?
            .set_default("static_files.directory_listing", true)?
            .set_default("http.cors.allow_origin", "*")?
            .set_default("http.cors.allow_methods", "GET, POST, OPTIONS")?
            .set_default("http.cors.allow_headers", "Content-Type")?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive", true)?
            .set_default("performance.connection_timeout", 0)?
            .set_override_option("server.port", port_override)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
