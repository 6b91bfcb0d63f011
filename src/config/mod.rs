// Configuration module entry point
// Loads layered configuration and owns the shared application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::Config;

/// Port used when neither the environment nor the config file set one
pub const DEFAULT_PORT: u16 = 5000;

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Precedence, lowest first: built-in defaults, the config file,
    /// `DUMMY_API_<SECTION>__<KEY>` environment variables, then the bare
    /// `PORT` variable.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        Self::load_with_port(config_path, std::env::var("PORT").ok())
    }

    fn load_with_port(
        config_path: &str,
        port_override: Option<String>,
    ) -> Result<Self, config::ConfigError> {
        let port_override = port_override
            .map(|p| {
                p.trim().parse::<u16>().map_err(|e| {
                    config::ConfigError::Message(format!("Invalid PORT value '{p}': {e}"))
                })
            })
            .transpose()?;

        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("DUMMY_API")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "dummy-api-server")?
            .set_default("http.enable_cors", true)?
            .set_override_option("server.port", port_override.map(i64::from))?
            .build()?;

        settings.try_deserialize()
    }

    /// Built-in defaults only, ignoring `PORT` and any config file
    #[cfg(test)]
    pub fn defaults() -> Self {
        Self::load_with_port("this-config-file-does-not-exist", None)
            .expect("built-in defaults must deserialize")
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
