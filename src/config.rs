use std::env;

/// Application configuration loaded from environment variables
#[derive(Clone, Debug)]
pub struct Config {
    /// Address the HTTP server binds to
    pub host: String,

    /// Port the HTTP server binds to
    pub port: u16,

    /// Maximum JSON payload size (in bytes)
    /// Default: 64KB (64 * 1024)
    pub max_payload_size: usize,

    /// Directory for the daily rolling log files
    pub log_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Optional environment variables:
    /// - HOST: Bind address (default: 127.0.0.1)
    /// - PORT: Bind port (default: 8080)
    /// - MAX_PAYLOAD_SIZE: Maximum request payload size in bytes (default: 65536 = 64KB)
    /// - LOG_DIR: Log directory (default: logs)
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("PORT must be a number between 0 and 65535, got {:?}", raw))?,
            None => 8080,
        };

        // Parse MAX_PAYLOAD_SIZE with default fallback
        let max_payload_size = lookup("MAX_PAYLOAD_SIZE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(64 * 1024); // Default: 64KB

        let log_dir = lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string());

        Ok(Config {
            host,
            port,
            max_payload_size,
            log_dir,
        })
    }
}
