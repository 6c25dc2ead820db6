use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the per-category seen-URL files.
    pub data_dir: String,
    /// Path to a rules JSON file. `None` uses the bundled style guide.
    pub rules_path: Option<String>,
    /// Listen address for the HTTP server.
    pub bind_addr: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `SEEN_DATA_DIR`: directory for seen-URL state
    ///
    /// Optional:
    /// - `RULES_PATH`: rules JSON file (omit to use the bundled rules)
    /// - `BIND_ADDR`: listen address (default `127.0.0.1:8080`)
    pub fn from_env() -> Result<Self, AppError> {
        let data_dir = std::env::var("SEEN_DATA_DIR").map_err(|_| {
            AppError::Config("SEEN_DATA_DIR environment variable is required".to_string())
        })?;

        let rules_path = std::env::var("RULES_PATH").ok();
        if let Some(path) = &rules_path {
            if !std::path::Path::new(path).exists() {
                return Err(AppError::Config(format!("rules file not found at {path}")));
            }
        }

        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        Ok(Self {
            data_dir,
            rules_path,
            bind_addr,
        })
    }
}
