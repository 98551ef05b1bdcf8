/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Base URL of the image-generation service.
    pub imagegen_url: String,
    /// Timeout for a single image-generation call, in seconds (default: `60`).
    pub imagegen_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                        |
    /// |-------------------------|--------------------------------|
    /// | `HOST`                  | `0.0.0.0`                      |
    /// | `PORT`                  | `3000`                         |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`        |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                           |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                           |
    /// | `IMAGEGEN_URL`          | `http://localhost:8080/api/ai` |
    /// | `IMAGEGEN_TIMEOUT_SECS` | `60`                           |
    ///
    /// `DATABASE_URL` is required and read separately at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let imagegen_url =
            std::env::var("IMAGEGEN_URL").unwrap_or_else(|_| "http://localhost:8080/api/ai".into());

        let imagegen_timeout_secs: u64 = std::env::var("IMAGEGEN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("IMAGEGEN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            imagegen_url,
            imagegen_timeout_secs,
        }
    }
}
