//! Runtime settings, read from the environment once at startup.

/// Everything the server needs to bind, reach MongoDB, and configure its
/// middleware. Loaded once in `main` and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// MongoDB connection string (`MONGODB_URI`, required).
    pub mongodb_uri: String,
    /// Database name within the server (`MONGODB_DB`).
    pub mongodb_db: String,
    /// Origins the CORS layer will accept, from the comma-separated
    /// `CORS_ORIGINS` variable.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

impl ServerConfig {
    /// Read the configuration from the environment.
    ///
    /// Only `MONGODB_URI` is mandatory; everything else falls back to a
    /// local-development default (`0.0.0.0:8000`, database `fauna`,
    /// origin `http://localhost:5173`, 30s request timeout). Malformed
    /// numeric values abort startup rather than being silently replaced.
    pub fn from_env() -> Self {
        let mongodb_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");

        let port: u16 = env_or("PORT", "8000")
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            mongodb_uri,
            mongodb_db: env_or("MONGODB_DB", "fauna"),
            cors_origins,
            request_timeout_secs,
        }
    }
}
