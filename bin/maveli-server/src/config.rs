//! Server configuration, loaded from environment variables at startup.

/// Runtime configuration for maveli-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:3000"`).
    pub bind_address: String,

    /// Database URL for the durable ledger, e.g. `"sqlite://maveli.db"`.
    /// When unset the server runs with the volatile in-memory ledger,
    /// which resets on restart.
    pub database_url: Option<String>,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins; unset means wildcard.
    pub cors_allowed_origins: Option<String>,

    /// Serve Swagger UI at `/swagger-ui` (default: enabled; set
    /// `MAVELI_ENABLE_SWAGGER=false` in production).
    pub enable_swagger: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("MAVELI_BIND", "0.0.0.0:3000"),
            database_url: std::env::var("MAVELI_DATABASE_URL").ok(),
            log_level: env_or("MAVELI_LOG", "info"),
            log_json: std::env::var("MAVELI_LOG_JSON")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            cors_allowed_origins: std::env::var("MAVELI_CORS_ORIGINS").ok(),
            enable_swagger: std::env::var("MAVELI_ENABLE_SWAGGER")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
