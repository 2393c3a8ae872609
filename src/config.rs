//! Service configuration from the environment.

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_FILTER: &str = "stair_engineer=debug,tower_http=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Socket address to listen on
    pub bind_addr: String,
    /// Tracing filter used when `RUST_LOG` is unset
    pub default_log_filter: String,
}

impl Config {
    /// Read configuration from the process environment (after `.env` is loaded).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup("BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Self {
            bind_addr,
            default_log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
