//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins over the configured `server.log_level`. Production emits
//! JSON lines; everything else gets the human-readable formatter.

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Fallback directive when neither `RUST_LOG` nor the config parses.
const FALLBACK_FILTER: &str = "info";

/// Install the global subscriber. Call once, at startup.
pub fn init_tracing(server: &ServerConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&server.log_level))
        .with_target(true);

    if server.is_production() {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn configured_directive_is_used() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = env_filter("warn,portal_ai=debug");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn invalid_directive_falls_back() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = env_filter("portal_ai=notalevel");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
