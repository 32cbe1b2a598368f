use std::sync::Once;

/// Our own events at info, everything else (macroquad, miniquad) at warn
pub const DEFAULT_FILTER: &str = "warn,isometric_life=info";

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// `env_logger` filter, e.g. "isometric_life=debug" to see every toggle
    /// and step. Overrides `RUST_LOG` when set.
    pub filter: Option<String>,
    /// Disable ANSI colors, for piping the log to a file
    pub plain: bool,
}

/// Filter to install: explicit config, then `RUST_LOG`, then the default
pub fn resolve_filter(configured: Option<String>, rust_log: Option<String>) -> String {
    configured
        .or(rust_log)
        .filter(|filter| !filter.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
}

static INIT: Once = Once::new();

/// Install env_logger for the session. Only the first call has an effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(config.filter, std::env::var("RUST_LOG").ok());
        let style = if config.plain {
            env_logger::WriteStyle::Never
        } else {
            env_logger::WriteStyle::Auto
        };

        let installed = env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(style)
            .try_init();
        match installed {
            Ok(()) => log::debug!("logging initialized with filter {filter:?}"),
            Err(err) => eprintln!("logger already installed: {err}"),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter_wins() {
        let filter = resolve_filter(Some("debug".into()), Some("error".into()));
        assert_eq!(filter, "debug");
    }

    #[test]
    fn test_rust_log_used_when_not_configured() {
        assert_eq!(resolve_filter(None, Some("isometric_life=trace".into())), "isometric_life=trace");
    }

    #[test]
    fn test_default_quiets_dependencies() {
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
        assert_eq!(resolve_filter(None, Some("  ".into())), DEFAULT_FILTER);
    }
}
