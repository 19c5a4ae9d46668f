use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const fn base_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Build the log filter. `RUST_LOG` (if set and valid) takes precedence.
/// Otherwise, -v/-vv map to "debug"/"trace".
///
/// # Errors
/// Returns an error if neither `RUST_LOG` nor the verbosity level yields a valid filter.
pub fn build_filter(verbosity: u8, rust_log: Option<&str>) -> Result<EnvFilter> {
    let base = base_level(verbosity);
    if let Some(directives) = rust_log
        && let Ok(filter) = EnvFilter::try_new(directives)
    {
        return Ok(filter);
    }
    EnvFilter::try_new(base).context("invalid log filter")
}

/// Initialize tracing on stderr, leaving stdout to the diff output.
///
/// # Errors
/// Returns an error if the log filter cannot be built.
pub fn init_tracing(verbosity: u8) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*};

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter_layer = build_filter(verbosity, rust_log.as_deref())?;
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // Allow re-init to be a no-op in tests
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(build_filter(0, None).unwrap().to_string(), "info");
        assert_eq!(build_filter(1, None).unwrap().to_string(), "debug");
        assert_eq!(build_filter(3, None).unwrap().to_string(), "trace");
    }

    #[test]
    fn rust_log_overrides_verbosity() {
        let filter = build_filter(2, Some("warn")).unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn invalid_rust_log_falls_back() {
        let filter = build_filter(1, Some("git_lastdiff=loudest")).unwrap();
        assert_eq!(filter.to_string(), "debug");
    }
}
