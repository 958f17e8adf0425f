use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "upc_image_scraper=debug,info"
    } else {
        "upc_image_scraper=info,warn"
    }
}

/// Installs the console subscriber. `RUST_LOG` overrides the default directive.
/// Calling it twice is a no-op.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    if let Err(e) = result {
        tracing::debug!("Logger already initialised: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_parses() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
        assert!(default_directive(true).contains("debug"));
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_cli_logger(false);
        init_cli_logger(true);
    }
}
