use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "dog_profile=debug,info"
    } else {
        "dog_profile=info"
    }
}

/// `RUST_LOG` wins over the built-in directives.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

/// Bare event lines: no target, thread or source location.
fn fmt_layer<S>() -> fmt::Layer<S> {
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt_layer().compact())
        .init();
}

/// JSON lines for log collectors; same filter as the non-verbose CLI.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(fmt_layer().json())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_adds_debug_for_crate() {
        assert_eq!(default_directives(false), "dog_profile=info");
        assert_eq!(default_directives(true), "dog_profile=debug,info");
    }

    #[test]
    fn test_default_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directives(verbose)).is_ok());
        }
    }
}
