use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Handle on the installed subscriber's filter.
///
/// Hosts start logging before their own configuration is read, then swap in
/// the configured filter with [`set_default_filter`](Self::set_default_filter).
pub struct TracingHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl TracingHandle {
    /// Replace the fallback filter. A valid `RUST_LOG` keeps precedence.
    pub fn set_default_filter(&self, default_filter: &str) -> Result<(), reload::Error> {
        if self.from_env {
            return Ok(());
        }
        self.filter.reload(build_filter(None, default_filter))?;
        tracing::debug!(filter = default_filter, "Log filter updated");
        Ok(())
    }
}

/// Initialise the global `tracing` subscriber with a standard `fmt` layer.
///
/// Respects the `RUST_LOG` environment variable and falls back to
/// `default_filter` when it is unset or unparsable. Output goes to stderr so
/// it never mixes with rendered panels on stdout.
///
/// Call this once, at the very start of `main`, before any tracing macro.
pub fn init_tracing(default_filter: &str) -> TracingHandle {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let from_env = env
        .as_deref()
        .is_some_and(|directives| EnvFilter::try_new(directives).is_ok());
    let (filter, handle) = reload::Layer::new(build_filter(env.as_deref(), default_filter));

    Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    TracingHandle {
        filter: handle,
        from_env,
    }
}

fn build_filter(env: Option<&str>, default_filter: &str) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(default_filter).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::build_filter;

    fn level(env: Option<&str>, default_filter: &str) -> Option<LevelFilter> {
        build_filter(env, default_filter).max_level_hint()
    }

    #[test]
    fn env_directives_win_over_default() {
        assert_eq!(level(Some("warn"), "debug"), Some(LevelFilter::WARN));
    }

    #[test]
    fn invalid_env_falls_back_to_default() {
        assert_eq!(level(Some("sysconsole=loud"), "debug"), Some(LevelFilter::DEBUG));
        assert_eq!(level(None, "debug"), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn invalid_default_falls_back_to_info() {
        assert_eq!(level(None, "sysconsole=loud"), Some(LevelFilter::INFO));
    }
}
