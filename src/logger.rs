use tracing_subscriber::{EnvFilter, fmt::time, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset or unparsable
fn default_directives() -> &'static str {
    if cfg!(debug_assertions) {
        "warn,boost_blitz=debug"
    } else {
        "warn,boost_blitz=info"
    }
}

/// Builds the filter from `RUST_LOG`, replacing the defaults entirely when set
fn filter_from(env: Option<&str>) -> EnvFilter {
    match env.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => {
            EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new(default_directives()))
        }
        None => EnvFilter::new(default_directives()),
    }
}

/// Installs the tracing subscriber for the game
///
/// `RUST_LOG` takes precedence over the built-in levels. Call once, early in
/// `main`.
pub fn init() -> anyhow::Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_timer(time::uptime()),
        )
        .with(filter_from(env.as_deref()))
        .try_init()?;

    Ok(())
}
