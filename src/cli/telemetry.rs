use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

#[must_use]
pub fn level_from_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize logging.
///
/// The default level comes from the CLI verbosity count, `RUST_LOG` still wins
/// when set.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(verbosity: u8) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let env_filter = EnvFilter::builder()
        .with_default_directive(level_from_verbosity(verbosity).into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("tokio=error".parse()?);

    let subscriber = Registry::default().with(fmt_layer).with(env_filter);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(level_from_verbosity(0), Level::ERROR);
        assert_eq!(level_from_verbosity(1), Level::WARN);
        assert_eq!(level_from_verbosity(2), Level::INFO);
        assert_eq!(level_from_verbosity(3), Level::DEBUG);
        assert_eq!(level_from_verbosity(4), Level::TRACE);
        assert_eq!(level_from_verbosity(255), Level::TRACE);
    }
}
