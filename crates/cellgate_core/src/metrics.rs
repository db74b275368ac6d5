//! Structured logging setup.

use tracing_subscriber::EnvFilter;

/// Installs a global fmt subscriber.
///
/// Defaults to `info`; `RUST_LOG` overrides it. Calling this more than once
/// is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_twice() {
        init_logging();
        init_logging();
        tracing::info!("logging initialized");
    }
}
