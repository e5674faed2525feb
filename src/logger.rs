use anyhow::Result;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Install the stderr subscriber. `RUST_LOG` overrides the default level,
/// which is `info`, or `debug` when `verbose` is set.
pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env()?,
        )
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
