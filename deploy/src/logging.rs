use tracing_subscriber::EnvFilter;
use crate::error::Error;

/// Installs a stdout subscriber. `RUST_LOG` wins over the built-in `info` default.
pub fn init_logging() -> Result<(), Error> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hypercert_deploy=info,deploy=info,tools=info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
