use hypercert_deploy::deployer::FuelEnvironment;
use hypercert_deploy::environment::RuntimeEnvironment;
use hypercert_deploy::error::Result;
use hypercert_deploy::logging::init_logging;
use hypercert_deploy::runner::select;
use hypercert_deploy::shared::config;
use tracing::info;

/// Dry run: shows what `deploy` would use and run, without sending anything.
#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    let config = config()?;
    let env = FuelEnvironment::connect(&config).await?;

    let mut accounts: Vec<_> = env.named_accounts().await?.into_iter().collect();
    accounts.sort_by(|a, b| a.0.cmp(&b.0));
    for (name, address) in accounts {
        info!("{}: {}", name, address);
    }

    for task in select(&config.tags) {
        info!(
            "{} [{}] -> {}",
            task.id(),
            task.tags().join(", "),
            env.artifact_path(task.contract()).display(),
        );
    }
    Ok(())
}
