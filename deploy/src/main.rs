use hypercert_deploy::deployer::FuelEnvironment;
use hypercert_deploy::error::Result;
use hypercert_deploy::logging::init_logging;
use hypercert_deploy::runner::run_tagged;
use hypercert_deploy::shared::config;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    let config = config()?;
    info!("Config: {:#?}", config);
    let env = FuelEnvironment::connect(&config).await?;
    let ran = run_tagged(&env, &config.tags).await?;
    info!("Finished {} task(s): {:?}", ran.len(), ran);
    Ok(())
}
