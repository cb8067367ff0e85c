use tracing::info;
use crate::environment::{AccountAddress, DeployOptions, RuntimeEnvironment};
use crate::error::TaskError;

pub const ID: &str = "000_hypercert_svg";
pub const CONTRACT_NAME: &str = "HypercertSVG";
pub const DEPLOYER: &str = "deployer";
pub const TAGS: &[&str] = &["local"];

/// Deploys `HypercertSVG` from the `deployer` named account.
///
/// Account lookup happens before anything is sent, so a missing deployer never
/// reaches the chain. Errors from the environment are passed through as-is.
pub async fn deploy<E: RuntimeEnvironment>(env: &E) -> Result<(), TaskError> {
    let accounts = env.named_accounts().await.map_err(|source| TaskError::AccountResolution {
        name: DEPLOYER.to_string(),
        reason: "named accounts unavailable".to_string(),
        source: Some(source),
    })?;
    let deployer = match accounts.get(DEPLOYER) {
        Some(address) if !address.is_unset() => address.clone(),
        Some(_) => {
            return Err(TaskError::AccountResolution {
                name: DEPLOYER.to_string(),
                reason: "address is empty".to_string(),
                source: None,
            })
        }
        None => {
            return Err(TaskError::AccountResolution {
                name: DEPLOYER.to_string(),
                reason: "not present in named accounts".to_string(),
                source: None,
            })
        }
    };
    info!(?deployer, "Deploying {} contract...", CONTRACT_NAME);
    let result = env
        .deploy(CONTRACT_NAME, DeployOptions { from: deployer })
        .await
        .map_err(|source| TaskError::DeploymentInvocation {
            contract: CONTRACT_NAME.to_string(),
            source,
        })?;
    info!(contract_id = ?result.contract_id, "{} deployed", result.contract);
    Ok(())
}
