use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use fuels::prelude::{
    Contract,
    ContractId,
    LoadConfiguration,
    TxPolicies,
    WalletUnlocked,
};
use fuels::accounts::ViewOnlyAccount;
use fuels::types::bech32::Bech32Address;
use rand::Rng;
use tracing::info;
use crate::environment::{DeployOptions, DeployResult, RuntimeEnvironment};
use crate::error::{ConfigError, EnvironmentError};
use crate::shared::{get_wallets, Config};

/// Runtime environment backed by a Fuel node: one unlocked wallet per named
/// account, contract binaries read from `artifacts_dir`.
pub struct FuelEnvironment {
    accounts: BTreeMap<String, WalletUnlocked>,
    artifacts_dir: PathBuf,
}

impl FuelEnvironment {
    pub async fn connect(config: &Config) -> Result<FuelEnvironment, ConfigError> {
        let accounts = get_wallets(config).await?;
        for (name, wallet) in &accounts {
            info!("Named account {}: {}", name, wallet.address());
        }
        Ok(FuelEnvironment {
            accounts,
            artifacts_dir: config.artifacts_dir.clone(),
        })
    }

    pub fn from_wallets(
        accounts: BTreeMap<String, WalletUnlocked>,
        artifacts_dir: impl Into<PathBuf>,
    ) -> FuelEnvironment {
        FuelEnvironment {
            accounts,
            artifacts_dir: artifacts_dir.into(),
        }
    }

    pub fn artifact_path(&self, contract: &str) -> PathBuf {
        self.artifacts_dir.join(format!("{}.bin", contract))
    }

    fn signer(&self, address: &Bech32Address) -> Option<&WalletUnlocked> {
        self.accounts.values().find(|w| w.address() == address)
    }
}

impl RuntimeEnvironment for FuelEnvironment {
    type Address = Bech32Address;

    async fn named_accounts(&self) -> Result<HashMap<String, Bech32Address>, EnvironmentError> {
        Ok(self
            .accounts
            .iter()
            .map(|(name, wallet)| (name.clone(), wallet.address().clone()))
            .collect())
    }

    async fn deploy(
        &self,
        contract: &str,
        options: DeployOptions<Bech32Address>,
    ) -> Result<DeployResult, EnvironmentError> {
        let wallet = self
            .signer(&options.from)
            .ok_or_else(|| EnvironmentError::UnknownSender(options.from.to_string()))?;
        let path = self.artifact_path(contract);
        let contract_id = _deploy(wallet, &path).await?;
        Ok(DeployResult {
            contract: contract.to_string(),
            contract_id,
        })
    }
}

async fn _deploy(wallet: &WalletUnlocked, binary: &Path) -> Result<ContractId, EnvironmentError> {
    if !binary.is_file() {
        return Err(EnvironmentError::MissingArtifact(binary.to_path_buf()));
    }
    let salt = rand::thread_rng().gen::<[u8; 32]>();
    let id = Contract::load_from(binary, LoadConfiguration::default())?
        .with_salt(salt)
        .deploy(wallet, TxPolicies::default())
        .await?
        .into();
    Ok(id)
}
