use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;
use dotenvy::dotenv;
use fuels::crypto::SecretKey;
use fuels::prelude::{Provider, WalletUnlocked};
use tracing::debug;
use crate::error::ConfigError;

const PK_SUFFIX: &str = "_PK";
const DEFAULT_ARTIFACTS_DIR: &str = "out/release";

#[derive(Clone)]
pub struct Config {
    pub fuel_url: String,
    /// Private keys by named account, e.g. `DEPLOYER_PK` lands under `deployer`.
    pub account_keys: BTreeMap<String, String>,
    pub artifacts_dir: PathBuf,
    pub tags: Vec<String>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("fuel_url", &self.fuel_url)
            .field("accounts", &self.account_keys.keys().collect::<Vec<_>>())
            .field("artifacts_dir", &self.artifacts_dir)
            .field("tags", &self.tags)
            .finish()
    }
}

impl Config {
    pub fn from_vars<I, K, V>(vars: I) -> Result<Config, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut fuel_url = None;
        let mut artifacts_dir = None;
        let mut tags = Vec::new();
        let mut account_keys = BTreeMap::new();
        for (key, value) in vars {
            let (key, value) = (key.into(), value.into());
            match key.as_str() {
                "FUEL_URL" => fuel_url = Some(value),
                "ARTIFACTS_DIR" => artifacts_dir = Some(PathBuf::from(value)),
                "DEPLOY_TAGS" => tags = parse_tags(&value),
                _ => {
                    if let Some(name) = key.strip_suffix(PK_SUFFIX) {
                        if !name.is_empty() && !value.trim().is_empty() {
                            account_keys.insert(name.to_lowercase(), value);
                        }
                    }
                }
            }
        }
        Ok(Config {
            fuel_url: fuel_url.ok_or(ConfigError::MissingVar("FUEL_URL"))?,
            account_keys,
            artifacts_dir: artifacts_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_DIR)),
            tags,
        })
    }
}

fn parse_tags(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads `.env` when there is one, then the process environment.
pub fn config() -> Result<Config, ConfigError> {
    match dotenv() {
        Ok(path) => debug!("Loaded {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file, using process environment"),
        Err(e) => return Err(e.into()),
    }
    Config::from_vars(std::env::vars())
}

pub async fn get_wallets(
    config: &Config
) -> Result<BTreeMap<String, WalletUnlocked>, ConfigError> {
    let provider = Provider::connect(&config.fuel_url)
        .await
        .map_err(|source| ConfigError::Connect { url: config.fuel_url.clone(), source })?;
    config
        .account_keys
        .iter()
        .map(|(name, pk)| {
            let secret = SecretKey::from_str(pk).map_err(|e| ConfigError::InvalidKey {
                name: name.clone(),
                reason: e.to_string(),
            })?;
            let wallet = WalletUnlocked::new_from_private_key(secret, Some(provider.clone()));
            Ok::<_, ConfigError>((name.clone(), wallet))
        })
        .collect()
}
