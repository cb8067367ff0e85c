use std::collections::HashMap;
use std::fmt::Debug;
use fuels::prelude::ContractId;
use fuels::types::bech32::Bech32Address;
use crate::error::EnvironmentError;

/// An account identity as handed out by a runtime environment.
pub trait AccountAddress: Clone + Debug {
    /// True when the identity carries no usable value and must not sign anything.
    fn is_unset(&self) -> bool;
}

impl AccountAddress for String {
    fn is_unset(&self) -> bool {
        self.trim().is_empty()
    }
}

impl AccountAddress for Bech32Address {
    fn is_unset(&self) -> bool {
        self.hash.iter().all(|b| *b == 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployOptions<A> {
    pub from: A,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployResult {
    pub contract: String,
    pub contract_id: ContractId,
}

/// What a deployment task gets to work with: a registry of named accounts
/// and a way to publish contracts from one of them.
#[allow(async_fn_in_trait)]
pub trait RuntimeEnvironment {
    type Address: AccountAddress;

    async fn named_accounts(&self) -> Result<HashMap<String, Self::Address>, EnvironmentError>;

    async fn deploy(
        &self,
        contract: &str,
        options: DeployOptions<Self::Address>,
    ) -> Result<DeployResult, EnvironmentError>;
}
