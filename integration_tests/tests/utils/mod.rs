use std::collections::HashMap;
use std::sync::Mutex;
use fuels::prelude::ContractId;
use hypercert_deploy::environment::{DeployOptions, DeployResult, RuntimeEnvironment};
use hypercert_deploy::error::EnvironmentError;

pub type DeployCall = (String, DeployOptions<String>);

/// Environment that records every deploy request instead of sending it.
#[derive(Default)]
pub struct MockEnvironment {
    accounts: HashMap<String, String>,
    accounts_error: Option<String>,
    deploy_error: Option<String>,
    calls: Mutex<Vec<DeployCall>>,
}

impl MockEnvironment {
    pub fn with_accounts(accounts: HashMap<String, String>) -> MockEnvironment {
        MockEnvironment {
            accounts,
            ..Default::default()
        }
    }

    pub fn failing_accounts(reason: &str) -> MockEnvironment {
        MockEnvironment {
            accounts_error: Some(reason.to_string()),
            ..Default::default()
        }
    }

    pub fn rejecting_deploys(mut self, reason: &str) -> MockEnvironment {
        self.deploy_error = Some(reason.to_string());
        self
    }

    pub fn calls(&self) -> Vec<DeployCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl RuntimeEnvironment for MockEnvironment {
    type Address = String;

    async fn named_accounts(&self) -> Result<HashMap<String, String>, EnvironmentError> {
        match &self.accounts_error {
            Some(reason) => Err(EnvironmentError::Other(reason.clone())),
            None => Ok(self.accounts.clone()),
        }
    }

    async fn deploy(
        &self,
        contract: &str,
        options: DeployOptions<String>,
    ) -> Result<DeployResult, EnvironmentError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((contract.to_string(), options));
        if let Some(reason) = &self.deploy_error {
            return Err(EnvironmentError::Other(reason.clone()));
        }
        Ok(DeployResult {
            contract: contract.to_string(),
            contract_id: ContractId::new([calls.len() as u8; 32]),
        })
    }
}
