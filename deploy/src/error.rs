use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    MissingVar(&'static str),
    #[error("invalid private key for named account `{name}`: {reason}")]
    InvalidKey { name: String, reason: String },
    #[error("failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: fuels::types::errors::Error,
    },
}

/// Failures raised by a runtime environment while serving a task.
#[derive(Error, Debug)]
pub enum EnvironmentError {
    #[error("no signer available for sender {0}")]
    UnknownSender(String),
    #[error("contract artifact not found: {}", .0.display())]
    MissingArtifact(PathBuf),
    #[error(transparent)]
    Fuels(#[from] fuels::types::errors::Error),
    /// Failures raised by environments that are not backed by a Fuel node.
    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum TaskError {
    #[error("failed to resolve named account `{name}`: {reason}")]
    AccountResolution {
        name: String,
        reason: String,
        #[source]
        source: Option<EnvironmentError>,
    },
    #[error("deployment of `{contract}` failed: {source}")]
    DeploymentInvocation {
        contract: String,
        #[source]
        source: EnvironmentError,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
    #[error("task `{id}` failed: {source}")]
    Task {
        id: &'static str,
        #[source]
        source: TaskError,
    },
    #[error("failed to install log subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
