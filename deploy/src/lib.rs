pub mod deployer;
pub mod environment;
pub mod error;
pub mod logging;
pub mod runner;
pub mod shared;
pub mod tasks;
