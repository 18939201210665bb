//! Network Load Balancer module
//!
//! One-shot reconciliation of an Ionos Cloud Network Load Balancer towards a
//! declared state:
//! - `present`: create the balancer unless one of that name already exists
//! - `update`: patch an existing balancer, by id or by name
//! - `absent`: delete the balancer if it exists
//!
//! The run validates its parameters, issues at most one mutating API call,
//! optionally blocks until the provider finishes it, prints the result as
//! JSON on stdout, and exits. Failures print `{"failed": true, "msg": ...}`
//! and exit non-zero.

mod config;
mod error;
mod output;
mod reconciler;
#[cfg(test)]
mod test_utils;

use crate::config::{ModuleConfig, State};
use crate::error::ModuleError;
use crate::output::{ModuleFailure, ModuleResult};
use clap::Parser;
use ionos_client::{IonosClient, IonosClientTrait, DEFAULT_API_URL};
use tracing::info;

async fn run(config: &ModuleConfig) -> Result<ModuleResult, ModuleError> {
    config.validate()?;

    let api_url = config
        .api_url
        .clone()
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let client = IonosClient::new(api_url, config.username.clone(), config.password.clone())?;

    info!(
        "Reconciling Network Load Balancer towards state {:?} in datacenter {}",
        config.state,
        config.datacenter_id()?
    );

    let client: &dyn IonosClientTrait = &client;
    match config.state {
        State::Present => reconciler::ensure_present(client, config).await,
        State::Update => reconciler::ensure_updated(client, config).await,
        State::Absent => reconciler::ensure_absent(client, config).await,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ModuleConfig::parse();

    match run(&config).await {
        Ok(result) => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("failed to serialize result: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            let failure = ModuleFailure::new(config.state, &e);
            match serde_json::to_string_pretty(&failure) {
                Ok(json) => println!("{}", json),
                Err(_) => eprintln!("{}", failure.msg),
            }
            std::process::exit(1);
        }
    }
}
