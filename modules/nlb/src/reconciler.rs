//! Network Load Balancer reconciliation.
//!
//! One fetch-decide-act cycle per invocation. Each declared state maps to
//! exactly one remote mutating call at most:
//!
//! - `present`: create unless a balancer of that name already exists
//! - `update`: patch by explicit id, else by first name match; never creates
//! - `absent`: delete by id-or-name if resolvable, else succeed unchanged
//!
//! All scans are first-match-wins over the provider's returned ordering.
//! The provider does not guarantee name uniqueness and neither do we; the
//! first of several duplicates is silently picked, which typically means
//! the oldest since the provider lists in creation order.

use crate::config::ModuleConfig;
use crate::error::ModuleError;
use crate::output::{Action, ModuleResult};
use ionos_client::{
    parse_request_id, IonosClientTrait, NetworkLoadBalancer, NetworkLoadBalancerCreate,
};
use std::time::Duration;
use tracing::{debug, info};

/// Resolve a balancer id from an identity string that may be either a name
/// or an id. First match in collection order wins; no uniqueness check.
pub fn locate(items: &[NetworkLoadBalancer], identity: &str) -> Option<String> {
    items
        .iter()
        .find(|nlb| identity == nlb.properties.name || identity == nlb.id)
        .map(|nlb| nlb.id.clone())
}

/// Ensure a Network Load Balancer of the requested name exists.
///
/// A bare name match short-circuits as already-satisfied, without comparing
/// the remaining properties; a name hit with divergent LANs or IPs still
/// reports `changed=false`. Callers that want the properties enforced use
/// `update` instead.
pub async fn ensure_present(
    client: &dyn IonosClientTrait,
    config: &ModuleConfig,
) -> Result<ModuleResult, ModuleError> {
    let datacenter_id = config.datacenter_id()?;
    let properties = config.properties()?;

    let list = client.list_network_load_balancers(datacenter_id, 2).await?;
    if let Some(existing) = list
        .items
        .iter()
        .find(|nlb| nlb.properties.name == properties.name)
    {
        info!(
            "Network Load Balancer {} already exists (ID: {})",
            properties.name, existing.id
        );
        return Ok(ModuleResult::with_resource(
            Action::Create,
            false,
            existing.clone(),
        ));
    }

    let response = client
        .create_network_load_balancer(datacenter_id, NetworkLoadBalancerCreate { properties })
        .await?;
    await_completion(client, response.location.as_deref(), config).await?;

    info!("Created Network Load Balancer {}", response.body.id);
    Ok(ModuleResult::with_resource(Action::Create, true, response.body))
}

/// Ensure an existing Network Load Balancer matches the requested properties.
///
/// An explicit id skips the list scan entirely. The patch carries the full
/// property set; optional fields the caller left unset are sent as absent,
/// not merged from the remote resource. A missing target is an error, this
/// path never creates.
pub async fn ensure_updated(
    client: &dyn IonosClientTrait,
    config: &ModuleConfig,
) -> Result<ModuleResult, ModuleError> {
    let datacenter_id = config.datacenter_id()?;
    let properties = config.properties()?;

    let target_id = match &config.network_load_balancer_id {
        Some(id) => Some(id.clone()),
        None => {
            let list = client.list_network_load_balancers(datacenter_id, 2).await?;
            list.items
                .iter()
                .find(|nlb| nlb.properties.name == properties.name)
                .map(|nlb| nlb.id.clone())
        }
    };

    let Some(target_id) = target_id else {
        return Err(ModuleError::NotFound("The resource does not exist".to_string()));
    };

    let response = client
        .patch_network_load_balancer(datacenter_id, &target_id, properties)
        .await?;
    await_completion(client, response.location.as_deref(), config).await?;

    info!("Updated Network Load Balancer {}", target_id);
    Ok(ModuleResult::with_resource(Action::Update, true, response.body))
}

/// Ensure no Network Load Balancer matches the given id or name.
///
/// Deleting something that is already absent is a no-op success.
pub async fn ensure_absent(
    client: &dyn IonosClientTrait,
    config: &ModuleConfig,
) -> Result<ModuleResult, ModuleError> {
    let datacenter_id = config.datacenter_id()?;
    let identity = config.identity().ok_or_else(|| {
        ModuleError::InvalidConfig(
            "name parameter or network_load_balancer_id parameter are required \
             for deleting a Network Load Balancer"
                .to_string(),
        )
    })?;

    let list = client.list_network_load_balancers(datacenter_id, 5).await?;
    let Some(target_id) = locate(&list.items, identity) else {
        debug!("No Network Load Balancer matches '{}', nothing to delete", identity);
        return Ok(ModuleResult::with_id(Action::Delete, false, None));
    };

    let response = client
        .delete_network_load_balancer(datacenter_id, &target_id)
        .await?;
    await_completion(client, response.location.as_deref(), config).await?;

    info!("Deleted Network Load Balancer {}", target_id);
    Ok(ModuleResult::with_id(Action::Delete, true, Some(target_id)))
}

/// Block on the asynchronous request behind a mutating response, if the
/// caller opted into waiting.
///
/// When `wait` is false this is a no-op and the returned resource reflects
/// submission-time state, which may still be provisioning. The remote
/// mutation has already been issued either way; a timeout or failure here
/// fails the run but rolls nothing back.
async fn await_completion(
    client: &dyn IonosClientTrait,
    location: Option<&str>,
    config: &ModuleConfig,
) -> Result<(), ModuleError> {
    if !config.wait {
        return Ok(());
    }

    let location = location.ok_or(ModuleError::MissingLocation)?;
    let request_id = parse_request_id(location)?;
    debug!("Waiting up to {}s for request {}", config.wait_timeout, request_id);
    client
        .wait_for_completion(&request_id, Duration::from_secs(config.wait_timeout))
        .await?;
    Ok(())
}
