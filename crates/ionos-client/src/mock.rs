//! Mock IonosClient for unit testing
//!
//! This module provides a mock implementation of IonosClientTrait that can be
//! used in unit tests without a reachable Cloud API. Resources are kept in
//! insertion order per datacenter so first-match-wins scans behave exactly
//! like they do against the provider, and every mutating call is recorded so
//! tests can assert exact call counts and payloads.

use crate::error::IonosError;
use crate::ionos_trait::IonosClientTrait;
use crate::models::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

/// Mock IonosClient for testing
#[derive(Debug, Clone)]
pub struct MockIonosClient {
    base_url: String,
    // Per-datacenter stores, insertion order preserved
    balancers: Arc<Mutex<HashMap<String, Vec<NetworkLoadBalancer>>>>,
    // Request states keyed by request id; unknown ids read as Done
    request_states: Arc<Mutex<HashMap<String, RequestState>>>,
    // Recorded calls for assertions
    list_calls: Arc<Mutex<Vec<(String, u32)>>>,
    create_calls: Arc<Mutex<Vec<(String, NetworkLoadBalancerCreate)>>>,
    patch_calls: Arc<Mutex<Vec<(String, String, NetworkLoadBalancerProperties)>>>,
    delete_calls: Arc<Mutex<Vec<(String, String)>>>,
    wait_calls: Arc<Mutex<Vec<String>>>,
    // When set, mutating responses carry no Location header
    omit_locations: bool,
    // When set, the next wait fails with this request state
    wait_outcome: Arc<Mutex<Option<RequestState>>>,
}

impl MockIonosClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            balancers: Arc::new(Mutex::new(HashMap::new())),
            request_states: Arc::new(Mutex::new(HashMap::new())),
            list_calls: Arc::new(Mutex::new(Vec::new())),
            create_calls: Arc::new(Mutex::new(Vec::new())),
            patch_calls: Arc::new(Mutex::new(Vec::new())),
            delete_calls: Arc::new(Mutex::new(Vec::new())),
            wait_calls: Arc::new(Mutex::new(Vec::new())),
            omit_locations: false,
            wait_outcome: Arc::new(Mutex::new(None)),
        }
    }

    /// Drop the Location header from all mutating responses (for test setup)
    #[must_use]
    pub fn without_locations(mut self) -> Self {
        self.omit_locations = true;
        self
    }

    /// Make every subsequent wait observe the given request state (for test setup)
    pub fn set_wait_outcome(&self, state: RequestState) {
        *self.wait_outcome.lock().unwrap() = Some(state);
    }

    /// Add a Network Load Balancer to a datacenter's store (for test setup)
    pub fn add_network_load_balancer(&self, datacenter_id: &str, nlb: NetworkLoadBalancer) {
        self.balancers
            .lock()
            .unwrap()
            .entry(datacenter_id.to_string())
            .or_default()
            .push(nlb);
    }

    /// Build a stored resource from properties, with a generated id (for test setup)
    pub fn make_network_load_balancer(
        &self,
        properties: NetworkLoadBalancerProperties,
    ) -> NetworkLoadBalancer {
        let id = Uuid::new_v4().to_string();
        NetworkLoadBalancer {
            href: Some(format!("{}/networkloadbalancers/{}", self.base_url, id)),
            id,
            resource_type: Some("networkloadbalancer".to_string()),
            metadata: Some(serde_json::json!({"state": "AVAILABLE"})),
            properties,
        }
    }

    /// Recorded list calls: (datacenter_id, depth)
    pub fn list_calls(&self) -> Vec<(String, u32)> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Recorded create calls: (datacenter_id, body)
    pub fn create_calls(&self) -> Vec<(String, NetworkLoadBalancerCreate)> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Recorded patch calls: (datacenter_id, network_load_balancer_id, properties)
    pub fn patch_calls(&self) -> Vec<(String, String, NetworkLoadBalancerProperties)> {
        self.patch_calls.lock().unwrap().clone()
    }

    /// Recorded delete calls: (datacenter_id, network_load_balancer_id)
    pub fn delete_calls(&self) -> Vec<(String, String)> {
        self.delete_calls.lock().unwrap().clone()
    }

    /// Request ids that were waited on
    pub fn wait_calls(&self) -> Vec<String> {
        self.wait_calls.lock().unwrap().clone()
    }

    fn issue_request(&self) -> Option<String> {
        if self.omit_locations {
            return None;
        }
        let request_id = Uuid::new_v4().to_string();
        let state = self
            .wait_outcome
            .lock()
            .unwrap()
            .unwrap_or(RequestState::Done);
        self.request_states
            .lock()
            .unwrap()
            .insert(request_id.clone(), state);
        Some(format!("{}/requests/{}/status", self.base_url, request_id))
    }
}

#[async_trait::async_trait]
impl IonosClientTrait for MockIonosClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_network_load_balancers(
        &self,
        datacenter_id: &str,
        depth: u32,
    ) -> Result<NetworkLoadBalancers, IonosError> {
        self.list_calls
            .lock()
            .unwrap()
            .push((datacenter_id.to_string(), depth));

        let items = self
            .balancers
            .lock()
            .unwrap()
            .get(datacenter_id)
            .cloned()
            .unwrap_or_default();
        Ok(NetworkLoadBalancers {
            id: Some(format!("{}/networkloadbalancers", datacenter_id)),
            resource_type: Some("collection".to_string()),
            href: None,
            items,
        })
    }

    async fn create_network_load_balancer(
        &self,
        datacenter_id: &str,
        body: NetworkLoadBalancerCreate,
    ) -> Result<ApiResponse<NetworkLoadBalancer>, IonosError> {
        self.create_calls
            .lock()
            .unwrap()
            .push((datacenter_id.to_string(), body.clone()));

        let nlb = self.make_network_load_balancer(body.properties);
        self.balancers
            .lock()
            .unwrap()
            .entry(datacenter_id.to_string())
            .or_default()
            .push(nlb.clone());

        Ok(ApiResponse {
            body: nlb,
            location: self.issue_request(),
        })
    }

    async fn patch_network_load_balancer(
        &self,
        datacenter_id: &str,
        network_load_balancer_id: &str,
        properties: NetworkLoadBalancerProperties,
    ) -> Result<ApiResponse<NetworkLoadBalancer>, IonosError> {
        self.patch_calls.lock().unwrap().push((
            datacenter_id.to_string(),
            network_load_balancer_id.to_string(),
            properties.clone(),
        ));

        let mut balancers = self.balancers.lock().unwrap();
        let items = balancers
            .get_mut(datacenter_id)
            .ok_or_else(|| IonosError::NotFound(format!("Datacenter {} not found", datacenter_id)))?;
        let nlb = items
            .iter_mut()
            .find(|nlb| nlb.id == network_load_balancer_id)
            .ok_or_else(|| {
                IonosError::NotFound(format!(
                    "Network Load Balancer {} not found",
                    network_load_balancer_id
                ))
            })?;
        nlb.properties = properties;
        let updated = nlb.clone();
        drop(balancers);

        Ok(ApiResponse {
            body: updated,
            location: self.issue_request(),
        })
    }

    async fn delete_network_load_balancer(
        &self,
        datacenter_id: &str,
        network_load_balancer_id: &str,
    ) -> Result<ApiResponse<()>, IonosError> {
        self.delete_calls
            .lock()
            .unwrap()
            .push((datacenter_id.to_string(), network_load_balancer_id.to_string()));

        let mut balancers = self.balancers.lock().unwrap();
        let items = balancers
            .get_mut(datacenter_id)
            .ok_or_else(|| IonosError::NotFound(format!("Datacenter {} not found", datacenter_id)))?;
        let position = items
            .iter()
            .position(|nlb| nlb.id == network_load_balancer_id)
            .ok_or_else(|| {
                IonosError::NotFound(format!(
                    "Network Load Balancer {} not found",
                    network_load_balancer_id
                ))
            })?;
        items.remove(position);
        drop(balancers);

        Ok(ApiResponse {
            body: (),
            location: self.issue_request(),
        })
    }

    async fn get_request_status(&self, request_id: &str) -> Result<RequestStatus, IonosError> {
        let state = self
            .request_states
            .lock()
            .unwrap()
            .get(request_id)
            .copied()
            .unwrap_or(RequestState::Done);
        Ok(RequestStatus {
            id: Some(request_id.to_string()),
            resource_type: Some("request-status".to_string()),
            href: Some(format!("{}/requests/{}/status", self.base_url, request_id)),
            metadata: RequestStatusMetadata {
                status: state,
                message: None,
                etag: None,
            },
        })
    }

    async fn wait_for_completion(
        &self,
        request_id: &str,
        _timeout: Duration,
    ) -> Result<(), IonosError> {
        self.wait_calls.lock().unwrap().push(request_id.to_string());

        let state = self
            .request_states
            .lock()
            .unwrap()
            .get(request_id)
            .copied()
            .unwrap_or(RequestState::Done);
        match state {
            RequestState::Done => Ok(()),
            RequestState::Failed => Err(IonosError::Api(format!(
                "Request {} failed: mock failure",
                request_id
            ))),
            // A request that never progresses can only end in a timeout here,
            // since the mock does not advance time
            RequestState::Queued | RequestState::Running => {
                Err(IonosError::WaitTimeout(request_id.to_string()))
            }
        }
    }
}
