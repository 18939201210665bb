//! IonosClient trait for mocking
//!
//! This trait abstracts the IonosClient to enable mocking in unit tests.
//! The concrete IonosClient implements this trait, and tests can use mock implementations.

use crate::error::IonosError;
use crate::models::*;
use std::time::Duration;

/// Trait for Ionos Cloud API client operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait IonosClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    /// List the Network Load Balancers of a datacenter, in provider order
    async fn list_network_load_balancers(
        &self,
        datacenter_id: &str,
        depth: u32,
    ) -> Result<NetworkLoadBalancers, IonosError>;

    /// Create a Network Load Balancer in a datacenter
    async fn create_network_load_balancer(
        &self,
        datacenter_id: &str,
        body: NetworkLoadBalancerCreate,
    ) -> Result<ApiResponse<NetworkLoadBalancer>, IonosError>;

    /// Replace the properties of an existing Network Load Balancer
    async fn patch_network_load_balancer(
        &self,
        datacenter_id: &str,
        network_load_balancer_id: &str,
        properties: NetworkLoadBalancerProperties,
    ) -> Result<ApiResponse<NetworkLoadBalancer>, IonosError>;

    /// Delete a Network Load Balancer
    async fn delete_network_load_balancer(
        &self,
        datacenter_id: &str,
        network_load_balancer_id: &str,
    ) -> Result<ApiResponse<()>, IonosError>;

    /// Get the status of an asynchronous request
    async fn get_request_status(&self, request_id: &str) -> Result<RequestStatus, IonosError>;

    /// Block until an asynchronous request completes, fails, or times out
    async fn wait_for_completion(
        &self,
        request_id: &str,
        timeout: Duration,
    ) -> Result<(), IonosError>;
}
