//! Ionos Cloud API models
//!
//! These models match the Cloud API v6 Network Load Balancer serializers.
//! See: /cloudapi/v6/datacenters/{datacenterId}/networkloadbalancers

use serde::{Deserialize, Serialize};

/// Desired properties of a Network Load Balancer.
///
/// This is the full property set sent on create and patch. Patch is a full
/// replace on the provider side, so optional fields left as `None` are
/// omitted from the payload and revert to absent rather than being merged
/// with prior remote values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkLoadBalancerProperties {
    pub name: String,
    /// LAN the balancer listens on
    pub listener_lan: String,
    /// LAN the balancer forwards to
    pub target_lan: String,
    /// Listener IPs of the balancer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ips: Option<Vec<String>>,
    /// Private IPs for traffic towards the target LAN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lb_private_ips: Option<Vec<String>>,
}

/// A Network Load Balancer as returned by the provider.
///
/// `metadata` is provider-assigned bookkeeping (created date, state, etag)
/// and is carried verbatim; this crate never interprets it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkLoadBalancer {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub properties: NetworkLoadBalancerProperties,
}

/// List wrapper for the networkloadbalancers collection endpoint.
///
/// `items` keeps the provider's ordering; callers that scan for a match rely
/// on first-match-wins over exactly this order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkLoadBalancers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default)]
    pub items: Vec<NetworkLoadBalancer>,
}

/// Request body for creating a Network Load Balancer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkLoadBalancerCreate {
    pub properties: NetworkLoadBalancerProperties,
}

/// State of an asynchronous provider request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestState {
    Queued,
    Running,
    Done,
    Failed,
}

/// Status metadata of an asynchronous provider request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStatusMetadata {
    pub status: RequestState,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub etag: Option<String>,
}

/// Response of `GET /requests/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub metadata: RequestStatusMetadata,
}

/// A mutating API response together with its `Location` header, if any.
///
/// The header points at the asynchronous request tracking the mutation and
/// is what the completion waiter parses the request id out of.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    pub body: T,
    pub location: Option<String>,
}
