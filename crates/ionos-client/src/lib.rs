//! Ionos Cloud API Client
//!
//! A Rust client library for the slice of the Ionos Cloud API v6 that
//! Network Load Balancer reconciliation needs: the per-datacenter
//! networkloadbalancers collection and the asynchronous request-status
//! endpoint.
//!
//! # Example
//!
//! ```no_run
//! use ionos_client::{IonosClient, IonosClientTrait, NetworkLoadBalancerCreate,
//!     NetworkLoadBalancerProperties, parse_request_id, DEFAULT_API_URL};
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = IonosClient::new(
//!     DEFAULT_API_URL.to_string(),
//!     "user@example.com".to_string(),
//!     "secret".to_string(),
//! )?;
//!
//! // List the balancers of a datacenter
//! let list = client.list_network_load_balancers("dc-uuid", 2).await?;
//!
//! // Create one and wait for the provider to finish
//! let response = client.create_network_load_balancer("dc-uuid", NetworkLoadBalancerCreate {
//!     properties: NetworkLoadBalancerProperties {
//!         name: "lb1".to_string(),
//!         listener_lan: "1".to_string(),
//!         target_lan: "2".to_string(),
//!         ips: None,
//!         lb_private_ips: None,
//!     },
//! }).await?;
//! if let Some(location) = response.location {
//!     let request_id = parse_request_id(&location)?;
//!     client.wait_for_completion(&request_id, Duration::from_secs(600)).await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **NLB Operations**: list, create, patch (full replace), delete
//! - **Asynchronous Requests**: Location-header parsing and poll-until-done
//! - **Mocking**: trait-based client with an in-memory mock behind `test-util`

pub mod client;
pub mod error;
#[path = "trait.rs"]
pub mod ionos_trait;
pub mod models;
#[cfg(feature = "test-util")]
pub mod mock;

pub use client::{IonosClient, parse_request_id, DEFAULT_API_URL};
pub use error::IonosError;
pub use ionos_trait::IonosClientTrait;
pub use models::*;
#[cfg(feature = "test-util")]
pub use mock::MockIonosClient;
