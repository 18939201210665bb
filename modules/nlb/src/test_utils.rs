//! Test utilities for unit testing the reconciler
//!
//! Helpers for building invocation configs and remote resources without
//! going through the CLI parser.

use crate::config::{ModuleConfig, State};
use ionos_client::NetworkLoadBalancerProperties;

pub const TEST_DATACENTER: &str = "3b1a6f2e-9c4d-4e8a-b1f0-2d7c5a9e0f11";

/// A config with the full property set supplied and test credentials.
pub fn test_config(state: State) -> ModuleConfig {
    ModuleConfig {
        name: Some("lb1".to_string()),
        listener_lan: Some("1".to_string()),
        target_lan: Some("2".to_string()),
        ips: None,
        lb_private_ips: None,
        datacenter_id: Some(TEST_DATACENTER.to_string()),
        network_load_balancer_id: None,
        api_url: None,
        username: "test-user".to_string(),
        password: "test-password".to_string(),
        wait: true,
        wait_timeout: 600,
        state,
    }
}

/// The property set matching `test_config`, for payload assertions.
pub fn test_properties(name: &str) -> NetworkLoadBalancerProperties {
    NetworkLoadBalancerProperties {
        name: name.to_string(),
        listener_lan: "1".to_string(),
        target_lan: "2".to_string(),
        ips: None,
        lb_private_ips: None,
    }
}
