//! Invocation parameters.
//!
//! Every recognized option of the module, as a typed struct with env-var
//! fallbacks, defaults, and per-state validation. Validation runs once at
//! startup, before any remote call is made.

use crate::error::ModuleError;
use clap::{Parser, ValueEnum};
use ionos_client::NetworkLoadBalancerProperties;

/// Declared intent for the Network Load Balancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum State {
    /// Create the balancer if no balancer of that name exists
    Present,
    /// Patch an existing balancer; fails if it does not exist
    Update,
    /// Delete the balancer if it exists
    Absent,
}

/// Reconcile a Network Load Balancer in an Ionos Cloud datacenter.
#[derive(Debug, Parser)]
#[command(name = "nlb-module", version)]
pub struct ModuleConfig {
    /// Name of the Network Load Balancer
    #[arg(long)]
    pub name: Option<String>,

    /// ID of the listening LAN
    #[arg(long)]
    pub listener_lan: Option<String>,

    /// ID of the balanced private target LAN
    #[arg(long)]
    pub target_lan: Option<String>,

    /// Collection of the public IP addresses of the balancer
    #[arg(long, value_delimiter = ',')]
    pub ips: Option<Vec<String>>,

    /// Collection of private IP addresses with subnet mask
    #[arg(long, value_delimiter = ',')]
    pub lb_private_ips: Option<Vec<String>>,

    /// ID of the datacenter the balancer lives in
    #[arg(long)]
    pub datacenter_id: Option<String>,

    /// ID of an existing Network Load Balancer to target directly
    #[arg(long)]
    pub network_load_balancer_id: Option<String>,

    /// Cloud API endpoint override
    #[arg(long, env = "IONOS_API_URL")]
    pub api_url: Option<String>,

    /// Account username
    #[arg(long, env = "IONOS_USERNAME")]
    pub username: String,

    /// Account password
    #[arg(long, env = "IONOS_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Block until the provider finishes the submitted request
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub wait: bool,

    /// Seconds to wait for request completion
    #[arg(long, default_value_t = 600)]
    pub wait_timeout: u64,

    /// Desired state of the balancer
    #[arg(long, value_enum, default_value_t = State::Present)]
    pub state: State,
}

impl ModuleConfig {
    /// Validate the parameter set for the selected state.
    ///
    /// Mirrors the per-state required-field rules; every path needs a
    /// datacenter because all API routes are scoped to one.
    pub fn validate(&self) -> Result<(), ModuleError> {
        if self.datacenter_id.is_none() {
            return Err(ModuleError::InvalidConfig(
                "datacenter_id parameter is required for a Network Load Balancer".to_string(),
            ));
        }

        match self.state {
            State::Present => self.validate_properties("a new"),
            State::Update => self.validate_properties("updating a"),
            State::Absent => {
                if self.name.is_none() && self.network_load_balancer_id.is_none() {
                    return Err(ModuleError::InvalidConfig(
                        "name parameter or network_load_balancer_id parameter are required \
                         for deleting a Network Load Balancer"
                            .to_string(),
                    ));
                }
                Ok(())
            }
        }
    }

    fn validate_properties(&self, context: &str) -> Result<(), ModuleError> {
        for (value, parameter) in [
            (&self.name, "name"),
            (&self.listener_lan, "listener_lan"),
            (&self.target_lan, "target_lan"),
        ] {
            if value.is_none() {
                return Err(ModuleError::InvalidConfig(format!(
                    "{} parameter is required for {} Network Load Balancer",
                    parameter, context
                )));
            }
        }
        Ok(())
    }

    /// The datacenter id, after validation has established it is present.
    pub fn datacenter_id(&self) -> Result<&str, ModuleError> {
        self.datacenter_id.as_deref().ok_or_else(|| {
            ModuleError::InvalidConfig("datacenter_id parameter is missing".to_string())
        })
    }

    /// Build the full property set for create and patch payloads.
    ///
    /// Optional fields stay `None` when unset; patch semantics are full
    /// replace, so they are sent as absent rather than merged.
    pub fn properties(&self) -> Result<NetworkLoadBalancerProperties, ModuleError> {
        match (&self.name, &self.listener_lan, &self.target_lan) {
            (Some(name), Some(listener_lan), Some(target_lan)) => {
                Ok(NetworkLoadBalancerProperties {
                    name: name.clone(),
                    listener_lan: listener_lan.clone(),
                    target_lan: target_lan.clone(),
                    ips: self.ips.clone(),
                    lb_private_ips: self.lb_private_ips.clone(),
                })
            }
            _ => Err(ModuleError::InvalidConfig(
                "name, listener_lan and target_lan parameters are required".to_string(),
            )),
        }
    }

    /// Identity used to resolve the delete target: explicit id wins over name.
    pub fn identity(&self) -> Option<&str> {
        self.network_load_balancer_id
            .as_deref()
            .or(self.name.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_config;

    #[test]
    fn test_validate_present_requires_listener_lan() {
        let mut config = test_config(State::Present);
        config.listener_lan = None;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("listener_lan parameter is required"));
    }

    #[test]
    fn test_validate_present_requires_name() {
        let mut config = test_config(State::Present);
        config.name = None;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("name parameter is required"));
    }

    #[test]
    fn test_validate_requires_datacenter_for_every_state() {
        for state in [State::Present, State::Update, State::Absent] {
            let mut config = test_config(state);
            config.datacenter_id = None;

            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("datacenter_id parameter is required"));
        }
    }

    #[test]
    fn test_validate_absent_accepts_id_without_name() {
        let mut config = test_config(State::Absent);
        config.name = None;
        config.network_load_balancer_id = Some("9d2a7b1e-0000-4e8a-b1f0-2d7c5a9e0f11".to_string());

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_absent_requires_name_or_id() {
        let mut config = test_config(State::Absent);
        config.name = None;
        config.network_load_balancer_id = None;

        let err = config.validate().unwrap_err();
        assert!(err
            .to_string()
            .contains("name parameter or network_load_balancer_id parameter"));
    }

    #[test]
    fn test_validate_update_requires_target_lan() {
        let mut config = test_config(State::Update);
        config.target_lan = None;

        let err = config.validate().unwrap_err();
        assert!(err
            .to_string()
            .contains("target_lan parameter is required for updating a Network Load Balancer"));
    }

    #[test]
    fn test_properties_carries_optional_lists() {
        let mut config = test_config(State::Present);
        config.ips = Some(vec!["185.7.1.10".to_string(), "185.7.1.11".to_string()]);

        let properties = config.properties().unwrap();
        assert_eq!(properties.name, "lb1");
        assert_eq!(properties.ips.map(|ips| ips.len()), Some(2));
        assert!(properties.lb_private_ips.is_none());
    }

    #[test]
    fn test_identity_prefers_explicit_id() {
        let mut config = test_config(State::Absent);
        config.network_load_balancer_id = Some("some-id".to_string());

        assert_eq!(config.identity(), Some("some-id"));
        config.network_load_balancer_id = None;
        assert_eq!(config.identity(), Some("lb1"));
    }
}
