//! Result reporting.
//!
//! Normalizes every path's outcome into a flat `{changed, action, ...}`
//! record emitted as JSON on stdout, and maps errors to the single
//! outward-facing failure message for the selected state.

use crate::config::State;
use crate::error::ModuleError;
use ionos_client::NetworkLoadBalancer;
use serde::Serialize;

/// The mutating operation a run performed (or short-circuited).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Update,
    Delete,
}

/// Flat result record of one reconciliation run.
#[derive(Debug, Serialize)]
pub struct ModuleResult {
    pub changed: bool,
    pub failed: bool,
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_load_balancer: Option<NetworkLoadBalancer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ModuleResult {
    /// Result carrying a resource body (create and update paths).
    pub fn with_resource(action: Action, changed: bool, nlb: NetworkLoadBalancer) -> Self {
        Self {
            changed,
            failed: false,
            action,
            network_load_balancer: Some(nlb),
            id: None,
        }
    }

    /// Result carrying only an id, or nothing at all (delete path).
    pub fn with_id(action: Action, changed: bool, id: Option<String>) -> Self {
        Self {
            changed,
            failed: false,
            action,
            network_load_balancer: None,
            id,
        }
    }
}

/// Failure record emitted on any fatal error.
#[derive(Debug, Serialize)]
pub struct ModuleFailure {
    pub failed: bool,
    pub msg: String,
}

/// Map an error to the outward-facing failure message for the state the
/// run was asked to reach. Validation errors speak for themselves; remote
/// and parse errors get the prefix of the operation that state performs.
pub fn fail_message(state: State, error: &ModuleError) -> String {
    match error {
        ModuleError::InvalidConfig(msg) => msg.clone(),
        _ => match state {
            State::Present => {
                format!("failed to create the new Network Load Balancer: {}", error)
            }
            State::Update => format!("failed to update the Network Load Balancer: {}", error),
            State::Absent => format!("failed to delete the Network Load Balancer: {}", error),
        },
    }
}

impl ModuleFailure {
    pub fn new(state: State, error: &ModuleError) -> Self {
        Self {
            failed: true,
            msg: fail_message(state, error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_properties;
    use ionos_client::IonosError;

    #[test]
    fn test_fail_message_update_prefix() {
        let err = ModuleError::NotFound("The resource does not exist".to_string());
        let msg = fail_message(State::Update, &err);
        assert_eq!(
            msg,
            "failed to update the Network Load Balancer: Network Load Balancer not found: \
             The resource does not exist"
        );
    }

    #[test]
    fn test_fail_message_create_prefix() {
        let err = ModuleError::Api(IonosError::Api("500 - boom".to_string()));
        let msg = fail_message(State::Present, &err);
        assert!(msg.starts_with("failed to create the new Network Load Balancer:"));
        assert!(msg.contains("500 - boom"));
    }

    #[test]
    fn test_fail_message_delete_prefix() {
        let err = ModuleError::Api(IonosError::WaitTimeout("req-1".to_string()));
        let msg = fail_message(State::Absent, &err);
        assert!(msg.starts_with("failed to delete the Network Load Balancer:"));
        assert!(msg.contains("req-1"));
    }

    #[test]
    fn test_fail_message_validation_is_verbatim() {
        let err = ModuleError::InvalidConfig(
            "name parameter is required for a new Network Load Balancer".to_string(),
        );
        let msg = fail_message(State::Present, &err);
        assert_eq!(msg, "name parameter is required for a new Network Load Balancer");
    }

    #[test]
    fn test_result_serialization_shapes() {
        let nlb = ionos_client::NetworkLoadBalancer {
            id: "abc".to_string(),
            resource_type: None,
            href: None,
            metadata: None,
            properties: test_properties("lb1"),
        };
        let result = ModuleResult::with_resource(Action::Create, true, nlb);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["changed"], serde_json::json!(true));
        assert_eq!(json["action"], serde_json::json!("create"));
        assert_eq!(json["network_load_balancer"]["properties"]["name"], "lb1");
        assert!(json.get("id").is_none(), "Unset id is omitted from the record");

        let result = ModuleResult::with_id(Action::Delete, false, None);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["changed"], serde_json::json!(false));
        assert_eq!(json["action"], serde_json::json!("delete"));
        assert!(json.get("network_load_balancer").is_none());
    }
}
