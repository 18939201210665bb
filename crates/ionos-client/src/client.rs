//! Ionos Cloud API client
//!
//! Implements the Cloud API v6 calls needed for Network Load Balancer
//! reconciliation: list, create, patch (full replace), delete, and the
//! asynchronous request-status endpoint behind the Location header.

use crate::error::IonosError;
use crate::ionos_trait::IonosClientTrait;
use crate::models::*;
use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::debug;

/// Default Cloud API endpoint, used when no api_url override is given.
pub const DEFAULT_API_URL: &str = "https://api.ionos.com/cloudapi/v6";

/// Interval between polls of the request-status endpoint.
const POLL_INTERVAL: Duration = Duration::from_secs(5);

static REQUEST_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // Literal pattern, cannot fail to compile
    #[allow(clippy::expect_used)]
    let pattern = Regex::new(r"/requests/([-A-Fa-f0-9]+)/").expect("request id pattern is valid");
    pattern
});

/// Extract the asynchronous request id from a mutating response's
/// `Location` header.
///
/// The header looks like `https://.../cloudapi/v6/requests/<id>/status`.
/// Headers without a `/requests/<id>/` segment yield
/// [`IonosError::RequestId`]; there is no partial match.
pub fn parse_request_id(location: &str) -> Result<String, IonosError> {
    REQUEST_ID_PATTERN
        .captures(location)
        .map(|captures| captures[1].to_string())
        .ok_or_else(|| IonosError::RequestId(location.to_string()))
}

/// Ionos Cloud API client
#[derive(Debug)]
pub struct IonosClient {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl IonosClient {
    /// Create a new Ionos client
    ///
    /// # Arguments
    /// * `base_url` - Cloud API base URL (e.g., "https://api.ionos.com/cloudapi/v6")
    /// * `username` - account username
    /// * `password` - account password
    pub fn new(base_url: String, username: String, password: String) -> Result<Self, IonosError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("nlb-module/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(IonosError::Http)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .basic_auth(&self.username, Some(&self.password))
            .header("Accept", "application/json")
    }

    async fn check_auth(&self, response: reqwest::Response) -> Result<reqwest::Response, IonosError> {
        let status = response.status();
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(IonosError::Authentication(format!("{} - {}", status, body)));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl IonosClientTrait for IonosClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn list_network_load_balancers(
        &self,
        datacenter_id: &str,
        depth: u32,
    ) -> Result<NetworkLoadBalancers, IonosError> {
        let url = format!(
            "{}/datacenters/{}/networkloadbalancers?depth={}",
            self.base_url, datacenter_id, depth
        );
        debug!("Listing Network Load Balancers in datacenter {}", datacenter_id);

        let response = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .map_err(IonosError::Http)?;
        let response = self.check_auth(response).await?;

        if response.status() == 404 {
            return Err(IonosError::NotFound(format!(
                "Datacenter {} not found",
                datacenter_id
            )));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(IonosError::Api(format!(
                "Failed to list Network Load Balancers in datacenter {}: {} - {}",
                datacenter_id, status, body
            )));
        }

        let list: NetworkLoadBalancers = response.json().await.map_err(IonosError::Http)?;
        Ok(list)
    }

    async fn create_network_load_balancer(
        &self,
        datacenter_id: &str,
        body: NetworkLoadBalancerCreate,
    ) -> Result<ApiResponse<NetworkLoadBalancer>, IonosError> {
        let url = format!(
            "{}/datacenters/{}/networkloadbalancers",
            self.base_url, datacenter_id
        );
        debug!("Creating Network Load Balancer {}", body.properties.name);

        let response = self
            .request(reqwest::Method::POST, &url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(IonosError::Http)?;
        let response = self.check_auth(response).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(IonosError::Api(format!(
                "Failed to create Network Load Balancer: {} - {}",
                status, body
            )));
        }

        let location = location_header(&response);
        let nlb: NetworkLoadBalancer = response.json().await.map_err(IonosError::Http)?;
        Ok(ApiResponse { body: nlb, location })
    }

    async fn patch_network_load_balancer(
        &self,
        datacenter_id: &str,
        network_load_balancer_id: &str,
        properties: NetworkLoadBalancerProperties,
    ) -> Result<ApiResponse<NetworkLoadBalancer>, IonosError> {
        let url = format!(
            "{}/datacenters/{}/networkloadbalancers/{}",
            self.base_url, datacenter_id, network_load_balancer_id
        );
        debug!("Patching Network Load Balancer {}", network_load_balancer_id);

        let response = self
            .request(reqwest::Method::PATCH, &url)
            .header("Content-Type", "application/json")
            .json(&properties)
            .send()
            .await
            .map_err(IonosError::Http)?;
        let response = self.check_auth(response).await?;

        if response.status() == 404 {
            return Err(IonosError::NotFound(format!(
                "Network Load Balancer {} not found",
                network_load_balancer_id
            )));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(IonosError::Api(format!(
                "Failed to patch Network Load Balancer {}: {} - {}",
                network_load_balancer_id, status, body
            )));
        }

        let location = location_header(&response);
        let nlb: NetworkLoadBalancer = response.json().await.map_err(IonosError::Http)?;
        Ok(ApiResponse { body: nlb, location })
    }

    async fn delete_network_load_balancer(
        &self,
        datacenter_id: &str,
        network_load_balancer_id: &str,
    ) -> Result<ApiResponse<()>, IonosError> {
        let url = format!(
            "{}/datacenters/{}/networkloadbalancers/{}",
            self.base_url, datacenter_id, network_load_balancer_id
        );
        debug!("Deleting Network Load Balancer {}", network_load_balancer_id);

        let response = self
            .request(reqwest::Method::DELETE, &url)
            .send()
            .await
            .map_err(IonosError::Http)?;
        let response = self.check_auth(response).await?;

        if response.status() == 404 {
            return Err(IonosError::NotFound(format!(
                "Network Load Balancer {} not found",
                network_load_balancer_id
            )));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(IonosError::Api(format!(
                "Failed to delete Network Load Balancer {}: {} - {}",
                network_load_balancer_id, status, body
            )));
        }

        let location = location_header(&response);
        Ok(ApiResponse { body: (), location })
    }

    async fn get_request_status(&self, request_id: &str) -> Result<RequestStatus, IonosError> {
        let url = format!("{}/requests/{}/status", self.base_url, request_id);
        debug!("Fetching status of request {}", request_id);

        let response = self
            .request(reqwest::Method::GET, &url)
            .send()
            .await
            .map_err(IonosError::Http)?;
        let response = self.check_auth(response).await?;

        if response.status() == 404 {
            return Err(IonosError::NotFound(format!(
                "Request {} not found",
                request_id
            )));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(IonosError::Api(format!(
                "Failed to get status of request {}: {} - {}",
                request_id, status, body
            )));
        }

        let status: RequestStatus = response.json().await.map_err(IonosError::Http)?;
        Ok(status)
    }

    async fn wait_for_completion(
        &self,
        request_id: &str,
        timeout: Duration,
    ) -> Result<(), IonosError> {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let status = self.get_request_status(request_id).await?;
            match status.metadata.status {
                RequestState::Done => return Ok(()),
                RequestState::Failed => {
                    let message = status
                        .metadata
                        .message
                        .unwrap_or_else(|| "request failed without a message".to_string());
                    return Err(IonosError::Api(format!(
                        "Request {} failed: {}",
                        request_id, message
                    )));
                }
                RequestState::Queued | RequestState::Running => {
                    if tokio::time::Instant::now() + POLL_INTERVAL > deadline {
                        return Err(IonosError::WaitTimeout(request_id.to_string()));
                    }
                    debug!("Request {} still {:?}, polling again", request_id, status.metadata.status);
                    tokio::time::sleep(POLL_INTERVAL).await;
                }
            }
        }
    }
}

fn location_header(response: &reqwest::Response) -> Option<String> {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_id_from_status_url() {
        let id = parse_request_id(
            "https://api.ionos.com/cloudapi/v6/requests/77e32b1a-4e87-4d11-9f7c-8a2f0d9e11aa/status",
        )
        .unwrap();
        assert_eq!(id, "77e32b1a-4e87-4d11-9f7c-8a2f0d9e11aa");
    }

    #[test]
    fn test_parse_request_id_short_segment() {
        let id = parse_request_id(".../requests/abc-123/status").unwrap();
        assert_eq!(id, "abc-123");
    }

    #[test]
    fn test_parse_request_id_missing_segment() {
        let err = parse_request_id("https://api.ionos.com/cloudapi/v6/datacenters/xyz").unwrap_err();
        assert!(matches!(err, IonosError::RequestId(_)));
    }

    #[test]
    fn test_parse_request_id_unterminated_segment() {
        // No trailing slash after the id, so the pattern must not match
        let err = parse_request_id("https://api.ionos.com/cloudapi/v6/requests/abc-123").unwrap_err();
        assert!(matches!(err, IonosError::RequestId(_)));
    }

    #[test]
    fn test_default_api_url_has_no_trailing_slash() {
        assert!(!DEFAULT_API_URL.ends_with('/'));
    }
}
