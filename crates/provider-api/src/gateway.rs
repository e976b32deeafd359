//! Third-party file-gateway login.
//!
//! Alternative token source for users fronting the provider with a
//! self-hosted gateway; a plain JSON POST against the gateway's own
//! auth endpoint.

use serde_json::json;

use crate::ApiError;
use crate::client::ApiClient;

impl ApiClient {
    /// Logs into a self-hosted gateway and returns its raw auth body.
    pub async fn gateway_login(
        &self,
        base_url: &str,
        username: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let url = format!("{base_url}/api/auth/login");
        let body = json!({
            "username": username,
            "password": password,
        });
        let resp = self.http().post_json(&url, &body).await?;
        Ok(resp.text())
    }
}
