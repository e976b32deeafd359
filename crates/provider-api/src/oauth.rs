//! OAuth token exchange and refresh.
//!
//! Both calls are form POSTs to the provider's OAuth endpoint; the
//! token JSON comes back to the caller verbatim.

use crate::ApiError;
use crate::client::ApiClient;

impl ApiClient {
    /// Exchanges an authorization code for tokens.
    pub async fn token_from_code(
        &self,
        code: &str,
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
    ) -> Result<String, ApiError> {
        let url = format!("{}/oauth/2.0/token", self.oauth_url());
        let resp = self
            .http()
            .post_form(
                &url,
                &[
                    ("grant_type", "authorization_code"),
                    ("code", code),
                    ("client_id", client_id),
                    ("client_secret", client_secret),
                    ("redirect_uri", redirect_uri),
                ],
            )
            .await?;
        Ok(resp.text())
    }

    /// Refreshes an access token.
    pub async fn refresh_token(
        &self,
        refresh_token: &str,
        client_id: &str,
        client_secret: &str,
    ) -> Result<String, ApiError> {
        let url = format!("{}/oauth/2.0/token", self.oauth_url());
        let resp = self
            .http()
            .post_form(
                &url,
                &[
                    ("grant_type", "refresh_token"),
                    ("refresh_token", refresh_token),
                    ("client_id", client_id),
                    ("client_secret", client_secret),
                ],
            )
            .await?;
        Ok(resp.text())
    }
}
