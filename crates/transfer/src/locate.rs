//! Upload domain resolution.
//!
//! The provider designates a per-path edge server for uploads. The
//! locate call carries an upload-session id, but only the one-shot
//! multipart path exists, so the id stays the inert placeholder.

use serde::Deserialize;

use crate::APP_ID;
use crate::client::TransferClient;
use crate::error::LocateError;
use crate::path::query_escape;

/// Candidate list returned by the locate-upload endpoint.
#[derive(Debug, Deserialize)]
struct LocateResponse {
    #[serde(default)]
    servers: Vec<ServerEntry>,
    #[serde(default)]
    error_code: i64,
    #[serde(default)]
    error_msg: String,
}

#[derive(Debug, Deserialize)]
struct ServerEntry {
    #[serde(default)]
    server: String,
}

impl TransferClient {
    /// Asks the provider which edge server should receive an upload to
    /// `absolute_path`. Returns the first candidate; there is no
    /// preference logic beyond first-in-list.
    pub async fn resolve_upload_domain(
        &self,
        access_token: &str,
        absolute_path: &str,
    ) -> Result<String, LocateError> {
        let url = format!(
            "{}?method=locateupload&appid={APP_ID}&access_token={access_token}&path={}&upload_version=2.0&uploadid=temp",
            self.locate_url(),
            query_escape(absolute_path),
        );

        let resp = self.get(&url).await?;
        let locate: LocateResponse = serde_json::from_slice(&resp.body)?;

        if locate.error_code != 0 {
            return Err(LocateError::Provider {
                code: locate.error_code,
                message: locate.error_msg,
            });
        }

        let first = locate.servers.into_iter().next().ok_or(LocateError::NoServers)?;
        Ok(first.server)
    }
}
