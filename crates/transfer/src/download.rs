//! Direct-link download.

use crate::DOWNLOAD_USER_AGENT;
use crate::client::TransferClient;
use crate::error::DownloadError;

impl TransferClient {
    /// Downloads a direct link fully into memory.
    ///
    /// The access token is appended to the link's existing query
    /// string, and the provider-mandated User-Agent is set (requests
    /// without it are rejected). The whole file must fit in memory;
    /// there is no range or resumption support.
    pub async fn download(
        &self,
        direct_link: &str,
        access_token: &str,
    ) -> Result<Vec<u8>, DownloadError> {
        let url = format!("{direct_link}&access_token={access_token}");

        let req = self
            .http()
            .get(&url)
            .header(reqwest::header::USER_AGENT, DOWNLOAD_USER_AGENT)
            .build()
            .map_err(DownloadError::Transport)?;
        let resp = self.send(req).await.map_err(DownloadError::Transport)?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "download rejected");
            return Err(DownloadError::Status(status.as_u16()));
        }

        let resp = self.read_body(resp).await.map_err(DownloadError::Read)?;
        tracing::info!(size = resp.body.len(), "download complete");
        Ok(resp.body)
    }
}
