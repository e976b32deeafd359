//! Account and file-metadata endpoints.

use neatreader_transfer::{TransferClient, query_escape};

use crate::ApiError;

const PAN_BASE_URL: &str = "https://pan.baidu.com";
const OAUTH_BASE_URL: &str = "https://openapi.baidu.com";

/// Forwarding client for the provider's xpan REST endpoints.
///
/// Shares the instrumented transport with the transfer core; read-only
/// after construction.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: TransferClient,
    pan_url: String,
    oauth_url: String,
}

impl ApiClient {
    /// Creates a forwarding client on top of an existing transport.
    pub fn new(http: TransferClient) -> Self {
        Self {
            http,
            pan_url: PAN_BASE_URL.to_string(),
            oauth_url: OAUTH_BASE_URL.to_string(),
        }
    }

    /// Overrides both base URLs (for testing).
    #[cfg(test)]
    pub(crate) fn with_base_urls(mut self, pan: String, oauth: String) -> Self {
        self.pan_url = pan;
        self.oauth_url = oauth;
        self
    }

    pub(crate) fn http(&self) -> &TransferClient {
        &self.http
    }

    pub(crate) fn oauth_url(&self) -> &str {
        &self.oauth_url
    }

    /// Fetches account info for the given token (`method=uinfo`).
    pub async fn user_info(&self, access_token: &str) -> Result<String, ApiError> {
        let url = format!(
            "{}/rest/2.0/xpan/nas?method=uinfo&access_token={access_token}",
            self.pan_url,
        );
        Ok(self.http.get(&url).await?.text())
    }

    /// Lists a directory (`method=list`, or whatever `method` the UI asks for).
    #[allow(clippy::too_many_arguments)]
    pub async fn list_files(
        &self,
        access_token: &str,
        dir: &str,
        page_num: i32,
        page_size: i32,
        order: &str,
        method: &str,
        recursion: i32,
    ) -> Result<String, ApiError> {
        let url = format!(
            "{}/rest/2.0/xpan/file?method={method}&access_token={access_token}&dir={}&pageNum={page_num}&pageSize={page_size}&order={}&recursion={recursion}",
            self.pan_url,
            query_escape(dir),
            query_escape(order),
        );
        Ok(self.http.get(&url).await?.text())
    }

    /// Fetches metadata (including direct links) for a comma-separated
    /// list of file ids (`method=filemetas`, `dlink=1`).
    pub async fn file_metas(&self, access_token: &str, fsids: &str) -> Result<String, ApiError> {
        let url = format!(
            "{}/rest/2.0/xpan/file?method=filemetas&access_token={access_token}&fsids={}&dlink=1",
            self.pan_url,
            query_escape(&format!("[{fsids}]")),
        );
        Ok(self.http.get(&url).await?.text())
    }

    /// Searches for files by keyword.
    pub async fn search_files(
        &self,
        access_token: &str,
        key: &str,
        dir: &str,
        method: &str,
        recursion: i32,
    ) -> Result<String, ApiError> {
        let url = format!(
            "{}/rest/2.0/xpan/file?method={method}&access_token={access_token}&key={}&dir={}&recursion={recursion}",
            self.pan_url,
            query_escape(key),
            query_escape(dir),
        );
        Ok(self.http.get(&url).await?.text())
    }
}
