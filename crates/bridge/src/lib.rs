//! Presentation boundary for the Neat Reader cloud-drive backend.
//!
//! [`App`] is the value the graphical shell embeds: it wires one
//! instrumented [`TransferClient`] and one forwarding [`ApiClient`]
//! at process start and exposes UI-facing operations whose failures
//! are always converted into the declared return shape — a JSON error
//! string for upload-family calls, a [`DownloadResult`] for downloads.
//! No failure crosses the boundary as a fault.

mod config;
mod types;

use tracing_subscriber::EnvFilter;

use neatreader_provider_api::ApiClient;
use neatreader_transfer::TransferClient;

pub use config::Config;
pub use types::DownloadResult;

use types::{forward_response, upload_response};

/// Installs the process-wide tracing subscriber.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,neatreader=debug")),
        )
        .init();
}

/// The backend the UI shell talks to.
///
/// Constructed once at process start; read-only afterwards, so
/// concurrent UI calls share it freely.
pub struct App {
    config: Config,
    transfer: TransferClient,
    api: ApiClient,
}

impl App {
    /// Builds the backend: loads configuration and constructs the
    /// shared transport.
    pub fn new() -> anyhow::Result<Self> {
        let config = Config::load().unwrap_or_default();
        let transfer = TransferClient::new()?;
        let api = ApiClient::new(transfer.clone());
        tracing::info!(port = config.port, "backend ready");
        Ok(Self {
            config,
            transfer,
            api,
        })
    }

    /// The process configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Liveness check for the shell.
    pub fn health(&self) -> String {
        serde_json::json!({ "status": "ok" }).to_string()
    }

    /// Uploads file bytes to the namespaced form of `file_name`.
    ///
    /// Always returns valid JSON: the provider's success payload
    /// verbatim, or an error object.
    pub async fn upload_file(&self, file_name: &str, data: &[u8], access_token: &str) -> String {
        upload_response(self.transfer.upload(access_token, file_name, data).await)
    }

    /// Downloads a direct link fully into memory.
    pub async fn download_file(&self, direct_link: &str, access_token: &str) -> DownloadResult {
        match self.transfer.download(direct_link, access_token).await {
            Ok(data) => DownloadResult::ok(data),
            Err(err) => DownloadResult::err(err.to_string()),
        }
    }

    /// Verifies a token by fetching account info.
    pub async fn verify_token(&self, access_token: &str) -> String {
        forward_response(self.api.user_info(access_token).await)
    }

    /// Lists a remote directory.
    #[allow(clippy::too_many_arguments)]
    pub async fn get_file_list(
        &self,
        access_token: &str,
        dir: &str,
        page_num: i32,
        page_size: i32,
        order: &str,
        method: &str,
        recursion: i32,
    ) -> String {
        forward_response(
            self.api
                .list_files(access_token, dir, page_num, page_size, order, method, recursion)
                .await,
        )
    }

    /// Fetches file metadata (with direct links).
    pub async fn get_file_info(&self, access_token: &str, fsids: &str) -> String {
        forward_response(self.api.file_metas(access_token, fsids).await)
    }

    /// Searches remote files by keyword.
    pub async fn search_files(
        &self,
        access_token: &str,
        key: &str,
        dir: &str,
        method: &str,
        recursion: i32,
    ) -> String {
        forward_response(
            self.api
                .search_files(access_token, key, dir, method, recursion)
                .await,
        )
    }

    /// Exchanges an OAuth authorization code for tokens.
    pub async fn get_token_via_code(
        &self,
        code: &str,
        client_id: &str,
        client_secret: &str,
        redirect_uri: &str,
    ) -> String {
        forward_response(
            self.api
                .token_from_code(code, client_id, client_secret, redirect_uri)
                .await,
        )
    }

    /// Refreshes an OAuth access token.
    pub async fn refresh_token(
        &self,
        refresh_token: &str,
        client_id: &str,
        client_secret: &str,
    ) -> String {
        forward_response(
            self.api
                .refresh_token(refresh_token, client_id, client_secret)
                .await,
        )
    }

    /// Logs into a self-hosted gateway as an alternative token source.
    pub async fn get_token_via_gateway(
        &self,
        base_url: &str,
        username: &str,
        password: &str,
    ) -> String {
        forward_response(self.api.gateway_login(base_url, username, password).await)
    }

    /// Reads a local file the shell selected for upload.
    pub fn read_file(&self, path: &str) -> Result<Vec<u8>, std::io::Error> {
        std::fs::read(path).inspect_err(|err| {
            tracing::warn!(path, error = %err, "failed to read local file");
        })
    }
}
