//! Error types for the transfer core.

/// Errors from upload domain resolution.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("locate request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid locate response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("locate upload failed: error_code={code}, error_msg={message}")]
    Provider { code: i64, message: String },

    #[error("no servers in locate response")]
    NoServers,
}

/// Errors from a single-file upload.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("scratch file error: {0}")]
    Scratch(#[from] std::io::Error),

    #[error(transparent)]
    Locate(#[from] LocateError),

    #[error("upload request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to read upload response: {0}")]
    Read(#[source] reqwest::Error),

    #[error("upload failed: error_code={code}, error_msg={message}")]
    Provider { code: i64, message: String },
}

/// Errors from a direct-link download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("download request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("failed to read download body: {0}")]
    Read(#[source] reqwest::Error),
}
