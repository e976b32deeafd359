//! UI-facing result shapes.
//!
//! The transfer core returns typed values; this module is the only
//! place they are serialized into the JSON shapes the presentation
//! layer consumes, so business logic never hand-builds JSON strings.

use serde::{Deserialize, Serialize};
use serde_json::json;

use neatreader_provider_api::ApiError;
use neatreader_transfer::UploadError;

/// Outcome of a download, as handed across the presentation boundary.
///
/// `data` serializes as an ordered sequence of byte-valued integers
/// because the boundary cannot carry raw binary. On success `error` is
/// absent and `data` holds exactly the downloaded bytes; on failure
/// `data` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadResult {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DownloadResult {
    pub fn ok(data: Vec<u8>) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }

    pub fn err(message: String) -> Self {
        Self {
            success: false,
            data: Vec::new(),
            error: Some(message),
        }
    }
}

/// A `{"error": "..."}` object, the failure shape for string-returning
/// operations.
pub(crate) fn error_json(message: &str) -> String {
    json!({ "error": message }).to_string()
}

/// Maps an upload outcome to the boundary contract: the provider's
/// success payload verbatim, or a JSON error object. Provider
/// rejections additionally embed the numeric code and message.
pub(crate) fn upload_response(result: Result<String, UploadError>) -> String {
    match result {
        Ok(body) => body,
        Err(UploadError::Provider { code, message }) => json!({
            "error": format!("upload failed: error_code={code}, error_msg={message}"),
            "error_code": code,
            "error_msg": message,
        })
        .to_string(),
        Err(err) => error_json(&err.to_string()),
    }
}

/// Maps a forwarding outcome to the boundary contract.
pub(crate) fn forward_response(result: Result<String, ApiError>) -> String {
    match result {
        Ok(body) => body,
        Err(err) => error_json(&err.to_string()),
    }
}
