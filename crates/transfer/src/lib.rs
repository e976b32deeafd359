//! File transfer core for the provider's PCS REST API.
//!
//! Covers the pieces of the protocol that have real data-shaping logic:
//! resolving the upload edge server, streaming a file as a multipart
//! upload, downloading a direct link into memory, and classifying the
//! provider's `{error_code, error_msg}` envelope that can hide an
//! application-level failure inside an HTTP 200 body.

mod client;
mod download;
mod envelope;
mod error;
mod locate;
mod path;
mod upload;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::{HttpResponse, TransferClient};
pub use envelope::{ErrorEnvelope, classify};
pub use error::{DownloadError, LocateError, UploadError};
pub use path::{APP_NAME, namespace, query_escape};

/// Fixed application identifier sent to the locate-upload endpoint.
pub const APP_ID: &str = "250528";

/// User-Agent the provider requires on direct-link downloads.
pub const DOWNLOAD_USER_AGENT: &str = "pan.baidu.com";
