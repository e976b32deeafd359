//! Parameter-forwarding client for the provider's REST surface.
//!
//! Account info, directory listing, search, file metadata, OAuth token
//! exchange, and the third-party gateway login are all plain forwards:
//! the provider's raw JSON body is returned unparsed and the caller
//! interprets it. All traffic goes through the instrumented transport
//! in `neatreader-transfer`.

mod client;
mod gateway;
mod oauth;

#[cfg(test)]
pub(crate) mod testutil;

pub use client::ApiClient;

/// Errors from the forwarding endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}
