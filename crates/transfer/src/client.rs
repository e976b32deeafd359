//! Instrumented HTTP transport.
//!
//! All provider traffic flows through [`TransferClient`], which logs
//! request method/URL/body and response status/body with elapsed time
//! around every call. Logging is best-effort diagnostics only: bodies
//! are returned fully buffered and never altered, and transport
//! failures are logged and propagated unchanged.

use std::time::{Duration, Instant};

use reqwest::{Request, Response, StatusCode};

/// Default locate-upload endpoint.
const LOCATE_BASE_URL: &str = "https://d.pcs.baidu.com/rest/2.0/pcs/file";

/// How long to wait for a TCP/TLS connection to an edge server.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// A fully-buffered HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Returns the body as a (lossily decoded) string.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Shared HTTP client for all provider calls.
///
/// Constructed once at process start and passed by handle into each
/// operation; read-only after construction, so concurrent calls share
/// it freely. Cloning is cheap (the inner client is refcounted).
#[derive(Debug, Clone)]
pub struct TransferClient {
    http: reqwest::Client,
    locate_url: String,
}

impl TransferClient {
    /// Creates a new client.
    ///
    /// Only a connect timeout is set; whole-request deadlines would
    /// kill large transfers, so cancellation stays with the caller.
    pub fn new() -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            locate_url: LOCATE_BASE_URL.to_string(),
        })
    }

    /// Overrides the locate-upload endpoint (for testing).
    #[cfg(test)]
    pub(crate) fn with_locate_url(mut self, url: String) -> Self {
        self.locate_url = url;
        self
    }

    pub(crate) fn locate_url(&self) -> &str {
        &self.locate_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Sends a request, logging method, URL, and any buffered body
    /// before the call and status plus elapsed time after it.
    pub(crate) async fn send(&self, req: Request) -> Result<Response, reqwest::Error> {
        let method = req.method().clone();
        let url = req.url().clone();

        tracing::debug!(%method, %url, "request start");
        if let Some(bytes) = req.body().and_then(|b| b.as_bytes()) {
            tracing::debug!(body = %String::from_utf8_lossy(bytes), "request body");
        }

        let start = Instant::now();
        match self.http.execute(req).await {
            Ok(resp) => {
                tracing::debug!(
                    %method,
                    %url,
                    status = resp.status().as_u16(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "response"
                );
                Ok(resp)
            }
            Err(err) => {
                tracing::warn!(
                    %method,
                    %url,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    error = %err,
                    "request failed"
                );
                Err(err)
            }
        }
    }

    /// Buffers the response body, logging it for diagnostics.
    pub(crate) async fn read_body(&self, resp: Response) -> Result<HttpResponse, reqwest::Error> {
        let status = resp.status();
        let body = resp.bytes().await?.to_vec();
        tracing::debug!(body = %String::from_utf8_lossy(&body), "response body");
        Ok(HttpResponse { status, body })
    }

    /// Sends a request and buffers the response.
    pub async fn execute(&self, req: Request) -> Result<HttpResponse, reqwest::Error> {
        let resp = self.send(req).await?;
        self.read_body(resp).await
    }

    /// Instrumented GET.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
        let req = self.http.get(url).build()?;
        self.execute(req).await
    }

    /// Instrumented form POST.
    pub async fn post_form(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<HttpResponse, reqwest::Error> {
        let req = self.http.post(url).form(params).build()?;
        self.execute(req).await
    }

    /// Instrumented JSON POST.
    pub async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, reqwest::Error> {
        let req = self.http.post(url).json(body).build()?;
        self.execute(req).await
    }
}
