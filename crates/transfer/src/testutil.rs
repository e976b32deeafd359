//! One-shot mock HTTP servers for transport tests.
//!
//! Each server accepts a single connection, captures the raw request
//! (headers and body, handling both Content-Length and chunked
//! framing), and replies with a canned response.

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::Mutex;

pub(crate) struct MockServer {
    pub url: String,
    captured: Arc<Mutex<Vec<u8>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl MockServer {
    /// Responds 200 with a JSON body.
    pub async fn respond_json(body: &str) -> Self {
        Self::spawn(200, "application/json", body.as_bytes().to_vec()).await
    }

    /// Responds with the given status and a plain-text body.
    pub async fn respond_status(status: u16, body: &str) -> Self {
        Self::spawn(status, "text/plain", body.as_bytes().to_vec()).await
    }

    /// Responds 200 with raw bytes.
    pub async fn respond_bytes(body: Vec<u8>) -> Self {
        Self::spawn(200, "application/octet-stream", body).await
    }

    async fn spawn(status: u16, content_type: &str, body: Vec<u8>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}");
        let captured = Arc::new(Mutex::new(Vec::new()));

        let cap = captured.clone();
        let content_type = content_type.to_string();
        let handle = tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let raw = read_request(&mut stream).await;
                *cap.lock().await = raw;

                let head = format!(
                    "HTTP/1.1 {status} Status\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    body.len()
                );
                let _ = stream.write_all(head.as_bytes()).await;
                let _ = stream.write_all(&body).await;
                let _ = stream.shutdown().await;
            }
        });

        Self {
            url,
            captured,
            handle,
        }
    }

    /// The captured request, lossily decoded.
    pub async fn captured_request(&self) -> String {
        String::from_utf8_lossy(&self.captured.lock().await).into_owned()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Reads one full HTTP request from the stream.
async fn read_request(stream: &mut TcpStream) -> Vec<u8> {
    let mut raw = Vec::new();
    let mut buf = vec![0u8; 8192];

    let header_end = loop {
        if let Some(pos) = find(&raw, b"\r\n\r\n") {
            break pos + 4;
        }
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return raw,
            Ok(n) => raw.extend_from_slice(&buf[..n]),
        }
    };

    let headers = String::from_utf8_lossy(&raw[..header_end]).to_ascii_lowercase();
    if let Some(len) = content_length(&headers) {
        while raw.len() < header_end + len {
            match stream.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => raw.extend_from_slice(&buf[..n]),
            }
        }
    } else if headers.contains("transfer-encoding: chunked") {
        while !chunked_complete(&raw[header_end..]) {
            match stream.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => raw.extend_from_slice(&buf[..n]),
            }
        }
    }

    raw
}

/// True once a chunked body has received its terminating zero chunk.
fn chunked_complete(body: &[u8]) -> bool {
    body == b"0\r\n\r\n" || body.ends_with(b"\r\n0\r\n\r\n")
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn content_length(headers: &str) -> Option<usize> {
    headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse().ok())
}
