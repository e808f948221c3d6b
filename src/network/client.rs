//! HTTP transport - executes drafts with reqwest and formats responses

use std::time::Duration;
use futures_util::FutureExt;
use futures_util::future::BoxFuture;

use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::error::TransportError;
use crate::models::{format_size, DraftSnapshot, HttpMethod, TransportPayload};
use crate::network::Transport;

/// Real transport over HTTP
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    timeout: Duration,
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(Duration::from_secs(REQUEST_TIMEOUT_SECS))
    }
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Self {
        HttpTransport {
            client: create_client(timeout),
            timeout,
        }
    }
}

impl Transport for HttpTransport {
    fn name(&self) -> &'static str {
        "http"
    }

    fn execute(&self, request: DraftSnapshot) -> BoxFuture<'static, Result<TransportPayload, TransportError>> {
        let client = self.client.clone();
        let timeout = self.timeout;
        async move { execute_request(&client, &request, timeout).await }.boxed()
    }
}

/// Build a request from the draft snapshot
fn build_request(client: &reqwest::Client, request: &DraftSnapshot) -> reqwest::RequestBuilder {
    let url = request.url.as_str();

    let mut req_builder = match request.method {
        HttpMethod::GET => client.get(url),
        HttpMethod::POST => client.post(url),
        HttpMethod::PUT => client.put(url),
        HttpMethod::PATCH => client.patch(url),
        HttpMethod::DELETE => client.delete(url),
    };

    // Body is sent as-is, never parsed
    if request.method.has_body() && !request.body.is_empty() {
        req_builder = req_builder
            .header("Content-Type", "application/json")
            .body(request.body.clone());
    }

    req_builder
}

/// Execute a request and buffer the response
pub async fn execute_request(
    client: &reqwest::Client,
    request: &DraftSnapshot,
    timeout: Duration,
) -> Result<TransportPayload, TransportError> {
    let resp = build_request(client, request)
        .send()
        .await
        .map_err(|e| map_send_error(e, timeout))?;

    let status = resp.status();
    let bytes = resp
        .bytes()
        .await
        .map_err(|e| TransportError::Body(e.to_string()))?;

    let body = String::from_utf8_lossy(&bytes).into_owned();
    let formatted = if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        serde_json::to_string_pretty(&json).unwrap_or(body)
    } else {
        body
    };

    Ok(TransportPayload {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("").to_string(),
        body: formatted,
        size_label: format_size(bytes.len()),
    })
}

fn map_send_error(e: reqwest::Error, timeout: Duration) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout { secs: timeout.as_secs() }
    } else if e.is_connect() {
        TransportError::Connect(e.to_string())
    } else if e.is_builder() {
        TransportError::Unavailable(e.to_string())
    } else {
        TransportError::Protocol(e.to_string())
    }
}

/// Create an HTTP client with the given timeout
pub fn create_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// One-shot HTTP server answering with a fixed JSON body
    async fn serve_once(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{}/users", addr)
    }

    #[tokio::test]
    async fn test_executes_and_formats_json() {
        let url = serve_once(r#"{"id":1,"name":"John"}"#).await;
        let transport = HttpTransport::default();
        let payload = transport
            .execute(DraftSnapshot {
                method: HttpMethod::GET,
                url,
                body: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(payload.status, 200);
        assert_eq!(payload.status_text, "OK");
        assert_eq!(payload.size_label, "22 B");
        assert!(payload.body.contains("\n  \"name\": \"John\""));
    }

    #[tokio::test]
    async fn test_invalid_url_fails() {
        let transport = HttpTransport::default();
        let result = transport
            .execute(DraftSnapshot {
                method: HttpMethod::GET,
                url: "not a url".to_string(),
                body: String::new(),
            })
            .await;
        assert!(result.is_err());
    }
}
