//! Shared test utilities for integration tests.

use std::collections::HashMap;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use pl_api::ApiClient;
use pl_core::config::ApiConfig;

/// A listener that answers exactly one HTTP request with a canned reply.
pub struct OneShotServer {
    /// API root pointing at the listener.
    pub api_url: String,
    /// Resolves to the raw request text once the reply has been written.
    pub request: JoinHandle<String>,
}

/// Start a one-shot server replying with `status_line` and `body`.
pub async fn serve_once(status_line: &'static str, body: &'static str) -> OneShotServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind test listener");
    let addr = listener.local_addr().expect("listener has no address");

    let request = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");
        let raw = read_request(&mut socket).await;

        let reply = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(reply.as_bytes())
            .await
            .expect("failed to write reply");
        let _ = socket.shutdown().await;
        raw
    });

    OneShotServer {
        api_url: format!("http://{addr}/api"),
        request,
    }
}

/// Read one request: headers plus a Content-Length body.
async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.expect("read failed");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(head_end) = text.find("\r\n\r\n") {
            let content_length = text[..head_end]
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

/// Build a client for the given API root.
pub fn client_for(api_url: &str) -> ApiClient {
    let config = ApiConfig {
        url: api_url.to_string(),
        timeout_ms: 5_000,
        custom_headers: HashMap::new(),
        accept_self_signed_certs: false,
    };
    ApiClient::new(&config).expect("failed to build client")
}
