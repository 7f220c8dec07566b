//! Test utilities for provider client tests.
//!
//! A one-shot HTTP listener on localhost that records the incoming request
//! and answers with a canned status and body.

use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// What the client sent.
#[derive(Debug)]
pub struct CapturedRequest {
    /// Request line and headers, lowercased
    pub head: String,
    /// Decoded JSON body
    pub body: Value,
}

/// Bind an ephemeral port, accept one connection and reply with `status`/`body`.
///
/// Returns the base URL to point a client at and a handle resolving to the
/// captured request.
pub async fn serve_once(status: u16, body: &str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has an address");
    let body = body.to_string();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("Client connected");

        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        let header_end = loop {
            let n = socket.read(&mut chunk).await.expect("Read request");
            assert!(n > 0, "Connection closed before headers were complete");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos;
            }
        };

        let head = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);

        let body_start = header_end + 4;
        while buf.len() < body_start + content_length {
            let n = socket.read(&mut chunk).await.expect("Read request body");
            assert!(n > 0, "Connection closed before body was complete");
            buf.extend_from_slice(&chunk[..n]);
        }
        let request_body =
            serde_json::from_slice(&buf[body_start..body_start + content_length]).unwrap_or(Value::Null);

        let reason = if (200..300).contains(&status) { "OK" } else { "Error" };
        let response = format!(
            "HTTP/1.1 {} {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status,
            reason,
            body.len(),
            body
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("Write response");
        let _ = socket.shutdown().await;

        CapturedRequest {
            head,
            body: request_body,
        }
    });

    (format!("http://{}", addr), handle)
}

/// A base URL nothing is listening on.
pub async fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has an address");
    drop(listener);
    format!("http://{}", addr)
}
