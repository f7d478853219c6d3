//! Local stand-in for an inference server

#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub type Seen = Arc<Mutex<Vec<serde_json::Value>>>;

/// Serve `router` on an ephemeral port, return the generate URL
pub async fn spawn_server(router: Router) -> String
{   let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
      .await
      .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
      axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api/generate", addr)
}

/// Always answers with `status` and `body`
pub async fn canned_server(
  status: StatusCode
, body: &'static str
) -> String
{   let router = Router::new().route(
      "/api/generate",
      post(move || async move { (status, body) })
    );
    spawn_server(router).await
}

/// Answers with `body` only after `delay`
pub async fn slow_server(
  delay: Duration
, body: &'static str
) -> String
{   let router = Router::new().route(
      "/api/generate",
      post(move || async move {
        tokio::time::sleep(delay).await;
        body
      })
    );
    spawn_server(router).await
}

/// Records every JSON body and answers through `reply`
///
/// The JSON extractor rejects bodies sent without an
/// `application/json` content type, so a recorded request
/// also proves the header was set.
pub async fn recording_server(
  reply: fn(&serde_json::Value) -> serde_json::Value
) -> (String, Seen)
{   let seen: Seen = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
      .route(
        "/api/generate",
        post(move |State(seen): State<Seen>, Json(req): Json<serde_json::Value>| async move {
          let body = reply(&req);
          seen.lock().unwrap().push(req);
          Json(body)
        })
      )
      .with_state(seen.clone());
    (spawn_server(router).await, seen)
}

/// Promises a 100 byte body, sends six bytes, then hangs up
pub async fn truncated_body_server() -> String
{   use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0))
      .await
      .unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
      let (mut socket, _) = listener.accept().await.unwrap();
      read_full_request(&mut socket).await;
      socket.write_all(
        b"HTTP/1.1 200 OK\r\n\
          Content-Type: application/json\r\n\
          Content-Length: 100\r\n\r\n\
          {\"resp"
      ).await.unwrap();
      socket.shutdown().await.unwrap();
      // Keep the socket open until the client gives up
      let mut rest = Vec::new();
      let _ = socket.read_to_end(&mut rest).await;
    });
    format!("http://{}/api/generate", addr)
}

/// Drain headers and body so closing does not reset the connection
async fn read_full_request(socket: &mut tokio::net::TcpStream)
{   use tokio::io::AsyncReadExt;

    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop
    {   let n = socket.read(&mut chunk).await.unwrap();
        if n == 0
        {   return;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf).to_string();
        if let Some(end) = text.find("\r\n\r\n")
        {   let length = text[..end]
              .lines()
              .filter_map(|line| line.split_once(':'))
              .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
              .and_then(|(_, value)| value.trim().parse::<usize>().ok())
              .unwrap_or(0);
            if buf.len() >= end + 4 + length
            {   return;
            }
        }
    }
}

/// URL of a port nothing is listening on
pub fn closed_endpoint() -> String
{   let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api/generate", addr)
}

pub fn prompt_of(req: &serde_json::Value) -> String
{   req["prompt"].as_str().unwrap_or_default().to_string()
}
