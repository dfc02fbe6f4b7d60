//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::{Method, Request, StatusCode, Uri};
use axum::Router;
use reqlog::MemorySink;
use tokio::net::TcpListener;

/// Handler serving the four demo routes.
#[allow(dead_code)]
pub async fn demo_handler(uri: Uri) -> (StatusCode, &'static str) {
    match uri.path() {
        "/" => (StatusCode::OK, "oh bea"),
        "/meow" => (StatusCode::TEMPORARY_REDIRECT, "over"),
        "/purr" => (StatusCode::NOT_FOUND, "not here"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "wrong"),
    }
}

/// Build a request carrying a peer address, as `axum::serve` would.
#[allow(dead_code)]
pub fn request_from(method: Method, uri: &str, peer: &str) -> Request<Body> {
    let mut req = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let peer: SocketAddr = peer.parse().unwrap();
    req.extensions_mut().insert(ConnectInfo(peer));
    req
}

/// Serve `app` on an ephemeral local port.
#[allow(dead_code)]
pub async fn spawn_app(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .unwrap();
    });

    addr
}

/// Wait until `sink` holds at least `count` lines.
#[allow(dead_code)]
pub async fn wait_for_lines(sink: &MemorySink, count: usize) -> Vec<String> {
    for _ in 0..100 {
        if sink.len() >= count {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    sink.lines()
}

/// The post-handling line without its trailing elapsed time.
#[allow(dead_code)]
pub fn without_elapsed(line: &str) -> &str {
    line.rsplit_once(' ').map(|(head, _)| head).unwrap_or(line)
}
