mod common;

use common::{http_state, wait_for_server};
use reqwest::Client;
use std::net::TcpListener;
use std::time::Duration;
use tally::config::ServerConfig;
use tally::server::{CounterSnapshot, HttpServer, ServerError};
use tally::shutdown::ShutdownManager;

fn server_config(bind_addr: &str, port_fallback: u16) -> ServerConfig {
    ServerConfig {
        bind_addr: bind_addr.to_string(),
        port_fallback,
    }
}

#[tokio::test]
async fn test_activations_over_http() {
    let shutdown = ShutdownManager::new();
    let mut server = HttpServer::new(server_config("127.0.0.1:0", 0), http_state(), shutdown.clone());
    let addr = server.try_bind().await.expect("Failed to bind");
    let task = tokio::spawn(server.run());
    assert!(wait_for_server(addr, Duration::from_secs(2)).await);

    let client = Client::new();
    for path in ["incr", "decr", "incr"] {
        let resp = client
            .post(format!("http://{}/api/controls/{}", addr, path))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
    }

    let snap: CounterSnapshot = client
        .get(format!("http://{}/api/counter", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(snap.value, 1);
    assert_eq!(snap.display, "1");

    let page = client
        .get(format!("http://{}/", addr))
        .send()
        .await
        .unwrap();
    assert!(page
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));

    shutdown.signal();
    tokio::time::timeout(Duration::from_secs(5), task)
        .await
        .expect("server did not stop")
        .unwrap()
        .unwrap();
}

#[tokio::test]
async fn test_busy_port_falls_back_to_next() {
    let blocker = TcpListener::bind("127.0.0.1:0").unwrap();
    let busy = blocker.local_addr().unwrap();

    let mut server = HttpServer::new(
        server_config(&busy.to_string(), 20),
        http_state(),
        ShutdownManager::new(),
    );
    let addr = server.try_bind().await.expect("Failed to bind");
    assert_ne!(addr.port(), busy.port());
    assert!(addr.port() > busy.port());
    assert!(addr.port() <= busy.port() + 20);
}

#[tokio::test]
async fn test_busy_port_without_fallback_fails() {
    let blocker = TcpListener::bind("127.0.0.1:0").unwrap();
    let busy = blocker.local_addr().unwrap();

    let mut server = HttpServer::new(
        server_config(&busy.to_string(), 0),
        http_state(),
        ShutdownManager::new(),
    );
    let err = server.try_bind().await.unwrap_err();
    assert!(matches!(err, ServerError::NoAvailablePort { .. }));
}

#[tokio::test]
async fn test_run_without_bind_fails() {
    let server = HttpServer::new(
        server_config("127.0.0.1:0", 0),
        http_state(),
        ShutdownManager::new(),
    );
    assert!(matches!(server.run().await, Err(ServerError::NotBound)));
}

#[tokio::test]
async fn test_invalid_address() {
    let mut server = HttpServer::new(
        server_config("localhost", 0),
        http_state(),
        ShutdownManager::new(),
    );
    assert!(matches!(
        server.try_bind().await,
        Err(ServerError::InvalidAddress { .. })
    ));
}
