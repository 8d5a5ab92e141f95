//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tally::config::ElementIds;
use tally::controller::{bind_shared, ControlMap, SharedController, SharedText};
use tally::server::HttpState;
use tally::ui::app::App;
use tempfile::TempDir;

/// Write `content` to a config.toml in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Wait for a server to become available.
pub async fn wait_for_server(addr: SocketAddr, timeout: Duration) -> bool {
    let start = std::time::Instant::now();
    while start.elapsed() < timeout {
        if tokio::net::TcpStream::connect(addr).await.is_ok() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    false
}

// -- Host helpers -------------------------------------------------------------

pub fn bound() -> (SharedController, ControlMap, SharedText) {
    bind_shared(&ElementIds::default()).expect("default ids bind")
}

pub fn http_state() -> HttpState {
    http_state_with(ElementIds::default())
}

/// HTTP state bound to a custom set of element ids.
pub fn http_state_with(ids: ElementIds) -> HttpState {
    let (controller, controls, view) = bind_shared(&ids).expect("ids bind");
    HttpState::new(controller, controls, view, ids)
}

/// App sized to an 80x24 terminal.
pub fn make_app() -> App {
    let (controller, _, view) = bound();
    let mut app = App::new(controller, view);
    app.on_resize(80, 24);
    app
}
