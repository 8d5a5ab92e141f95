use std::future::IntoFuture;
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::server::error::ServerError;
use crate::server::router::{build_router, HttpState};
use crate::shutdown::ShutdownManager;

pub struct HttpServer {
    pub addr: SocketAddr,
    /// The bound listener, kept alive so no other process can take the port
    /// between try_bind() and run().
    listener: Option<TcpListener>,
    config: ServerConfig,
    state: HttpState,
    shutdown: ShutdownManager,
}

impl HttpServer {
    pub fn new(config: ServerConfig, state: HttpState, shutdown: ShutdownManager) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)), // Determined at bind time
            listener: None,
            config,
            state,
            shutdown,
        }
    }

    /// Bind to the configured address, trying the following ports when it
    /// is busy. Returns the address actually bound.
    pub async fn try_bind(&mut self) -> Result<SocketAddr, ServerError> {
        let bind_addr: SocketAddr =
            self.config
                .bind_addr
                .parse()
                .map_err(|_| ServerError::InvalidAddress {
                    addr: self.config.bind_addr.clone(),
                })?;

        let start_port = bind_addr.port();
        let end_port = start_port.saturating_add(self.config.port_fallback);
        let host = bind_addr.ip();

        for port in start_port..=end_port {
            let try_addr = SocketAddr::new(host, port);
            match TcpListener::bind(try_addr).await {
                Ok(listener) => {
                    let actual_addr = listener
                        .local_addr()
                        .map_err(|source| ServerError::Io {
                            addr: try_addr,
                            source,
                        })?;
                    self.addr = actual_addr;
                    self.listener = Some(listener);
                    tracing::info!("Accepting connections on {}", actual_addr);
                    return Ok(actual_addr);
                }
                Err(e) => {
                    tracing::debug!("Port {} busy: {}", port, e);
                    // Port 0 asks the OS for any port; no point retrying.
                    if port == 0 {
                        return Err(ServerError::Io {
                            addr: try_addr,
                            source: e,
                        });
                    }
                }
            }
        }

        Err(ServerError::NoAvailablePort {
            start: start_port,
            end: end_port,
        })
    }

    /// Base URL of the bound server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Run the server until shutdown is signaled.
    ///
    /// Consumes self to take the listener bound by try_bind().
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;

        tracing::info!("Starting HTTP host on {}", self.addr);

        let app = build_router(self.state);
        let make_service = app.into_make_service_with_connect_info::<SocketAddr>();

        let shutdown = self.shutdown.clone();
        axum::serve(listener, make_service)
            .with_graceful_shutdown(async move {
                shutdown.wait().await;
            })
            .into_future()
            .await
            .map_err(|source| ServerError::Io {
                addr: self.addr,
                source,
            })?;

        tracing::info!("HTTP host stopped");
        Ok(())
    }
}
