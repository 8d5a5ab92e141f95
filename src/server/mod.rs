//! HTTP host: serves the counter page and exposes the controls.

pub mod error;
pub mod health;
pub mod page;
pub mod router;
pub mod server;

pub use error::ServerError;
pub use router::{build_router, CounterSnapshot, HttpState};
pub use server::HttpServer;
