use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Path, Request, State};
use axum::middleware::{self, Next};
use axum::response::{Html, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::config::ElementIds;
use crate::controller::{ControlMap, SharedController, SharedText};
use crate::server::error::ServerError;
use crate::server::health::health;
use crate::server::page::render_page;
use crate::ui::counter::CounterIntent;

/// Counter value together with the text on the display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSnapshot {
    pub value: i64,
    pub display: String,
}

/// Everything the HTTP handlers need.
#[derive(Clone)]
pub struct HttpState {
    controller: SharedController,
    controls: Arc<ControlMap>,
    view: SharedText,
    ids: Arc<ElementIds>,
}

impl HttpState {
    pub fn new(
        controller: SharedController,
        controls: ControlMap,
        view: SharedText,
        ids: ElementIds,
    ) -> Self {
        Self {
            controller,
            controls: Arc::new(controls),
            view,
            ids: Arc::new(ids),
        }
    }

    /// Read value and display under one lock so they are never mixed
    /// across updates.
    pub fn snapshot(&self) -> CounterSnapshot {
        let controller = self.controller.lock();
        CounterSnapshot {
            value: controller.value(),
            display: self.view.text(),
        }
    }

    /// Activate the control registered under `element_id`.
    pub fn activate(&self, element_id: &str) -> Result<CounterSnapshot, ServerError> {
        let intent = self
            .controls
            .resolve(element_id)
            .ok_or_else(|| ServerError::UnknownControl {
                id: element_id.to_string(),
            })?;
        Ok(self.apply(intent))
    }

    fn apply(&self, intent: CounterIntent) -> CounterSnapshot {
        let mut controller = self.controller.lock();
        let value = controller.dispatch(intent);
        CounterSnapshot {
            value,
            display: self.view.text(),
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/counter", get(counter))
        .route("/api/controls/{id}", post(activate))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn index(State(state): State<HttpState>) -> Html<String> {
    let display = state.snapshot().display;
    Html(render_page(&state.ids, &display))
}

async fn counter(State(state): State<HttpState>) -> Json<CounterSnapshot> {
    Json(state.snapshot())
}

async fn activate(
    State(state): State<HttpState>,
    Path(id): Path<String>,
) -> Result<Json<CounterSnapshot>, ServerError> {
    state.activate(&id).map(Json)
}

async fn log_request(request: Request, next: Next) -> Response {
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "local".to_string());
    tracing::info!("[{}] {} {}", remote, request.method(), request.uri().path());
    next.run(request).await
}
