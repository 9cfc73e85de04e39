//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the read-only JSON API with Leptos SSR rendering under
//! a single Axum router. The app's own data is compiled into the client; the
//! `/api/fixtures` routes expose the same files for inspection and tooling.


use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use client::net::fixtures::FIXTURE_NAMES;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// Leptos options could not be read from the environment or Cargo metadata.
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
}

/// Where fixture files are read from.
#[derive(Clone, Debug)]
pub struct FixtureDir(Arc<PathBuf>);

impl FixtureDir {
    pub fn new(path: PathBuf) -> Self {
        Self(Arc::new(path))
    }
}

/// JSON API routes, independent of the Leptos configuration.
pub fn api_routes(fixtures: FixtureDir) -> Router {
    Router::new()
        .route("/api/fixtures", get(list_fixtures))
        .route("/api/fixtures/{name}", get(get_fixture))
        .route("/healthz", get(healthz))
        .with_state(fixtures)
}

async fn list_fixtures() -> impl IntoResponse {
    axum::Json(FIXTURE_NAMES)
}

async fn get_fixture(State(dir): State<FixtureDir>, Path(name): Path<String>) -> Response {
    // Only known names reach the filesystem.
    let Some(name) = FIXTURE_NAMES.iter().find(|n| **n == name) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let path = dir.0.join(format!("{name}.json"));
    match tokio::fs::read(&path).await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "fixture read failed");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Full application router: API routes, Leptos SSR, and `/pkg` assets.
///
/// # Errors
///
/// [`RouterError::LeptosConfig`] if the Leptos configuration cannot be loaded
/// (missing or malformed `[[workspace.metadata.leptos]]`).
pub fn app(config: &ServerConfig) -> Result<Router, RouterError> {
    let conf = get_configuration(None).map_err(|e| RouterError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::info!(site_root = %site_root.display(), "serving static assets");

    Ok(api_routes(FixtureDir::new(config.fixtures_dir.clone()))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}
