//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the Leptos SSR pages, the compiled WASM bundle, static assets and a
//! health check under a single Axum router. Paths the Leptos route table does
//! not know are resolved with `client::routes::SiteRoute` and redirected.
//! Paths it does match, such as `/post/{slug}`, are resolved the same way
//! before rendering, so an unknown slug gets a real redirect instead of a
//! streamed page.

use axum::Router;
use axum::extract::Request;
use axum::http::{StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use client::routes::SiteRoute;

use crate::config::ServerConfig;


/// Health check, static files and the catch-all redirect.
pub fn static_routes(config: &ServerConfig) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(config.pkg_dir()))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .fallback(redirect_unknown)
}

/// Full site: Leptos SSR pages merged over `static_routes`.
pub fn app(config: &ServerConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .route_layer(middleware::from_fn(redirect_unresolved))
        .with_state(leptos_options);

    static_routes(config)
        .merge(leptos_router)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Send anything unrecognised to where `SiteRoute` says it belongs.
async fn redirect_unknown(uri: Uri) -> Redirect {
    let target = SiteRoute::resolve(uri.path()).path();
    tracing::debug!(path = %uri.path(), %target, "redirecting unknown path");
    Redirect::temporary(&target)
}

/// Redirect matched page routes whose parameters resolve to nothing.
async fn redirect_unresolved(request: Request, next: Next) -> Response {
    match SiteRoute::resolve(request.uri().path()) {
        SiteRoute::Redirect(target) => {
            tracing::debug!(path = %request.uri().path(), %target, "redirecting unresolved page");
            Redirect::temporary(target).into_response()
        }
        _ => next.run(request).await,
    }
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
