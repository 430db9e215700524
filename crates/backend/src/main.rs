mod config;
mod error;
mod routes;
mod storage;

use std::path::Path;
use std::sync::Arc;

use axum::handler::HandlerWithoutStateExt;
use axum::http::{header, HeaderValue, Method};
use axum::response::Response;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use config::Config;
use storage::Storage;

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";

/// Serve files from `dir`, answering misses with the JSON 404.
///
/// Only successful responses get the cache header.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(header::CACHE_CONTROL, move |res: &Response| {
        res.status()
            .is_success()
            .then(|| HeaderValue::from_static(cache_header))
    });
    let files = ServeDir::new(dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(routes::not_found_handler.into_service());
    Router::new().fallback_service(files).layer(layer)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the full application router.
fn build_app(storage: Arc<Storage>, images_dir: &Path) -> Router {
    Router::new()
        .route("/places", get(routes::places_handler))
        .route(
            "/user-places",
            get(routes::user_places_handler).put(routes::update_user_places_handler),
        )
        .method_not_allowed_fallback(routes::not_found_handler)
        .with_state(storage)
        .fallback_service(cached_static_router(images_dir, CACHE_1DAY))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load();
    let storage = Storage::open(&config.data_dir);
    tracing::info!(
        places = %storage.places_path().display(),
        user_places = %storage.user_places_path().display(),
        images = %config.images_dir.display(),
        "Using data files"
    );

    let app = build_app(storage, &config.images_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("Server running at http://localhost:{}", config.port);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}
