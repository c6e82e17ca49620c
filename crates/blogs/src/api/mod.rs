mod blogs;
mod cli;
mod error;
mod extract;
mod login;
mod users;

pub use cli::ServeOptions;

use crate::auth::Gateway;
use crate::prelude::{eprintln, *};
use crate::store::Store;
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use error::ApiError;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub gateway: Gateway,
}

impl AppState {
    pub fn new(store: Store, token_ttl: chrono::Duration) -> Self {
        Self {
            gateway: Gateway::new(store.clone(), token_ttl),
            store,
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/blogs", get(blogs::list).post(blogs::create))
        .route("/api/blogs/stats", get(blogs::stats))
        .route(
            "/api/blogs/{id}",
            get(blogs::get).put(blogs::update).delete(blogs::delete),
        )
        .route("/api/users", get(users::list).post(users::create))
        .route("/api/login", post(login::login))
        .fallback(unknown_endpoint)
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .with_state(state)
}

pub async fn run(options: ServeOptions, global: crate::Global) -> Result<()> {
    let store = Store::open(&global.database)
        .map_err(|e| eyre!("Failed to open {}: {e}", global.database.display()))?;
    let state = AppState::new(store, chrono::Duration::hours(options.token_ttl_hours));

    let addr = format!("{}:{}", options.host, options.port);

    if global.verbose {
        eprintln!("Database: {}", global.database.display());
        eprintln!("Blog list API listening on http://{}", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("listening on {addr}");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    log::info!("{method} {uri} {}", response.status());
    response
}

async fn unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}

/// Run a store or gateway call on the blocking thread pool
///
/// SQLite calls and password hashing are synchronous and take the shared
/// connection lock, so they stay off the async workers.
async fn blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, Error> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Generic(format!("blocking task failed: {e}")))?
        .map_err(ApiError::from)
}
