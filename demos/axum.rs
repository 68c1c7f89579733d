//! Axum server guarded by the CORS engine.
//!
//! ```text
//! CORSCONF=demos/cors.toml cargo run --example axum
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use simple_cors::{Cors, DEFAULT_CONFIG_VAR, Flow};
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
struct AppState {
    cors: Arc<Cors>,
    greeting: &'static str,
}

async fn cors_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = Response::new(Body::empty());

    match state.cors.handle(&request, &mut response) {
        Flow::Continue => next.run(request).await,
        Flow::Stop => response,
    }
}

async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Call this endpoint from another origin to see CORS in action.</p>",
        state.greeting
    ))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let state = AppState {
        cors: Arc::new(Cors::from_env(DEFAULT_CONFIG_VAR)?),
        greeting: "Welcome to the simple_cors axum demo!",
    };

    let app = Router::new()
        .route("/greet", get(greet))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            cors_middleware,
        ))
        .with_state(state);

    let addr: SocketAddr = "127.0.0.1:5001".parse()?;
    tracing::info!(%addr, "axum demo listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}
