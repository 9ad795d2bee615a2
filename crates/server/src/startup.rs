use std::{env, net::SocketAddr};

use axum::Router;
use common::utils::logging::init_logging_default;
use configs::{AppConfig, ServerConfig};
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Bind address from config, overridable via `SERVER_HOST` / `SERVER_PORT`
/// (plain `PORT` also accepted).
fn load_bind_addr(cfg: &ServerConfig) -> anyhow::Result<SocketAddr> {
    let host = env::var("SERVER_HOST").unwrap_or_else(|_| cfg.host.clone());
    let port = env::var("SERVER_PORT")
        .or_else(|_| env::var("PORT"))
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(cfg.port);
    Ok(format!("{}:{}", host, port).parse()?)
}

/// Public entry: build the app and run the HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let cfg = AppConfig::load_and_validate()?;

    // Shared connection pool, created once at startup and handed to the
    // router as explicit state.
    let db = models::db::connect(&cfg.database).await?;
    let state = ServerState { db };

    let app: Router = routes::build_router(build_cors(), state);

    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, "menu service listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
