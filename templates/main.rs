//! {{ name_upper_first }} web application.
//!
//! Generated by scaffolder. Regenerating the project rewrites this file.

#[path = "generated/crud/mod.rs"]
mod crud;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

use crate::crud::services::ConcreteServices;

const DEFAULT_DATABASE_URL: &str = "{{ db.url }}";
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let addr: SocketAddr = std::env::var("{{ name_all_upper }}_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    let services = Arc::new(ConcreteServices::connect(&database_url, "views").await?);

    let app = Router::new()
        .route("/", get(crud::index))
        .merge(crud::routes())
        .nest_service("/stylesheets", ServeDir::new("views/stylesheets"))
        .fallback(crud::not_found)
        .with_state(services);

    tracing::info!(%addr, "{{ name }} listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
