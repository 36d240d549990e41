use std::sync::Arc;

use axum::Router;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::repositories;
use crate::routes;
use crate::utils::config::ServerConfig;
use crate::utils::middleware;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

#[derive(Clone)]
pub struct AppState {
    pub db_pool: DbPool,
    pub http_client: reqwest::Client,
    pub cfg: Arc<ServerConfig>,
}

/// 打开（或创建）SQLite 库并保证表结构就位。失败属于启动级错误
pub fn init_db_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let db_pool = Pool::builder().build(manager)?;
    let mut conn = db_pool.get()?;
    repositories::exchange::ensure_schema(&mut conn)?;
    Ok(db_pool)
}

pub fn build_app_with_pool(
    cfg: Arc<ServerConfig>,
    db_pool: DbPool,
    http_client: reqwest::Client,
) -> Router {
    let state = AppState {
        db_pool,
        http_client,
        cfg,
    };

    routes::build_routes()
        .with_state(state)
        .layer(middleware::cors_layer())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
