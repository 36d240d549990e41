use std::net::SocketAddr;
use std::sync::Arc;

use cotacao_backend::{app, utils};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    utils::logging::init_logging();

    let cfg = Arc::new(utils::config::ServerConfig::from_env());
    let db_pool = app::init_db_pool(&cfg.database_url).expect("database init failed");
    let http_client = utils::http_client::create_api_client().expect("http client init failed");
    let addr: SocketAddr = cfg.addr;
    let app = app::build_app_with_pool(cfg, db_pool, http_client);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("bind failed");
    tracing::info!(
        "Axum listening on http://{}",
        listener.local_addr().unwrap()
    );
    axum::serve(listener, app).await.expect("server failed");
}
