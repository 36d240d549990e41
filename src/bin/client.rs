use cotacao_backend::{client, utils};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    utils::logging::init_logging();

    let cfg = utils::config::ClientConfig::from_env();
    if let Err(err) = client::run(&cfg).await {
        tracing::error!("汇率查询失败: {}", err);
        std::process::exit(1);
    }
}
