use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";
const DEFAULT_SERVER_URL: &str = "http://localhost:8080/cotacao";
const DEFAULT_DATABASE_URL: &str = "cotacao.db";
const DEFAULT_OUTPUT_PATH: &str = "cotacao.txt";
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 200;
const DEFAULT_STORAGE_TIMEOUT_MS: u64 = 10;
const DEFAULT_CLIENT_TIMEOUT_MS: u64 = 300;

/// 服务端配置。每个阶段的预算彼此独立，不从调用方剩余时间里扣
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub upstream_url: String,
    pub upstream_budget: Duration,
    pub storage_budget: Duration,
    pub database_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let addr: SocketAddr = format!("{}:{}", host, port)
            .parse()
            .expect("Invalid HOST/PORT");
        let upstream_url =
            std::env::var("UPSTREAM_URL").unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        Self {
            addr,
            upstream_url,
            upstream_budget: duration_from_env("UPSTREAM_TIMEOUT_MS", DEFAULT_UPSTREAM_TIMEOUT_MS),
            storage_budget: duration_from_env("STORAGE_TIMEOUT_MS", DEFAULT_STORAGE_TIMEOUT_MS),
            database_url,
        }
    }
}

/// 客户端配置。预算只约束对服务端的这一跳
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub request_budget: Duration,
    pub output_path: PathBuf,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let server_url =
            std::env::var("SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let output_path = std::env::var("OUTPUT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_OUTPUT_PATH));

        Self {
            server_url,
            request_budget: duration_from_env("CLIENT_TIMEOUT_MS", DEFAULT_CLIENT_TIMEOUT_MS),
            output_path,
        }
    }
}

fn duration_from_env(key: &str, default_ms: u64) -> Duration {
    let ms = std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default_ms);
    Duration::from_millis(ms)
}
