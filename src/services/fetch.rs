use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::time::timeout;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
}

/// 一次带预算的 GET 拉取结果。状态码原样带回，由调用方决定是否信任 body
#[derive(Debug, Clone)]
pub struct FetchedBody {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// 在给定预算内完成一次 GET 请求并读完整个响应体。
/// 读完 body 连接才会回到连接池；预算内未完成时 future 被丢弃，
/// 底层连接随之关闭，不会留下后台悬挂的请求。
pub async fn fetch_bytes(
    client: &Client,
    url: &str,
    budget: Duration,
) -> Result<FetchedBody, FetchError> {
    let request = async {
        let resp = client.get(url).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?.to_vec();
        Ok::<_, reqwest::Error>(FetchedBody { status, body })
    };

    match timeout(budget, request).await {
        Ok(fetched) => Ok(fetched?),
        Err(_) => Err(FetchError::DeadlineExceeded(budget)),
    }
}
