use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::api_models::{ExchangeQuote, UsdBrlEnvelope};
use crate::services::fetch::{fetch_bytes, FetchError};

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("bad status: {0}")]
    BadStatus(u16),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// 从 AwesomeAPI 拉取当前美元兑雷亚尔报价。
/// 非 2xx 的响应体不做解析，直接按上游故障处理。
pub async fn fetch_usd_brl(
    client: &Client,
    url: &str,
    budget: Duration,
) -> Result<ExchangeQuote, QuoteError> {
    let fetched = fetch_bytes(client, url, budget).await?;
    if !fetched.status.is_success() {
        return Err(QuoteError::BadStatus(fetched.status.as_u16()));
    }

    let envelope: UsdBrlEnvelope = serde_json::from_slice(&fetched.body)?;
    Ok(envelope.usdbrl)
}
