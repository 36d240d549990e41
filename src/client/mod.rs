pub mod writer;

use thiserror::Error;

use crate::api_models::ExchangeView;
use crate::services::fetch::{self, FetchError};
use crate::utils::config::ClientConfig;
use crate::utils::http_client;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("server returned status {0}")]
    BadStatus(u16),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("file write error: {0}")]
    Write(#[from] std::io::Error),
}

/// 客户端一次完整流程：请求服务端 -> 解析视图 -> 覆盖写文件。
/// 任何一步失败立即终止，后面的阶段不会执行
pub async fn run(cfg: &ClientConfig) -> Result<(), ClientError> {
    let client = http_client::create_api_client().map_err(FetchError::Transport)?;

    tracing::info!("向服务端查询当前美元汇率");
    let fetched = fetch::fetch_bytes(&client, &cfg.server_url, cfg.request_budget).await?;
    if !fetched.status.is_success() {
        return Err(ClientError::BadStatus(fetched.status.as_u16()));
    }

    let view: ExchangeView = serde_json::from_slice(&fetched.body)?;
    tracing::info!(value = %view.value, "把汇率写入文件");
    writer::write_quote(&cfg.output_path, &view)?;
    Ok(())
}
