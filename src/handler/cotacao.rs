use std::time::Duration;

use axum::{extract::State, http::StatusCode, Json};
use thiserror::Error;

use crate::api_models::{ExchangeQuote, ExchangeView};
use crate::app::{AppState, DbPool};
use crate::handler::error::AppError;
use crate::models::NewExchange;
use crate::repositories;
use crate::services::awesome_api;

/// GET /cotacao：查上游实时汇率，入库走后台，失败只记日志不影响响应
pub async fn get_cotacao(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ExchangeView>), AppError> {
    tracing::info!("开始查询美元兑雷亚尔实时汇率");
    let quote = awesome_api::fetch_usd_brl(
        &state.http_client,
        &state.cfg.upstream_url,
        state.cfg.upstream_budget,
    )
    .await?;

    tracing::info!(bid = %quote.bid, "拿到上游报价，转后台入库");
    spawn_persist(state.db_pool.clone(), state.cfg.storage_budget, quote.clone());

    Ok((StatusCode::OK, Json(ExchangeView { value: quote.bid })))
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("db pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("db error: {0}")]
    Db(#[from] diesel::result::Error),
    #[error("persist task panicked: {0}")]
    Join(#[from] tokio::task::JoinError),
    #[error("storage deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
}

/// 把入库从请求周期里剥离出来：独立任务、独立预算，结果只进日志
pub fn spawn_persist(db_pool: DbPool, budget: Duration, quote: ExchangeQuote) {
    tokio::spawn(async move {
        match persist_quote(&db_pool, budget, quote).await {
            Ok(rec_id) => tracing::debug!(id = rec_id, "exchange quote persisted"),
            Err(e) => tracing::warn!("Failed to persist exchange quote: {}", e),
        }
    });
}

/// 在预算内完成一次插入。超出预算就放弃等待，写入本身交给阻塞线程收尾
pub async fn persist_quote(
    db_pool: &DbPool,
    budget: Duration,
    quote: ExchangeQuote,
) -> Result<i32, PersistError> {
    let pool = db_pool.clone();
    let new_rec = NewExchange::from(quote);
    let insert = tokio::task::spawn_blocking(move || -> Result<i32, PersistError> {
        let mut conn = pool.get()?;
        Ok(repositories::exchange::create(&mut conn, &new_rec)?)
    });

    match tokio::time::timeout(budget, insert).await {
        Ok(join_result) => join_result?,
        Err(_) => Err(PersistError::DeadlineExceeded(budget)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::r2d2::{ConnectionManager, Pool};
    use diesel::sqlite::SqliteConnection;

    fn sample_quote() -> ExchangeQuote {
        ExchangeQuote {
            code: "USD".into(),
            codein: "BRL".into(),
            name: "Dólar Americano/Real Brasileiro".into(),
            high: "5.6741".into(),
            low: "5.6433".into(),
            var_bid: "0.0056".into(),
            pct_change: "0.1".into(),
            bid: "5.6500".into(),
            ask: "5.6530".into(),
            timestamp: "1722873599".into(),
            create_date: "2024-08-05 14:59:59".into(),
        }
    }

    fn temp_pool(dir: &tempfile::TempDir, with_schema: bool) -> DbPool {
        let db_path = dir.path().join("cotacao-test.db");
        let manager = ConnectionManager::<SqliteConnection>::new(db_path.to_str().unwrap());
        let pool = Pool::builder()
            .max_size(1)
            // 拿不到连接时尽快失败，别让阻塞任务拖住测试收尾
            .connection_timeout(Duration::from_millis(250))
            .build(manager)
            .unwrap();
        if with_schema {
            let mut conn = pool.get().unwrap();
            repositories::exchange::ensure_schema(&mut conn).unwrap();
        }
        pool
    }

    #[tokio::test]
    async fn persists_within_budget() {
        let dir = tempfile::tempdir().unwrap();
        let pool = temp_pool(&dir, true);

        let first = persist_quote(&pool, Duration::from_secs(1), sample_quote())
            .await
            .unwrap();
        let second = persist_quote(&pool, Duration::from_secs(1), sample_quote())
            .await
            .unwrap();
        assert_ne!(first, second);

        let mut conn = pool.get().unwrap();
        let stored = repositories::exchange::latest(&mut conn).unwrap().unwrap();
        assert_eq!(stored.bid, "5.6500");
    }

    #[tokio::test]
    async fn missing_schema_surfaces_a_db_error() {
        let dir = tempfile::tempdir().unwrap();
        let pool = temp_pool(&dir, false);

        let err = persist_quote(&pool, Duration::from_secs(1), sample_quote())
            .await
            .unwrap_err();
        assert!(matches!(err, PersistError::Db(_)));
    }

    #[tokio::test]
    async fn busy_store_hits_the_storage_deadline() {
        let dir = tempfile::tempdir().unwrap();
        let pool = temp_pool(&dir, true);

        // 占住池里唯一的连接，让插入只能干等
        let _held = pool.get().unwrap();

        let err = persist_quote(&pool, Duration::from_millis(10), sample_quote())
            .await
            .unwrap_err();
        assert!(matches!(err, PersistError::DeadlineExceeded(_)));
    }
}
