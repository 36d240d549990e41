use axum::Router;

use crate::app::AppState;

mod cotacao;
mod root;

pub fn build_routes() -> Router<AppState> {
    Router::new()
        // 根路径与健康检查
        .merge(root::router())
        // 报价接口路径固定，挂在根下
        .merge(cotacao::router())
}
