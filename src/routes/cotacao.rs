use axum::{routing::get, Router};

use crate::app::AppState;
use crate::handler;

pub fn router() -> Router<AppState> {
    Router::new().route("/cotacao", get(handler::cotacao::get_cotacao))
}
