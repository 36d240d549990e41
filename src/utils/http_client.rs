use reqwest::{Client, header::{HeaderMap, HeaderValue, USER_AGENT, ACCEPT}};

/// 构建进程内共享的 HTTP 客户端。
/// 不设客户端级超时，每次调用的预算由调用方单独给出
pub fn create_api_client() -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static("cotacao-backend/0.1"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder()
        .default_headers(headers)
        .build()
}
