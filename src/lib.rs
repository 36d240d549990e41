pub mod api_models;
pub mod app;
pub mod client;
pub mod handler;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod services;
pub mod utils;
