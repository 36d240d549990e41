pub mod exchange;

pub use exchange::{Exchange, NewExchange};
