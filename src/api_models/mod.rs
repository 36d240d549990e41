pub mod exchange;

pub use exchange::{ExchangeQuote, ExchangeView, UsdBrlEnvelope};
