use diesel::prelude::*;

use crate::api_models::ExchangeQuote;
use crate::schema::exchanges;

#[derive(Queryable, Debug, Clone)]
pub struct Exchange {
    pub id: i32,
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    pub var_bid: String,
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = exchanges)]
pub struct NewExchange {
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    pub var_bid: String,
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

impl From<ExchangeQuote> for NewExchange {
    fn from(quote: ExchangeQuote) -> Self {
        Self {
            code: quote.code,
            codein: quote.codein,
            name: quote.name,
            high: quote.high,
            low: quote.low,
            var_bid: quote.var_bid,
            pct_change: quote.pct_change,
            bid: quote.bid,
            ask: quote.ask,
            timestamp: quote.timestamp,
            create_date: quote.create_date,
        }
    }
}
