use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sqlite::SqliteConnection;

use crate::models::{Exchange, NewExchange};
use crate::schema::exchanges::dsl::*;

pub type SqlitePoolConn = PooledConnection<ConnectionManager<SqliteConnection>>;

/// 首次使用时自动建表，重复执行无副作用
const CREATE_EXCHANGES_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS exchanges (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    code TEXT NOT NULL,
    codein TEXT NOT NULL,
    name TEXT NOT NULL,
    high TEXT NOT NULL,
    low TEXT NOT NULL,
    var_bid TEXT NOT NULL,
    pct_change TEXT NOT NULL,
    bid TEXT NOT NULL,
    ask TEXT NOT NULL,
    timestamp TEXT NOT NULL,
    create_date TEXT NOT NULL
);";

pub fn ensure_schema(conn: &mut SqlitePoolConn) -> QueryResult<()> {
    conn.batch_execute(CREATE_EXCHANGES_TABLE)
}

pub fn create(conn: &mut SqlitePoolConn, new_rec: &NewExchange) -> Result<i32, diesel::result::Error> {
    diesel::insert_into(exchanges)
        .values(new_rec)
        .returning(id)
        .get_result(conn)
}

pub fn count(conn: &mut SqlitePoolConn) -> Result<i64, diesel::result::Error> {
    exchanges.count().get_result(conn)
}

pub fn latest(conn: &mut SqlitePoolConn) -> Result<Option<Exchange>, diesel::result::Error> {
    exchanges.order(id.desc()).first(conn).optional()
}
