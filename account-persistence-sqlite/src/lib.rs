pub mod accounts;

use sqlx::{
    Pool, Sqlite,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

pub const ACCOUNTS_TABLE_SQL: &str = "CREATE TABLE accounts (\
    acc_id INTEGER PRIMARY KEY AUTOINCREMENT, \
    username VARCHAR(32) NOT NULL UNIQUE, \
    password_hash VARCHAR(255) NOT NULL, \
    wins INTEGER NOT NULL DEFAULT 0, \
    games_played INTEGER NOT NULL DEFAULT 0, \
    kills INTEGER NOT NULL DEFAULT 0, \
    deaths INTEGER NOT NULL DEFAULT 0, \
    fav_map_id INTEGER, \
    created_at TIMESTAMP NOT NULL)";

fn create_account_db_pool() -> Pool<Sqlite> {
    let db_path = std::env::var("ACCOUNT_DB").expect("ACCOUNT_DB env var not set");

    let conn_options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(false);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_lazy_with(conn_options)
}
