use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use account_persistence_sqlite::ACCOUNTS_TABLE_SQL;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_path = std::env::var("ACCOUNT_DB").expect("ACCOUNT_DB env var not set");

    let parent = std::path::Path::new(&db_path)
        .parent()
        .expect("Failed to get parent directory of accounts DB path");
    if !parent.as_os_str().is_empty() && !parent.exists() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory for accounts DB");
        println!(
            "Created parent directory for accounts DB at {}",
            parent.display()
        );
    }

    if std::path::Path::new(&db_path).exists() {
        std::fs::remove_file(&db_path).expect("Failed to remove existing accounts DB");
        println!("Removed existing accounts DB at {}", db_path);
    }

    let conn_options = SqliteConnectOptions::new()
        .filename(&db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(conn_options)
        .await
        .expect("Failed to create DB pool");

    sqlx::query(ACCOUNTS_TABLE_SQL)
        .execute(&pool)
        .await
        .expect("Failed to create accounts table");

    println!("Created new accounts DB at {}", db_path);
}
