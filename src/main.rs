use std::sync::Arc;

use account_persistence_sqlite::accounts::SqliteAccountRepository;
use account_server_domain::account::ArcAccountRepository;
use log::info;

mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    logs::init_logger();

    let account_repo: ArcAccountRepository = Arc::new(Box::new(SqliteAccountRepository::new()));

    info!("Starting account API");

    account_server_api::run(account_repo, shutdown_signal()).await;
}
