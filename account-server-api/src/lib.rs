use account_server_domain::{ServiceError, account::ArcAccountRepository};
use axum::{Router, response::IntoResponse, routing::get};
use log::info;

mod accounts;

#[derive(Clone)]
pub struct AppState {
    pub accounts: ArcAccountRepository,
}

pub async fn run(
    accounts: ArcAccountRepository,
    shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
) {
    let router = Router::new().nest(
        "/accounts",
        Router::new()
            .route("/test", get(accounts::get_test_account))
            .route("/all", get(accounts::get_all))
            .route("/by-username/{username}", get(accounts::get_by_username)),
    );

    let port = std::env::var("ACCOUNT_API_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .expect("ACCOUNT_API_PORT must be a valid u16");

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .unwrap();

    info!("Account API listening on port {}", port);
    axum::serve(listener, router.with_state(AppState { accounts }))
        .with_graceful_shutdown(shutdown_signal)
        .await
        .unwrap();

    info!("Account API shut down gracefully");
}

#[derive(Debug)]
pub struct ApiServiceError(ServiceError);

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> axum::http::Response<axum::body::Body> {
        let (status, msg) = match self.0 {
            ServiceError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            ServiceError::Conflict(msg) => (axum::http::StatusCode::CONFLICT, msg),
            ServiceError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = serde_json::json!({ "error": msg });
        (status, axum::Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiServiceError {
    fn from(value: ServiceError) -> Self {
        ApiServiceError(value)
    }
}
