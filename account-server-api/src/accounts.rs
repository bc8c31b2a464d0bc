use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Local;

use account_server_domain::account::{Account, AccountRepository};

use crate::{ApiServiceError, AppState};

/// Liveness and shape probe; never touches the store.
pub async fn get_test_account() -> Json<Account> {
    Json(Account {
        acc_id: 1,
        username: "flash".to_string(),
        password_hash: "FAKE_HASH".to_string(),
        wins: 10,
        games_played: 25,
        kills: 100,
        deaths: 50,
        fav_map_id: None,
        created_at: Local::now().naive_local(),
    })
}

pub async fn get_all(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, ApiServiceError> {
    let accounts = state.accounts.get_all_accounts().await?;
    Ok(Json(accounts))
}

// A missing username responds with a JSON null body and status 200
// rather than a 404.
pub async fn get_by_username(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Option<Account>>, ApiServiceError> {
    let account = state.accounts.get_account_by_username(&username).await?;
    Ok(Json(account))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use account_server_domain::account::{MockAccountRepository, NewAccount};

    use super::*;

    fn test_state(mock: &MockAccountRepository) -> AppState {
        AppState {
            accounts: Arc::new(Box::new(mock.clone())),
        }
    }

    #[tokio::test]
    async fn test_account_is_fixed_and_skips_the_store() {
        let mock = MockAccountRepository::default();

        let Json(account) = get_test_account().await;

        assert_eq!(account.acc_id, 1);
        assert_eq!(account.username, "flash");
        assert_eq!(account.password_hash, "FAKE_HASH");
        assert_eq!(account.wins, 10);
        assert_eq!(account.games_played, 25);
        assert_eq!(account.kills, 100);
        assert_eq!(account.deaths, 50);
        assert_eq!(account.fav_map_id, None);
        assert_eq!(mock.account_count(), 0);
    }

    #[tokio::test]
    async fn get_all_returns_empty_list_for_empty_store() {
        let mock = MockAccountRepository::default();

        let Json(accounts) = get_all(State(test_state(&mock))).await.unwrap();
        assert!(accounts.is_empty());
    }

    #[tokio::test]
    async fn get_all_returns_every_inserted_account() {
        let mock = MockAccountRepository::default();
        mock.insert_account(&NewAccount::with_zero_stats("alice", "h1"))
            .await
            .unwrap();
        mock.insert_account(&NewAccount::with_zero_stats("bob", "h2"))
            .await
            .unwrap();

        let Json(accounts) = get_all(State(test_state(&mock))).await.unwrap();
        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0].username, "alice");
        assert_eq!(accounts[1].username, "bob");
    }

    #[tokio::test]
    async fn get_by_username_returns_matching_account() {
        let mock = MockAccountRepository::default();
        let inserted = mock
            .insert_account(&NewAccount::with_zero_stats("alice", "h1"))
            .await
            .unwrap();

        let Json(found) = get_by_username(Path("alice".to_string()), State(test_state(&mock)))
            .await
            .unwrap();

        assert_eq!(found, Some(inserted));
    }

    #[tokio::test]
    async fn get_by_username_serializes_missing_account_as_null() {
        let mock = MockAccountRepository::default();

        let Json(found) = get_by_username(Path("bob".to_string()), State(test_state(&mock)))
            .await
            .unwrap();

        assert!(found.is_none());
        let body = serde_json::to_value(&found).unwrap();
        assert_eq!(body, serde_json::Value::Null);
    }
}
