use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::{ServiceError, ServiceResult};

pub type AccountId = i64;

/// A player's stored profile and match statistics.
///
/// `acc_id` and `created_at` are assigned by the store exactly once, at
/// insertion, and never change afterwards. The password hash is opaque to
/// this service; no hashing or verification happens outside the tooling
/// that seeds the store.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub acc_id: AccountId,
    pub username: String,
    pub password_hash: String,
    pub wins: i32,
    pub games_played: i32,
    pub kills: i32,
    pub deaths: i32,
    pub fav_map_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// Account data before the store has assigned an id and creation time.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: String,
    pub password_hash: String,
    pub wins: i32,
    pub games_played: i32,
    pub kills: i32,
    pub deaths: i32,
    pub fav_map_id: Option<i32>,
}

impl NewAccount {
    pub fn with_zero_stats(
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            wins: 0,
            games_played: 0,
            kills: 0,
            deaths: 0,
            fav_map_id: None,
        }
    }
}

pub type ArcAccountRepository = Arc<Box<dyn AccountRepository + Send + Sync + 'static>>;

#[async_trait::async_trait]
pub trait AccountRepository {
    async fn insert_account(&self, account: &NewAccount) -> ServiceResult<Account>;
    async fn get_all_accounts(&self) -> ServiceResult<Vec<Account>>;
    async fn get_account_by_username(&self, username: &str) -> ServiceResult<Option<Account>>;
}

/// In-memory repository for tests.
#[derive(Default, Clone)]
pub struct MockAccountRepository {
    accounts: Arc<std::sync::Mutex<Vec<Account>>>,
}

impl MockAccountRepository {
    pub fn account_count(&self) -> usize {
        self.accounts.lock().expect("account mutex poisoned").len()
    }
}

#[async_trait::async_trait]
impl AccountRepository for MockAccountRepository {
    async fn insert_account(&self, account: &NewAccount) -> ServiceResult<Account> {
        let mut accounts = self.accounts.lock().expect("account mutex poisoned");
        if accounts.iter().any(|a| a.username == account.username) {
            return ServiceError::conflict(format!(
                "username [{}] already exists",
                account.username
            ));
        }
        let account = Account {
            acc_id: accounts.len() as AccountId + 1,
            username: account.username.clone(),
            password_hash: account.password_hash.clone(),
            wins: account.wins,
            games_played: account.games_played,
            kills: account.kills,
            deaths: account.deaths,
            fav_map_id: account.fav_map_id,
            created_at: chrono::Local::now().naive_local(),
        };
        accounts.push(account.clone());
        Ok(account)
    }

    async fn get_all_accounts(&self) -> ServiceResult<Vec<Account>> {
        Ok(self
            .accounts
            .lock()
            .expect("account mutex poisoned")
            .clone())
    }

    async fn get_account_by_username(&self, username: &str) -> ServiceResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .expect("account mutex poisoned")
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }
}
