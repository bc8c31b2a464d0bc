use sqlx::{Pool, Row, Sqlite, sqlite::SqliteRow};

use account_server_domain::{
    ServiceError, ServiceResult,
    account::{Account, AccountRepository, NewAccount},
};

use crate::create_account_db_pool;

pub struct SqliteAccountRepository {
    pool: Pool<Sqlite>,
}

impl SqliteAccountRepository {
    pub fn new() -> Self {
        let pool = create_account_db_pool();
        Self { pool }
    }

    pub fn with_pool(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    fn account_from_row(row: &SqliteRow) -> sqlx::Result<Account> {
        Ok(Account {
            acc_id: row.try_get("acc_id")?,
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            wins: row.try_get("wins")?,
            games_played: row.try_get("games_played")?,
            kills: row.try_get("kills")?,
            deaths: row.try_get("deaths")?,
            fav_map_id: row.try_get("fav_map_id")?,
            created_at: row.try_get("created_at")?,
        })
    }
}

impl Default for SqliteAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn map_sqlx_error(e: sqlx::Error) -> ServiceError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            ServiceError::Conflict("username already exists".to_string())
        }
        _ => ServiceError::Internal(e.to_string()),
    }
}

#[async_trait::async_trait]
impl AccountRepository for SqliteAccountRepository {
    async fn insert_account(&self, account: &NewAccount) -> ServiceResult<Account> {
        let created_at = chrono::Local::now().naive_local();
        let result = sqlx::query(
            "INSERT INTO accounts (username, password_hash, wins, games_played, kills, deaths, fav_map_id, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&account.username)
        .bind(&account.password_hash)
        .bind(account.wins)
        .bind(account.games_played)
        .bind(account.kills)
        .bind(account.deaths)
        .bind(account.fav_map_id)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(Account {
            acc_id: result.last_insert_rowid(),
            username: account.username.clone(),
            password_hash: account.password_hash.clone(),
            wins: account.wins,
            games_played: account.games_played,
            kills: account.kills,
            deaths: account.deaths,
            fav_map_id: account.fav_map_id,
            created_at,
        })
    }

    async fn get_all_accounts(&self) -> ServiceResult<Vec<Account>> {
        let rows = sqlx::query("SELECT * FROM accounts")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        rows.iter()
            .map(|row| {
                Self::account_from_row(row).map_err(|e| ServiceError::Internal(e.to_string()))
            })
            .collect()
    }

    async fn get_account_by_username(&self, username: &str) -> ServiceResult<Option<Account>> {
        let row = sqlx::query("SELECT * FROM accounts WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        row.as_ref()
            .map(Self::account_from_row)
            .transpose()
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }
}
