//! Account persistence and paged account queries.

use crate::error::AppError;
use crate::model::account::{Account, AccountForCreation};
use crate::query::page::PagedList;
use crate::query::params::AccountParameters;
use crate::query::sort::apply_sort;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        AccountRepository { pool }
    }

    /// Sorted, paged account listing.
    pub async fn get_accounts(
        &self,
        params: &AccountParameters,
    ) -> Result<PagedList<Account>, AppError> {
        let mut accounts = sqlx::query_as::<_, Account>(
            "SELECT id, date_created, account_type, owner_id FROM accounts",
        )
        .fetch_all(&self.pool)
        .await?;
        apply_sort(&mut accounts, &params.order_by);
        Ok(PagedList::from_items(
            accounts,
            params.page_number,
            params.page_size(),
        ))
    }

    /// Accounts of one owner, sorted and paged. An unknown owner id simply
    /// yields an empty page.
    pub async fn accounts_by_owner(
        &self,
        owner_id: Uuid,
        params: &AccountParameters,
    ) -> Result<PagedList<Account>, AppError> {
        let mut accounts = sqlx::query_as::<_, Account>(
            "SELECT id, date_created, account_type, owner_id FROM accounts WHERE owner_id = $1",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        apply_sort(&mut accounts, &params.order_by);
        Ok(PagedList::from_items(
            accounts,
            params.page_number,
            params.page_size(),
        ))
    }

    pub async fn get_account_by_id(&self, id: Uuid) -> Result<Option<Account>, AppError> {
        let account = sqlx::query_as::<_, Account>(
            "SELECT id, date_created, account_type, owner_id FROM accounts WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(account)
    }

    pub async fn create_account(&self, dto: &AccountForCreation) -> Result<Account, AppError> {
        let account = sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (id, date_created, account_type, owner_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id, date_created, account_type, owner_id",
        )
        .bind(Uuid::new_v4())
        .bind(dto.date_created)
        .bind(&dto.account_type)
        .bind(dto.owner_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(account)
    }

    /// Whether any account references this owner. The owner delete handler
    /// asks this before deleting.
    pub async fn exists_for_owner(&self, owner_id: Uuid) -> Result<bool, AppError> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM accounts WHERE owner_id = $1)")
                .bind(owner_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}
