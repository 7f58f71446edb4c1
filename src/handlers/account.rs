//! Account endpoints: paged listing, single fetch, create.

use super::decode_body;
use crate::error::AppError;
use crate::model::account::{AccountDto, AccountForCreation};
use crate::query::params::AccountParameters;
use crate::response::{location_header, pagination_headers};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use uuid::Uuid;

pub async fn list_accounts(
    State(state): State<AppState>,
    Query(params): Query<AccountParameters>,
) -> Result<impl IntoResponse, AppError> {
    let accounts = state.accounts.get_accounts(&params).await?;
    tracing::info!(total = accounts.meta.total_count, "returned accounts page");
    let headers = pagination_headers(&accounts.meta);
    let accounts = accounts.map(AccountDto::from);
    Ok((StatusCode::OK, headers, Json(accounts.items)))
}

pub async fn get_account_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    match state.accounts.get_account_by_id(id).await? {
        Some(account) => Ok((StatusCode::OK, Json(AccountDto::from(account)))),
        None => Err(AppError::NotFound(format!("account {}", id))),
    }
}

pub async fn create_account(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let dto: AccountForCreation = decode_body(body)?;
    dto.validate()?;
    let account = state.accounts.create_account(&dto).await?;
    tracing::info!(id = %account.id, owner = %account.owner_id, "created account");
    let headers = location_header(format!("/api/Account/{}", account.id));
    Ok((StatusCode::CREATED, headers, Json(AccountDto::from(account))))
}
