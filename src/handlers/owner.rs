//! Owner endpoints: paged/shaped listing, single fetch, create, update,
//! delete, and the per-owner account listing.

use super::decode_body;
use crate::error::AppError;
use crate::links::{links_for_owner, links_for_owner_list, LinkCollection, LinkedEntity};
use crate::model::account::AccountDto;
use crate::model::owner::{OwnerDto, OwnerForCreation, OwnerForUpdate};
use crate::query::params::{AccountParameters, OwnerParameters};
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

pub async fn list_owners(
    State(state): State<AppState>,
    Query(params): Query<OwnerParameters>,
) -> Result<impl IntoResponse, AppError> {
    if !params.valid_year_range() {
        return Err(AppError::Validation(
            "Max year of birth cannot be less than min year of birth".into(),
        ));
    }

    let owners = state.owners.get_owners(&params).await?;
    tracing::info!(total = owners.meta.total_count, "returned owners page");

    let headers = pagination_headers(&owners.meta);
    let value: Vec<LinkedEntity> = owners
        .items
        .into_iter()
        .map(|entity| {
            let links = links_for_owner(entity.id, &params.fields);
            LinkedEntity { entity, links }
        })
        .collect();
    let body = LinkCollection {
        value,
        links: links_for_owner_list(),
    };
    Ok((StatusCode::OK, headers, Json(body)))
}

pub async fn get_owner_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<OwnerParameters>,
) -> Result<impl IntoResponse, AppError> {
    match state.owners.get_owner_shaped(id, &params.fields).await? {
        Some(owner) => {
            tracing::info!(%id, "returned owner");
            Ok((StatusCode::OK, Json(owner)))
        }
        None => Err(AppError::NotFound(format!("owner {}", id))),
    }
}

pub async fn create_owner(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let dto: OwnerForCreation = decode_body(body)?;
    dto.validate()?;
    let owner = state.owners.create_owner(&dto).await?;
    tracing::info!(id = %owner.id, "created owner");
    let headers = location_header(format!("/api/owner/{}", owner.id));
    Ok((StatusCode::CREATED, headers, Json(OwnerDto::from(owner))))
}

pub async fn update_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    let dto: OwnerForUpdate = decode_body(body)?;
    dto.validate()?;
    match state.owners.update_owner(id, &dto).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound(format!("owner {}", id))),
    }
}

pub async fn delete_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    if state.owners.get_owner_by_id(id).await?.is_none() {
        return Err(AppError::NotFound(format!("owner {}", id)));
    }
    if state.accounts.exists_for_owner(id).await? {
        tracing::error!(%id, "cannot delete owner with related accounts");
        return Err(AppError::Conflict(
            "Cannot delete owner. It has related accounts. Delete those accounts first".into(),
        ));
    }
    state.owners.delete_owner(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn accounts_for_owner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<AccountParameters>,
) -> Result<impl IntoResponse, AppError> {
    let accounts = state.accounts.accounts_by_owner(id, &params).await?;
    tracing::info!(total = accounts.meta.total_count, owner = %id, "returned accounts page");
    let headers = pagination_headers(&accounts.meta);
    let accounts = accounts.map(AccountDto::from);
    Ok((StatusCode::OK, headers, Json(accounts.items)))
}
