//! Owner routes, mounted under `/api`.

use crate::handlers::owner::{
    accounts_for_owner, create_owner, delete_owner, get_owner_by_id, list_owners, update_owner,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn owner_routes(state: AppState) -> Router {
    Router::new()
        .route("/owner", get(list_owners).post(create_owner))
        .route(
            "/owner/:id",
            get(get_owner_by_id).put(update_owner).delete(delete_owner),
        )
        .route("/owner/:id/Accounts", get(accounts_for_owner))
        .with_state(state)
}
