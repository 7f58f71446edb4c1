//! Account routes, mounted under `/api`.

use crate::handlers::account::{create_account, get_account_by_id, list_accounts};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn account_routes(state: AppState) -> Router {
    Router::new()
        .route("/Account", get(list_accounts).post(create_account))
        .route("/Account/:id", get(get_account_by_id))
        .with_state(state)
}
