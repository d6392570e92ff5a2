use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::middleware::role::require_user_manager;
use crate::state::AppState;

use super::controller::{
    change_role, check_access, get_me, get_role, get_roles, validate_assignment,
};

pub fn init_access_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/me", get(get_me))
        .route("/check", post(check_access))
        .route("/roles", get(get_roles))
        .route("/roles/{role}", get(get_role))
        .nest("/assignments", init_assignments_router(state))
}

fn init_assignments_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/validate", post(validate_assignment))
        .route("/role-change", post(change_role))
        .route_layer(middleware::from_fn_with_state(state, require_user_manager))
}
