use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod home;

// Build the app router without binding state; it will be provided at the top level.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/Home/GetAction", get(home::get_action))
        .route("/Home/UpdateAction", post(home::update_action))
        .route("/Home/ExecuteAction", post(home::execute_action))
}
