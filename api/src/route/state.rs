use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::state::{delete_state, list_states, register_state, show_state};

pub fn build_state_routers() -> Router<AppRegistry> {
    let state_routers = Router::new()
        .route("/", post(register_state))
        .route("/", get(list_states))
        .route("/:state_id", get(show_state))
        .route("/:state_id", delete(delete_state));

    Router::new().nest("/states", state_routers)
}
