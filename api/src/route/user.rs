use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::user::{delete_user, list_users, register_user, show_user, update_user};

pub fn build_user_routers() -> Router<AppRegistry> {
    let user_routers = Router::new()
        .route("/", post(register_user))
        .route("/", get(list_users))
        .route("/:user_id", get(show_user))
        .route("/:user_id", put(update_user))
        .route("/:user_id", delete(delete_user));

    Router::new().nest("/users", user_routers)
}
