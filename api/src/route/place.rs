use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::place::{delete_place, list_places, register_place, show_place, update_place};

pub fn build_place_routers() -> Router<AppRegistry> {
    let place_routers = Router::new()
        .route("/", post(register_place))
        .route("/", get(list_places))
        .route("/:place_id", get(show_place))
        .route("/:place_id", put(update_place))
        .route("/:place_id", delete(delete_place));

    Router::new().nest("/places", place_routers)
}
