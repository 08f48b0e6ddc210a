use axum::{
    routing::{delete, get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::city::{delete_city, list_state_cities, register_city, show_city};

pub fn build_city_routers() -> Router<AppRegistry> {
    let city_routers = Router::new()
        .route("/", post(register_city))
        .route("/", get(list_state_cities))
        .route("/:city_id", get(show_city))
        .route("/:city_id", delete(delete_city));

    Router::new().nest("/states/:state_id/cities", city_routers)
}
