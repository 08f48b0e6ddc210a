use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::health::{health_check_db, index};

pub fn build_health_check_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/", get(index))
        .route("/health/db", get(health_check_db))
}
