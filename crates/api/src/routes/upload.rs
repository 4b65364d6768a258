use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/photo", post(upload::upload_photo))
}
