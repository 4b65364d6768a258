use axum::routing::get;
use axum::Router;

use crate::handlers::distillery;
use crate::state::AppState;

/// Routes mounted at `/distilleries`.
///
/// ```text
/// GET    /        list
/// POST   /        create (admin)
/// GET    /{id}    get by id
/// PUT    /{id}    replace (admin)
/// DELETE /{id}    delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(distillery::list).post(distillery::create))
        .route(
            "/{id}",
            get(distillery::get_by_id)
                .put(distillery::update)
                .delete(distillery::delete),
        )
}
