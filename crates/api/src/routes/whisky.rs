use axum::routing::get;
use axum::Router;

use crate::handlers::whisky;
use crate::state::AppState;

/// Routes mounted at `/whiskies`.
///
/// ```text
/// GET    /        list active whiskies
/// POST   /        create (admin)
/// GET    /{id}    get by id
/// PUT    /{id}    replace (admin)
/// DELETE /{id}    delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(whisky::list).post(whisky::create))
        .route(
            "/{id}",
            get(whisky::get_by_id)
                .put(whisky::update)
                .delete(whisky::delete),
        )
}
