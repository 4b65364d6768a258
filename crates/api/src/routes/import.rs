use axum::routing::post;
use axum::Router;

use crate::handlers::import;
use crate::state::AppState;

/// Routes mounted at `/import`.
///
/// ```text
/// POST /whiskies        CSV whisky import (admin)
/// POST /distilleries    CSV distillery import (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/whiskies", post(import::import_whiskies))
        .route("/distilleries", post(import::import_distilleries))
}
