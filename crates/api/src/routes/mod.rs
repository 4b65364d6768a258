pub mod auth;
pub mod distillery;
pub mod health;
pub mod import;
pub mod stats;
pub mod upload;
pub mod whisky;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                       service banner (GET)
/// /login                  admin login (POST)
/// /stats                  catalog counts (GET)
/// /annonces               always an empty list (GET)
///
/// /whiskies               list (public), create (admin)
/// /whiskies/{id}          get (public), update, delete (admin)
///
/// /distilleries           list (public), create (admin)
/// /distilleries/{id}      get (public), update, delete (admin)
///
/// /import/whiskies        CSV import, multipart `file` (admin)
/// /import/distilleries    CSV import, multipart `file` (admin)
///
/// /uploads/photo          photo upload, multipart `photo` (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/annonces", get(handlers::index::annonces))
        .merge(auth::router())
        .merge(stats::router())
        .nest("/whiskies", whisky::router())
        .nest("/distilleries", distillery::router())
        .nest("/import", import::router())
        .nest("/uploads", upload::router())
}
