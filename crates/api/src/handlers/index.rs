//! Service banner at `GET /api` and the empty listings route.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EndpointList {
    pub public: &'static [&'static str],
    pub protected: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: EndpointList,
}

/// GET /api
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Whisky catalog API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: EndpointList {
            public: &[
                "GET /api/whiskies",
                "GET /api/whiskies/{id}",
                "GET /api/distilleries",
                "GET /api/distilleries/{id}",
                "GET /api/stats",
                "GET /api/annonces",
                "POST /api/login",
            ],
            protected: &[
                "POST /api/whiskies",
                "PUT /api/whiskies/{id}",
                "DELETE /api/whiskies/{id}",
                "POST /api/distilleries",
                "PUT /api/distilleries/{id}",
                "DELETE /api/distilleries/{id}",
                "POST /api/import/whiskies",
                "POST /api/import/distilleries",
                "POST /api/uploads/photo",
            ],
        },
    })
}

/// GET /api/annonces
///
/// Listings are not part of the catalog; the route stays so older frontends
/// get an empty list instead of a 404.
pub async fn annonces() -> Json<Vec<serde_json::Value>> {
    Json(Vec::new())
}
