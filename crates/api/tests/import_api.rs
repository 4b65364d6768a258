//! HTTP-level tests for the CSV import endpoints.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, get, post_file, viewer_token};
use dram_db::repositories::{DistilleryRepo, WhiskyRepo};
use sqlx::PgPool;

const WHISKY_URI: &str = "/api/import/whiskies";
const DISTILLERY_URI: &str = "/api/import/distilleries";

// ---------------------------------------------------------------------------
// Whisky import
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_whisky_import_reports_counts_and_errors(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    let csv = "name,distillery_name,country,age,abv\n\
               Ardbeg 10,Ardbeg,Scotland,10,46\n\
               Ardbeg 10,Ardbeg,Scotland,,\n\
               ,Ardbeg,Scotland,,\n";
    let response = post_file(app.app(), WHISKY_URI, Some(&token), "file", "w.csv", csv.as_bytes()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["imported"], 1);
    assert_eq!(json["skipped"], 2);
    assert!(json.get("updated").is_none());
    assert_eq!(json["message"], "Import terminé: 1 importés, 2 ignorés");
    assert_eq!(json["errors"][0], "Line 2: whisky \"Ardbeg 10\" already exists");
    assert_eq!(json["errors"][1], "Line 3: missing required fields (name)");

    let distillery_id = DistilleryRepo::find_id_by_name(&pool, "Ardbeg")
        .await
        .unwrap()
        .expect("distillery created by the import");
    assert!(WhiskyRepo::exists_for_distillery(&pool, "Ardbeg 10", distillery_id)
        .await
        .unwrap());

    assert_eq!(app.staged_file_count(), 0, "staged CSV must be removed");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_imported_whisky_is_listed_with_its_distillery(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let csv = "name,distillery_name,country,price\nYamazaki 12,Yamazaki,Japan,\"89,50\"\n";
    let response = post_file(app.app(), WHISKY_URI, Some(&token), "file", "w.csv", csv.as_bytes()).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(get(app.app(), "/api/whiskies").await).await;
    let whiskies = json.as_array().unwrap();
    assert_eq!(whiskies.len(), 1);
    assert_eq!(whiskies[0]["name"], "Yamazaki 12");
    assert_eq!(whiskies[0]["type"], "Single Malt");
    assert_eq!(whiskies[0]["price"], 89.5);
    assert_eq!(whiskies[0]["distillery_name"], "Yamazaki");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_header_only_file_imports_nothing(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let csv = "name,distillery_name,country\n";
    let response = post_file(app.app(), WHISKY_URI, Some(&token), "file", "w.csv", csv.as_bytes()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["imported"], 0);
    assert_eq!(json["skipped"], 0);
    assert!(json.get("errors").is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_csv_aborts_and_cleans_up(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    let mut csv = b"name,distillery_name,country\nArdbeg 10,Ardbeg,Scotland\n".to_vec();
    csv.extend_from_slice(b"Bad \xff row,Ardbeg,Scotland\n");
    let response = post_file(app.app(), WHISKY_URI, Some(&token), "file", "w.csv", &csv).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "IMPORT_FAILED");

    // Rows before the broken record stay committed.
    assert_eq!(WhiskyRepo::list_active(&pool).await.unwrap().len(), 1);
    assert_eq!(app.staged_file_count(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_file_field_is_bad_request(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let response = post_file(app.app(), WHISKY_URI, Some(&token), "upload", "w.csv", b"name\n").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_oversized_file_is_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let mut csv = b"name,distillery_name,country\n".to_vec();
    csv.resize(app.config.max_upload_bytes + 1, b'a');
    let response = post_file(app.app(), WHISKY_URI, Some(&token), "file", "w.csv", &csv).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.staged_file_count(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_body_beyond_multipart_allowance_is_rejected(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    // Past the file limit plus the 64 KiB multipart allowance.
    let mut csv = b"name,distillery_name,country\n".to_vec();
    csv.resize(app.config.max_upload_bytes + 2 * 64 * 1024, b'a');
    let response = post_file(app.app(), WHISKY_URI, Some(&token), "file", "w.csv", &csv).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.staged_file_count(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_out_of_range_values_skip_the_row(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let csv = "name,distillery_name,country,abv,age\n\
               Too Strong,Ardbeg,Scotland,150,10\n\
               Uigeadail,Ardbeg,Scotland,54.2,\n\
               Negative,Ardbeg,Scotland,40,-3\n";
    let response = post_file(app.app(), WHISKY_URI, Some(&token), "file", "w.csv", csv.as_bytes()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["imported"], 1);
    assert_eq!(json["skipped"], 2);
    let errors = json["errors"].as_array().unwrap();
    assert!(errors[0].as_str().unwrap().starts_with("Line 1:"));
    assert!(errors[1].as_str().unwrap().starts_with("Line 3:"));
}

// ---------------------------------------------------------------------------
// Distillery import
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_distillery_import_inserts_then_updates(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool.clone());

    let first = "name,country,region\nLagavulin,Scotland,Islay\nTalisker,Scotland,\n";
    let response = post_file(app.app(), DISTILLERY_URI, Some(&token), "file", "d.csv", first.as_bytes()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["imported"], 2);
    assert_eq!(json["updated"], 0);
    assert_eq!(json["message"], "Import terminé: 2 importés, 0 mis à jour, 0 ignorés");

    let second = "name,country,region,founded_year\nTalisker,Scotland,Skye,1830\n";
    let response = post_file(app.app(), DISTILLERY_URI, Some(&token), "file", "d.csv", second.as_bytes()).await;
    let json = body_json(response).await;
    assert_eq!(json["imported"], 0);
    assert_eq!(json["updated"], 1);

    let id = DistilleryRepo::find_id_by_name(&pool, "Talisker")
        .await
        .unwrap()
        .unwrap();
    let talisker = DistilleryRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(talisker.region.as_deref(), Some("Skye"));
    assert_eq!(talisker.founded_year, Some(1830));
    assert_eq!(DistilleryRepo::list(&pool).await.unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_distillery_import_skips_rows_without_country(pool: PgPool) {
    let token = admin_token(&pool).await;
    let app = common::build_test_app(pool);

    let csv = "name,country\nSpringbank,\n";
    let response = post_file(app.app(), DISTILLERY_URI, Some(&token), "file", "d.csv", csv.as_bytes()).await;

    let json = body_json(response).await;
    assert_eq!(json["skipped"], 1);
    assert_eq!(json["errors"][0], "Line 1: missing required fields (country)");
}

// ---------------------------------------------------------------------------
// Access control
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_file(app.app(), WHISKY_URI, None, "file", "w.csv", b"name\n").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_import_requires_admin_role(pool: PgPool) {
    let token = viewer_token(&pool).await;
    let app = common::build_test_app(pool);
    let response = post_file(app.app(), DISTILLERY_URI, Some(&token), "file", "d.csv", b"name\n").await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
