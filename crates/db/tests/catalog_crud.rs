//! Integration tests for the distillery, whisky and user repositories.

use dram_db::models::distillery::DistilleryInput;
use dram_db::models::user::CreateUser;
use dram_db::models::whisky::WhiskyInput;
use dram_db::repositories::{DistilleryRepo, StatsRepo, UserRepo, WhiskyRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_distillery(name: &str, country: &str) -> DistilleryInput {
    DistilleryInput {
        name: name.to_string(),
        country: country.to_string(),
        region: Some("Islay".to_string()),
        founded_year: Some(1815),
        description: None,
        logo_url: None,
        website: None,
    }
}

fn new_whisky(name: &str, distillery_id: Option<i64>) -> WhiskyInput {
    WhiskyInput {
        name: name.to_string(),
        distillery_id,
        whisky_type: Some("Single Malt".to_string()),
        country: Some("Scotland".to_string()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Distilleries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_distillery_lookup_is_exact(pool: PgPool) {
    let created = DistilleryRepo::create(&pool, &new_distillery("Ardbeg", "Scotland"))
        .await
        .unwrap();

    let found = DistilleryRepo::find_id_by_name(&pool, "Ardbeg").await.unwrap();
    assert_eq!(found, Some(created.id));

    assert_eq!(DistilleryRepo::find_id_by_name(&pool, "ardbeg").await.unwrap(), None);
    assert_eq!(DistilleryRepo::find_id_by_name(&pool, "Ardbeg ").await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_distillery_name_violates_unique(pool: PgPool) {
    DistilleryRepo::create(&pool, &new_distillery("Ardbeg", "Scotland"))
        .await
        .unwrap();
    let err = DistilleryRepo::create(&pool, &new_distillery("Ardbeg", "France"))
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_distilleries_name"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_details_keeps_name_and_country(pool: PgPool) {
    let created = DistilleryRepo::create(&pool, &new_distillery("Ardbeg", "Scotland"))
        .await
        .unwrap();

    let patch = DistilleryInput {
        name: "Ignored".to_string(),
        country: "Ignored".to_string(),
        region: None,
        founded_year: None,
        description: Some("Peat".to_string()),
        logo_url: None,
        website: None,
    };
    let affected = DistilleryRepo::update_details(&pool, created.id, &patch)
        .await
        .unwrap();
    assert_eq!(affected, 1);

    let stored = DistilleryRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Ardbeg");
    assert_eq!(stored.country, "Scotland");
    assert_eq!(stored.region, None);
    assert_eq!(stored.founded_year, None);
    assert_eq!(stored.description.as_deref(), Some("Peat"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_distilleries_sorted_by_name(pool: PgPool) {
    for name in ["Talisker", "Ardbeg", "Macallan"] {
        DistilleryRepo::create(&pool, &new_distillery(name, "Scotland"))
            .await
            .unwrap();
    }
    let names: Vec<String> = DistilleryRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, ["Ardbeg", "Macallan", "Talisker"]);
}

// ---------------------------------------------------------------------------
// Whiskies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_whisky_join_and_active_filter(pool: PgPool) {
    let distillery = DistilleryRepo::create(&pool, &new_distillery("Ardbeg", "Scotland"))
        .await
        .unwrap();

    let visible = WhiskyRepo::create(&pool, &new_whisky("Ardbeg 10", Some(distillery.id)))
        .await
        .unwrap();
    let hidden = WhiskyInput {
        active: Some(false),
        ..new_whisky("Ardbeg Old", Some(distillery.id))
    };
    WhiskyRepo::create(&pool, &hidden).await.unwrap();

    let listed = WhiskyRepo::list_active(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, visible);
    assert_eq!(listed[0].distillery_name.as_deref(), Some("Ardbeg"));
    assert!(listed[0].active);

    let found = WhiskyRepo::find_by_id(&pool, visible).await.unwrap().unwrap();
    assert_eq!(found.distillery_country.as_deref(), Some("Scotland"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_whisky_exists_is_scoped_to_distillery(pool: PgPool) {
    let a = DistilleryRepo::create(&pool, &new_distillery("Glen A", "Scotland"))
        .await
        .unwrap();
    let b = DistilleryRepo::create(&pool, &new_distillery("Glen B", "Scotland"))
        .await
        .unwrap();
    WhiskyRepo::create(&pool, &new_whisky("Classic", Some(a.id)))
        .await
        .unwrap();

    assert!(WhiskyRepo::exists_for_distillery(&pool, "Classic", a.id).await.unwrap());
    assert!(!WhiskyRepo::exists_for_distillery(&pool, "Classic", b.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deleting_distillery_detaches_whiskies(pool: PgPool) {
    let distillery = DistilleryRepo::create(&pool, &new_distillery("Ardbeg", "Scotland"))
        .await
        .unwrap();
    let id = WhiskyRepo::create(&pool, &new_whisky("Ardbeg 10", Some(distillery.id)))
        .await
        .unwrap();

    assert!(DistilleryRepo::delete(&pool, distillery.id).await.unwrap());

    let whisky = WhiskyRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(whisky.distillery_id, None);
    assert_eq!(whisky.distillery_name, None);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_and_delete_missing_whisky(pool: PgPool) {
    assert!(!WhiskyRepo::update(&pool, 999_999, &new_whisky("Ghost", None)).await.unwrap());
    assert!(!WhiskyRepo::delete(&pool, 999_999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Users and stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_user_lookup_and_stats(pool: PgPool) {
    UserRepo::create(
        &pool,
        &CreateUser {
            username: "admin".to_string(),
            email: Some("admin@example.com".to_string()),
            password_hash: "$argon2id$placeholder".to_string(),
            role: "admin".to_string(),
        },
    )
    .await
    .unwrap();

    let user = UserRepo::find_by_username(&pool, "admin").await.unwrap().unwrap();
    assert_eq!(user.role, "admin");
    assert!(UserRepo::find_by_username(&pool, "nobody").await.unwrap().is_none());

    DistilleryRepo::create(&pool, &new_distillery("Ardbeg", "Scotland"))
        .await
        .unwrap();

    let stats = StatsRepo::counts(&pool).await.unwrap();
    assert_eq!((stats.whiskies, stats.distilleries, stats.users), (0, 1, 1));
    assert_eq!(stats.tastings, 0);
}

// ---------------------------------------------------------------------------
// Migrations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_no_pending_migrations_after_setup(pool: PgPool) {
    assert_eq!(dram_db::pending_migrations(&pool).await.unwrap(), 0);

    sqlx::query("DELETE FROM _sqlx_migrations")
        .execute(&pool)
        .await
        .unwrap();
    assert_eq!(
        dram_db::pending_migrations(&pool).await.unwrap(),
        dram_db::MIGRATOR.iter().count()
    );
}
