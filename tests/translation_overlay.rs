mod common;

use sqlx::SqlitePool;

use showcase_backend::db::repositories::{CategoryRepository, LanguageRepository};
use showcase_backend::db::{NewCategory, NewLanguage, CATEGORY_SCHEMA};
use showcase_backend::error::AppError;
use showcase_backend::i18n::{registry, EntityTranslations, FieldMap, OverlayStore};
use showcase_backend::middleware::LanguageSelector;

const CATEGORY_TRANSLATIONS: EntityTranslations = EntityTranslations::new(CATEGORY_SCHEMA);

fn shoes_payload() -> NewCategory {
    NewCategory {
        name: "Shoes".to_string(),
        description: Some("Footwear for every season".to_string()),
        image_url: None,
        is_featured: None,
    }
}

async fn create_category(pool: &SqlitePool, payload: &NewCategory) -> i64 {
    let mut tx = pool.begin().await.expect("begin");
    let category = CategoryRepository::create(&mut tx, payload)
        .await
        .expect("create category");
    CATEGORY_TRANSLATIONS
        .on_create(&mut tx, category.id, &payload.translated_fields())
        .await
        .expect("fan out translations");
    tx.commit().await.expect("commit");
    category.id
}

async fn overlay_row_count(pool: &SqlitePool, entity_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM dynamic_translations WHERE entity_type = 'category' AND entity_id = ?1",
    )
    .bind(entity_id)
    .fetch_one(pool)
    .await
    .expect("count overlay rows")
}

#[tokio::test]
async fn create_fans_out_to_every_registered_language() {
    let db = common::setup().await;
    let id = create_category(&db.pool, &shoes_payload()).await;

    let translations = CATEGORY_TRANSLATIONS
        .project_all(&db.pool, id)
        .await
        .expect("project all");

    let codes: Vec<&str> = translations.keys().map(String::as_str).collect();
    assert_eq!(codes, vec!["ar", "en", "fr"]);
    for fields in translations.values() {
        assert_eq!(fields.get("name").map(String::as_str), Some("Shoes"));
        assert_eq!(
            fields.get("description").map(String::as_str),
            Some("Footwear for every season")
        );
    }

    // Two declared fields, three languages.
    assert_eq!(overlay_row_count(&db.pool, id).await, 6);
}

#[tokio::test]
async fn unsupplied_fields_fan_out_as_empty_strings() {
    let db = common::setup().await;
    let payload = NewCategory {
        name: "Bags".to_string(),
        description: None,
        image_url: None,
        is_featured: None,
    };
    let id = create_category(&db.pool, &payload).await;

    let translated = CATEGORY_TRANSLATIONS
        .project(&db.pool, id, "fr")
        .await
        .expect("project fr");
    assert_eq!(translated.get("name").map(String::as_str), Some("Bags"));
    assert_eq!(translated.get("description").map(String::as_str), Some(""));
}

#[tokio::test]
async fn update_writes_one_language_and_leaves_the_others() {
    let db = common::setup().await;
    let id = create_category(&db.pool, &shoes_payload()).await;

    let mut partial = FieldMap::new();
    partial.insert("name".to_string(), "Chaussures".to_string());

    let mut tx = db.pool.begin().await.expect("begin");
    CATEGORY_TRANSLATIONS
        .on_update(&mut tx, id, "fr", &partial)
        .await
        .expect("update fr");
    tx.commit().await.expect("commit");

    let fr = CATEGORY_TRANSLATIONS
        .project(&db.pool, id, "fr")
        .await
        .expect("project fr");
    let en = CATEGORY_TRANSLATIONS
        .project(&db.pool, id, "en")
        .await
        .expect("project en");

    assert_eq!(fr.get("name").map(String::as_str), Some("Chaussures"));
    // Omitted field keeps its fanned-out content.
    assert_eq!(
        fr.get("description").map(String::as_str),
        Some("Footwear for every season")
    );
    assert_eq!(en.get("name").map(String::as_str), Some("Shoes"));
}

#[tokio::test]
async fn upsert_replaces_content_without_duplicating_rows() {
    let db = common::setup().await;
    let id = create_category(&db.pool, &shoes_payload()).await;
    let language = registry::get_by_code(&db.pool, "en").await.expect("en");

    for content in ["First", "Second", "Third"] {
        let mut values = FieldMap::new();
        values.insert("name".to_string(), content.to_string());

        let mut tx = db.pool.begin().await.expect("begin");
        OverlayStore::set_many(&mut tx, "category", id, language.id, &values)
            .await
            .expect("upsert");
        tx.commit().await.expect("commit");
    }

    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM dynamic_translations
        WHERE entity_type = 'category' AND entity_id = ?1
          AND field = 'name' AND language_id = ?2
        "#,
    )
    .bind(id)
    .bind(language.id)
    .fetch_one(&db.pool)
    .await
    .expect("count");
    assert_eq!(count, 1);

    let en = CATEGORY_TRANSLATIONS
        .project(&db.pool, id, "en")
        .await
        .expect("project en");
    assert_eq!(en.get("name").map(String::as_str), Some("Third"));
}

#[tokio::test]
async fn language_added_later_projects_as_empty_fields() {
    let db = common::setup().await;
    let id = create_category(&db.pool, &shoes_payload()).await;

    let mut tx = db.pool.begin().await.expect("begin");
    LanguageRepository::create(
        &mut tx,
        &NewLanguage {
            code: "de".to_string(),
            name: "German".to_string(),
            is_default: None,
        },
    )
    .await
    .expect("register language");
    tx.commit().await.expect("commit");

    let de = CATEGORY_TRANSLATIONS
        .project(&db.pool, id, "de")
        .await
        .expect("project de");
    assert_eq!(de.get("name").map(String::as_str), Some(""));
    assert_eq!(de.get("description").map(String::as_str), Some(""));
}

#[tokio::test]
async fn dropped_transaction_leaves_no_partial_entity_behind() {
    let db = common::setup().await;
    let language_id = registry::get_by_code(&db.pool, "en").await.expect("en").id;

    let entity_id = {
        let mut tx = db.pool.begin().await.expect("begin");
        let category = CategoryRepository::create(&mut tx, &shoes_payload())
            .await
            .expect("create category");

        // Write only one of the declared fields, then abandon the transaction.
        let mut partial = FieldMap::new();
        partial.insert("name".to_string(), "Shoes".to_string());
        OverlayStore::set_many(&mut tx, "category", category.id, language_id, &partial)
            .await
            .expect("upsert");

        tx.rollback().await.expect("rollback");
        category.id
    };

    let base_rows = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories WHERE id = ?1")
        .bind(entity_id)
        .fetch_one(&db.pool)
        .await
        .expect("count categories");
    assert_eq!(base_rows, 0);
    assert_eq!(overlay_row_count(&db.pool, entity_id).await, 0);
}

#[tokio::test]
async fn entity_delete_removes_all_overlay_rows() {
    let db = common::setup().await;
    let id = create_category(&db.pool, &shoes_payload()).await;
    assert!(overlay_row_count(&db.pool, id).await > 0);

    let mut tx = db.pool.begin().await.expect("begin");
    CATEGORY_TRANSLATIONS
        .on_delete(&mut tx, id)
        .await
        .expect("delete translations");
    CategoryRepository::delete(&mut tx, id)
        .await
        .expect("delete category");
    tx.commit().await.expect("commit");

    assert_eq!(overlay_row_count(&db.pool, id).await, 0);
    let translations = CATEGORY_TRANSLATIONS
        .project_all(&db.pool, id)
        .await
        .expect("project all");
    assert!(translations.is_empty());
}

#[tokio::test]
async fn language_delete_cascades_into_the_overlay() {
    let db = common::setup().await;
    let id = create_category(&db.pool, &shoes_payload()).await;
    let arabic = registry::get_by_code(&db.pool, "ar").await.expect("ar");

    let mut tx = db.pool.begin().await.expect("begin");
    OverlayStore::delete_language(&mut tx, arabic.id)
        .await
        .expect("cascade overlay");
    LanguageRepository::delete(&mut tx, arabic.id)
        .await
        .expect("delete language");
    tx.commit().await.expect("commit");

    let translations = CATEGORY_TRANSLATIONS
        .project_all(&db.pool, id)
        .await
        .expect("project all");
    let codes: Vec<&str> = translations.keys().map(String::as_str).collect();
    assert_eq!(codes, vec!["en", "fr"]);

    let orphaned = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM dynamic_translations WHERE language_id = ?1",
    )
    .bind(arabic.id)
    .fetch_one(&db.pool)
    .await
    .expect("count orphans");
    assert_eq!(orphaned, 0);
}

#[tokio::test]
async fn concurrent_upserts_converge_on_a_single_row() {
    let db = common::setup().await;
    let id = create_category(&db.pool, &shoes_payload()).await;
    let language_id = registry::get_by_code(&db.pool, "en").await.expect("en").id;

    let mut handles = Vec::new();
    for n in 0..8 {
        let pool = db.pool.clone();
        handles.push(tokio::spawn(async move {
            let mut values = FieldMap::new();
            values.insert("name".to_string(), format!("Writer {}", n));

            let mut tx = pool.begin().await.expect("begin");
            OverlayStore::set_many(&mut tx, "category", id, language_id, &values)
                .await
                .expect("upsert");
            tx.commit().await.expect("commit");
        }));
    }
    for handle in handles {
        handle.await.expect("join writer");
    }

    let rows = sqlx::query_as::<_, (String,)>(
        r#"
        SELECT content FROM dynamic_translations
        WHERE entity_type = 'category' AND entity_id = ?1
          AND field = 'name' AND language_id = ?2
        "#,
    )
    .bind(id)
    .bind(language_id)
    .fetch_all(&db.pool)
    .await
    .expect("fetch rows");

    assert_eq!(rows.len(), 1);
    assert!(rows[0].0.starts_with("Writer "));
}

#[tokio::test]
async fn selector_resolution_falls_back_to_the_default() {
    let db = common::setup().await;

    let explicit = LanguageSelector::from_code("fr")
        .resolve(&db.pool)
        .await
        .expect("resolve explicit");
    assert_eq!(explicit.code, "fr");

    let fallback = LanguageSelector::default()
        .resolve(&db.pool)
        .await
        .expect("resolve fallback");
    assert_eq!(fallback.code, "en");
}

#[tokio::test]
async fn default_language_is_a_hard_precondition() {
    let db = common::setup().await;

    let default = registry::get_default(&db.pool).await.expect("default");
    assert_eq!(default.code, "en");

    sqlx::query("UPDATE languages SET is_default = 0")
        .execute(&db.pool)
        .await
        .expect("clear defaults");

    let err = registry::get_default(&db.pool).await.unwrap_err();
    assert!(matches!(err, AppError::InconsistentState(_)));
}

#[tokio::test]
async fn claiming_the_default_flag_releases_it_elsewhere() {
    let db = common::setup().await;

    let mut tx = db.pool.begin().await.expect("begin");
    let spanish = LanguageRepository::create(
        &mut tx,
        &NewLanguage {
            code: "es".to_string(),
            name: "Spanish".to_string(),
            is_default: Some(true),
        },
    )
    .await
    .expect("create language");
    tx.commit().await.expect("commit");

    assert!(spanish.is_default);

    let defaults = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM languages WHERE is_default = 1",
    )
    .fetch_one(&db.pool)
    .await
    .expect("count defaults");
    assert_eq!(defaults, 1);

    let default = registry::get_default(&db.pool).await.expect("default");
    assert_eq!(default.code, "es");
}
