use erpview_store::{
    Environment, Error, MemoryStore, PromoteOptions, PromotionError, RecordStore, SqliteStore,
    ViewConfigStore,
};
use chrono::{TimeZone, Utc};
use erpview_types::{
    ComponentPath, DevelopmentStatus, DevelopmentViewPayload, DynamicViewConfig, NewPublishedView,
    PublishedStatus, TextProps, ViewComponent,
};
use std::sync::Arc;

fn memory_views() -> (Arc<MemoryStore>, ViewConfigStore) {
    let backend = Arc::new(MemoryStore::new());
    let records = RecordStore::new(backend.clone(), Environment::Development);
    (backend, ViewConfigStore::new(records))
}

fn draft(alias: &str) -> DynamicViewConfig {
    let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
    let mut config = DynamicViewConfig::draft("user-1", now);
    config.name = format!("View {}", alias);
    config.alias = alias.to_string();
    config.components.push(ViewComponent::text(
        "title",
        TextProps {
            content: Some("Materiais".to_string()),
            ..Default::default()
        },
    ));
    config
}

fn payload(alias: &str) -> DevelopmentViewPayload {
    DevelopmentViewPayload::from_config(&draft(alias), "user-1").unwrap()
}

fn published(alias: &str, roles: &[&str]) -> NewPublishedView {
    NewPublishedView {
        module_id: "materials".to_string(),
        name: alias.to_uppercase(),
        description: String::new(),
        alias: alias.to_string(),
        component_path: format!("materials/{}", alias),
        required_roles: roles.iter().map(|r| r.to_string()).collect(),
        required_permissions: Vec::new(),
        status: PublishedStatus::Active,
    }
}

#[tokio::test]
async fn test_collections_are_environment_qualified() {
    let (backend, views) = memory_views();
    views.create_development(&payload("demo01")).await.unwrap();

    assert_eq!(backend.len("development_views_dev"), 1);
    assert_eq!(backend.len("development_views_prod"), 0);
}

#[tokio::test]
async fn test_development_round_trip_keeps_schema() {
    let (_, views) = memory_views();
    let created = views.create_development(&payload("demo01")).await.unwrap();

    let found = views
        .find_resolvable_development("demo01")
        .await
        .unwrap()
        .expect("development view should resolve");
    assert_eq!(found.id, created.id);
    assert_eq!(found.config().unwrap(), draft("demo01"));
    assert_eq!(found.status, DevelopmentStatus::Development);
}

#[tokio::test]
async fn test_ready_views_do_not_resolve() {
    let (_, views) = memory_views();
    let created = views.create_development(&payload("demo01")).await.unwrap();
    views
        .set_development_status(&created.id, DevelopmentStatus::Ready)
        .await
        .unwrap();

    assert!(
        views
            .find_resolvable_development("demo01")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_duplicate_draft_alias_is_rejected() {
    let (_, views) = memory_views();
    let first = views.create_development(&payload("demo01")).await.unwrap();

    let err = views
        .create_development(&payload("demo01"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    // Updating the holder itself is fine
    views
        .update_development(&first.id, &payload("demo01"))
        .await
        .unwrap();

    // Once published, the alias is free for a new draft
    views
        .set_development_status(&first.id, DevelopmentStatus::Published)
        .await
        .unwrap();
    views.create_development(&payload("demo01")).await.unwrap();
}

#[tokio::test]
async fn test_update_keeps_original_author() {
    let (_, views) = memory_views();
    let created = views.create_development(&payload("demo01")).await.unwrap();

    let mut changed = payload("demo01");
    changed.created_by = "someone-else".to_string();
    changed.name = "Renamed".to_string();
    let updated = views
        .update_development(&created.id, &changed)
        .await
        .unwrap();

    assert_eq!(updated.created_by, "user-1");
    assert_eq!(updated.name, "Renamed");
}

#[tokio::test]
async fn test_active_published_lookup_filters_by_role() {
    let (_, views) = memory_views();
    views
        .insert_published(&published("usr001", &["admin", "manager"]))
        .await
        .unwrap();

    assert!(
        views
            .find_active_published("usr001", "manager")
            .await
            .unwrap()
            .is_some()
    );
    assert!(
        views
            .find_active_published("usr001", "operator")
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_inactive_published_view_is_skipped() {
    let (_, views) = memory_views();
    let row = views
        .insert_published(&published("usr001", &["admin"]))
        .await
        .unwrap();
    views
        .set_published_status(&row.id, PublishedStatus::Inactive)
        .await
        .unwrap();

    assert!(
        views
            .find_active_published("usr001", "admin")
            .await
            .unwrap()
            .is_none()
    );
    // The alias is free again
    views
        .insert_published(&published("usr001", &["admin"]))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_promotion_publishes_and_marks_source() {
    let (_, views) = memory_views();
    let created = views.create_development(&payload("demo01")).await.unwrap();

    let report = views
        .promote(&created.id, &PromoteOptions::new("materials"))
        .await
        .unwrap();

    assert_eq!(
        ComponentPath::parse(&report.published.component_path),
        ComponentPath::Dynamic(created.id.clone())
    );
    assert_eq!(report.published.required_roles, vec!["admin".to_string()]);
    assert!(report.published.required_permissions.is_empty());
    assert_eq!(report.published.status, PublishedStatus::Active);

    let source = views.get_development(&created.id).await.unwrap().unwrap();
    assert_eq!(source.status, DevelopmentStatus::Published);

    let again = views
        .promote(&created.id, &PromoteOptions::new("materials"))
        .await
        .unwrap_err();
    assert!(matches!(again, PromotionError::AlreadyPublished { .. }));
}

#[tokio::test]
async fn test_promotion_of_missing_view() {
    let (_, views) = memory_views();
    let err = views
        .promote("nope", &PromoteOptions::new("materials"))
        .await
        .unwrap_err();
    assert!(matches!(err, PromotionError::NotFound { .. }));
}

#[tokio::test]
async fn test_promotion_conflicts_with_active_alias() {
    let (_, views) = memory_views();
    views
        .insert_published(&published("demo01", &["admin"]))
        .await
        .unwrap();
    let created = views.create_development(&payload("demo01")).await.unwrap();

    let err = views
        .promote(&created.id, &PromoteOptions::new("materials"))
        .await
        .unwrap_err();
    assert!(matches!(err, PromotionError::Store(Error::Conflict(_))));

    // Source untouched
    let source = views.get_development(&created.id).await.unwrap().unwrap();
    assert_eq!(source.status, DevelopmentStatus::Development);
}

#[tokio::test]
async fn test_sqlite_backend_serves_view_store() {
    let backend = Arc::new(SqliteStore::open_in_memory().unwrap());
    let views = ViewConfigStore::new(RecordStore::new(backend, Environment::Production));

    let created = views.create_development(&payload("demo01")).await.unwrap();
    let listed = views.list_development().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);

    views.delete_development(&created.id).await.unwrap();
    assert!(views.list_development().await.unwrap().is_empty());
}
