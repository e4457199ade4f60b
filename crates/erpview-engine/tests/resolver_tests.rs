mod common;

use common::Harness;
use erpview_engine::{Resolution, ResolveError};
use erpview_testing::Operation;
use erpview_testing::fixtures::{demo01, published_view};
use erpview_types::{DevelopmentStatus, ViewType};
use serde_json::json;

#[tokio::test]
async fn test_published_view_wins_over_draft_with_same_alias() {
    let h = Harness::new();
    h.save_draft(&demo01()).await;
    h.views
        .insert_published(&published_view("demo01", "materials/list", &["admin", "manager"]))
        .await
        .unwrap();

    let resolved = h.resolver().resolve("demo01", "manager").await.unwrap();

    assert_eq!(resolved.view_id, "demo01");
    assert_eq!(resolved.view_type, ViewType::Database);
    assert_eq!(resolved.component_path.as_deref(), Some("materials/list"));
    assert!(resolved.config.is_none());
}

#[tokio::test]
async fn test_role_outside_published_roles_falls_through_to_draft() {
    let h = Harness::new();
    h.save_draft(&demo01()).await;
    h.views
        .insert_published(&published_view("demo01", "materials/list", &["admin"]))
        .await
        .unwrap();

    let resolved = h.resolver().resolve("demo01", "seller").await.unwrap();
    assert_eq!(resolved.view_type, ViewType::Development);
}

#[tokio::test]
async fn test_development_tier_round_trips_schema() {
    let h = Harness::new();
    let id = h.save_draft(&demo01()).await;

    let resolved = h.resolver().resolve("demo01", "admin").await.unwrap();

    // Stored schemas carry no id; resolution fills in the row id.
    let mut expected = demo01();
    expected.id = Some(id);
    assert_eq!(resolved.view_type, ViewType::Development);
    assert_eq!(resolved.config, Some(expected));
    assert!(resolved.component_path.is_none());
}

#[tokio::test]
async fn test_testing_status_resolves_but_ready_does_not() {
    let h = Harness::new();
    let id = h.save_draft(&demo01()).await;

    h.views
        .set_development_status(&id, DevelopmentStatus::Testing)
        .await
        .unwrap();
    assert!(h.resolver().resolve("demo01", "admin").await.is_ok());

    h.views
        .set_development_status(&id, DevelopmentStatus::Ready)
        .await
        .unwrap();
    assert_eq!(
        h.resolver().resolve("demo01", "admin").await,
        Err(ResolveError::NotFound {
            alias: "demo01".to_string()
        })
    );
}

#[tokio::test]
async fn test_hardcoded_alias_without_records() {
    let h = Harness::new();

    for alias in ["usr001", "mcat02", "cr003"] {
        let resolved = h.resolver().resolve(alias, "seller").await.unwrap();
        assert_eq!(resolved.view_type, ViewType::Hardcoded);
        assert!(resolved.config.is_none());
        assert!(resolved.component_path.is_none());
    }
}

#[tokio::test]
async fn test_unknown_alias_is_not_found() {
    let h = Harness::new();
    let err = h.resolver().resolve("zzz999", "admin").await.unwrap_err();
    assert_eq!(
        err,
        ResolveError::NotFound {
            alias: "zzz999".to_string()
        }
    );
}

#[tokio::test]
async fn test_malformed_schema_is_invalid_config() {
    let h = Harness::new();
    let row = json!({
        "name": "Quebrada",
        "description": "",
        "alias": "broken",
        "schema_json": { "components": "not a list" },
        "created_by": "user-1",
        "status": "development"
    });
    h.views
        .records()
        .insert("development_views", row.as_object().cloned().unwrap())
        .await
        .unwrap();

    let err = h.resolver().resolve("broken", "admin").await.unwrap_err();
    assert!(matches!(err, ResolveError::InvalidConfig { ref alias, .. } if alias == "broken"));
}

#[tokio::test]
async fn test_failed_tier_is_skipped_when_a_later_tier_matches() {
    let h = Harness::new();
    h.save_draft(&demo01()).await;
    h.faults.fail(Operation::Select, "published_views");

    let resolved = h.resolver().resolve("demo01", "admin").await.unwrap();
    assert_eq!(resolved.view_type, ViewType::Development);

    let resolved = h.resolver().resolve("usr001", "admin").await.unwrap();
    assert_eq!(resolved.view_type, ViewType::Hardcoded);
}

#[tokio::test]
async fn test_store_failure_is_reported_instead_of_not_found() {
    let h = Harness::new();
    h.faults.fail(Operation::Select, "development_views");

    let err = h.resolver().resolve("zzz999", "admin").await.unwrap_err();
    assert!(matches!(err, ResolveError::Store(_)));
}

#[tokio::test]
async fn test_detailed_resolution_keeps_record() {
    let h = Harness::new();
    let id = h.save_draft(&demo01()).await;

    match h
        .resolver()
        .resolve_detailed("demo01", "admin")
        .await
        .unwrap()
    {
        Resolution::Development { record, config } => {
            assert_eq!(record.id, id);
            assert_eq!(config.alias, "demo01");
        }
        other => panic!("expected a development resolution, got {:?}", other),
    }
}

#[tokio::test]
async fn test_mistyped_prop_still_resolves() {
    let h = Harness::new();
    let mut view = demo01();
    view.alias = "num01".to_string();
    view.components = vec![
        serde_json::from_value(json!({
            "id": "n1",
            "type": "text",
            "props": { "content": 42, "variant": "h2" }
        }))
        .unwrap(),
    ];
    view.data_sources.clear();
    view.queries.clear();
    h.save_draft(&view).await;

    let resolved = h.resolver().resolve("num01", "admin").await.unwrap();

    assert_eq!(resolved.view_type, ViewType::Development);
    let config = resolved.config.unwrap();
    assert_eq!(config.components[0].body.malformed_props(), vec!["content"]);
}
