mod common;

use common::{Harness, admin, seller};
use erpview_engine::{Navigation, Navigator, OpenError, OpenedView};
use erpview_store::PromoteOptions;
use erpview_testing::fixtures::{demo01, published_view};
use erpview_types::{ComponentPath, Principal, ViewType};

#[tokio::test]
async fn test_static_published_view() {
    let h = Harness::new();
    h.views
        .insert_published(&published_view("mat010", "materials/list", &["admin"]))
        .await
        .unwrap();

    let opened = h.opener().open("mat010", &admin()).await.unwrap();
    assert_eq!(
        opened,
        OpenedView::Static {
            alias: "mat010".to_string(),
            component_path: "materials/list".to_string(),
        }
    );
}

#[tokio::test]
async fn test_published_view_rechecks_permissions() {
    let h = Harness::new();
    let mut view = published_view("mat010", "materials/list", &["admin"]);
    view.required_permissions = vec!["materials.read".to_string()];
    h.views.insert_published(&view).await.unwrap();

    let err = h.opener().open("mat010", &admin()).await.unwrap_err();
    assert!(matches!(err, OpenError::Forbidden { ref reason, .. } if reason.contains("materials.read")));

    let reader = Principal::new("admin").with_permissions(["materials.read"]);
    assert!(h.opener().open("mat010", &reader).await.is_ok());
}

#[tokio::test]
async fn test_development_view_requires_development_role() {
    let h = Harness::new();
    let id = h.save_draft(&demo01()).await;

    let err = h.opener().open("demo01", &seller()).await.unwrap_err();
    assert!(matches!(err, OpenError::Forbidden { .. }));

    match h.opener().open("demo01", &admin()).await.unwrap() {
        OpenedView::Dynamic { tier, config, .. } => {
            assert_eq!(tier, ViewType::Development);
            assert_eq!(config.id.as_deref(), Some(id.as_str()));
        }
        other => panic!("expected a dynamic view, got {:?}", other),
    }

    let testers = h.opener().with_development_roles(["tester"]);
    assert!(testers.open("demo01", &Principal::new("tester")).await.is_ok());
    assert!(testers.open("demo01", &admin()).await.is_err());
}

#[tokio::test]
async fn test_hardcoded_alias_is_open_to_any_role() {
    let h = Harness::new();
    let opened = h.opener().open("usr002", &seller()).await.unwrap();
    assert_eq!(
        opened,
        OpenedView::Hardcoded {
            alias: "usr002".to_string()
        }
    );
}

#[tokio::test]
async fn test_promoted_view_opens_as_dynamic_screen() {
    let h = Harness::new();
    let id = h.save_draft(&demo01()).await;
    h.views
        .promote(&id, &PromoteOptions::new("materials").with_roles(["admin", "seller"]))
        .await
        .unwrap();

    match h.opener().open("demo01", &seller()).await.unwrap() {
        OpenedView::Dynamic { tier, config, .. } => {
            assert_eq!(tier, ViewType::Database);
            assert_eq!(config.total_components(), demo01().total_components());
        }
        other => panic!("expected a dynamic view, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dangling_dynamic_path() {
    let h = Harness::new();
    h.views
        .insert_published(&published_view(
            "ghost1",
            &ComponentPath::dynamic("missing-id"),
            &["admin"],
        ))
        .await
        .unwrap();

    let err = h.opener().open("ghost1", &admin()).await.unwrap_err();
    assert_eq!(
        err,
        OpenError::MissingDynamicView {
            id: "missing-id".to_string()
        }
    );
}

#[tokio::test]
async fn test_not_found_is_reported() {
    let h = Harness::new();
    let err = h.opener().open("zzz999", &admin()).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_superseded_navigation_is_stale() {
    let h = Harness::new();
    let opener = h.opener();
    let navigator = Navigator::new();

    let slow = navigator.begin();
    let result = navigator
        .navigate(&opener, "usr001", &admin())
        .await;
    assert!(matches!(result, Navigation::Current(Ok(_))));

    let late = navigator.settle(slow, opener.open("usr003", &admin()).await);
    assert!(late.is_stale());
}
