mod common;

use common::Harness;
use erpview_engine::{BuilderError, ViewInfoUpdate};
use erpview_testing::Operation;
use erpview_testing::fixtures::data_sources;
use erpview_types::{
    ButtonProps, CardProps, ComponentKind, ComponentBody, DataBinding, QueryBuilder, TextProps,
    ViewComponent, ViewType,
};

fn info(name: &str, alias: &str) -> ViewInfoUpdate {
    ViewInfoUpdate {
        name: Some(name.to_string()),
        alias: Some(alias.to_string()),
        ..Default::default()
    }
}

fn paragraph(id: &str, content: &str) -> ViewComponent {
    ViewComponent::text(
        id,
        TextProps {
            content: Some(content.to_string()),
            ..Default::default()
        },
    )
}

#[test]
fn test_new_builder_is_an_empty_draft() {
    let h = Harness::new();
    let builder = h.builder();
    let config = builder.config();

    assert!(config.id.is_none());
    assert!(config.components.is_empty());
    assert_eq!(config.metadata.version, "1.0.0");
    assert_eq!(config.metadata.created_at, config.metadata.updated_at);
    assert!(!builder.is_dirty());
}

#[test]
fn test_mutations_restamp_updated_at() {
    let h = Harness::new();
    let mut builder = h.builder();
    let created = builder.config().metadata.updated_at.clone();

    h.clock.advance(5);
    builder.add_component(paragraph("t1", "Olá"));

    assert_ne!(builder.config().metadata.updated_at, created);
    assert_eq!(builder.config().metadata.created_at, created);
    assert!(builder.is_dirty());
}

#[test]
fn test_remove_component_twice_is_a_noop() {
    let h = Harness::new();
    let mut builder = h.builder();
    builder.add_component(paragraph("t1", "a"));
    builder.add_component(paragraph("t2", "b"));

    h.clock.advance(1);
    assert!(builder.remove_component("t1"));
    let after_first = builder.config().clone();

    h.clock.advance(1);
    assert!(!builder.remove_component("t1"));
    assert_eq!(builder.config(), &after_first);
}

#[test]
fn test_nested_components_and_selection() {
    let h = Harness::new();
    let mut builder = h.builder();
    builder.add_component(ViewComponent::card("card", CardProps::default(), Vec::new()));
    assert!(builder.add_component_to("card", paragraph("inner", "x")));
    assert!(!builder.add_component_to("inner", paragraph("leaf-child", "y")));
    assert!(!builder.add_component_to("nope", paragraph("orphan", "z")));

    builder.select_element(Some("inner"));
    assert_eq!(builder.selected_component().map(|c| c.id.as_str()), Some("inner"));

    assert!(builder.update_component("inner", |c| {
        if let ComponentBody::Text(props) = &mut c.body {
            props.content = Some("changed".to_string());
        }
    }));
    assert!(!builder.update_component("nope", |_| {}));

    // Removing the container removes the selected child with it
    assert!(builder.remove_component("card"));
    assert!(builder.selected_id().is_none());
    assert_eq!(builder.config().total_components(), 0);
}

#[test]
fn test_selecting_unknown_id_clears_selection() {
    let h = Harness::new();
    let mut builder = h.builder();
    builder.add_component(paragraph("t1", "a"));
    builder.select_element(Some("t1"));
    builder.select_element(Some("missing"));
    assert!(builder.selected_id().is_none());
}

#[test]
fn test_remove_data_source_cascades_to_queries() {
    let h = Harness::new();
    let mut builder = h.builder();
    for source in data_sources() {
        builder.add_data_source(source);
    }
    builder.add_query(QueryBuilder::new("q_both", "Ambos").source("ds_materials").source("ds_categories"));
    builder.add_query(QueryBuilder::new("q_mat", "Materiais").source("ds_materials"));
    builder.add_query(QueryBuilder::new("q_cat", "Categorias").source("ds_categories"));

    assert!(builder.remove_data_source("ds_materials"));

    let config = builder.config();
    assert_eq!(config.query_ids(), vec!["q_cat"]);
    assert_eq!(config.data_sources, vec!["ds_categories".to_string()]);
    assert!(builder.data_source("ds_materials").is_none());
    assert!(builder.data_source("ds_categories").is_some());

    assert!(!builder.remove_data_source("ds_materials"));
}

#[test]
fn test_query_crud() {
    let h = Harness::new();
    let mut builder = h.builder();
    builder.add_query(QueryBuilder::new("q1", "Primeira"));
    assert!(builder.update_query("q1", |q| q.limit = Some(10)));
    assert_eq!(builder.config().query("q1").unwrap().limit, Some(10));

    builder.add_query(QueryBuilder::new("q1", "Substituta"));
    assert_eq!(builder.config().queries.len(), 1);
    assert_eq!(builder.config().query("q1").unwrap().name, "Substituta");

    assert!(builder.remove_query("q1"));
    assert!(!builder.remove_query("q1"));
    assert!(!builder.update_query("q1", |_| {}));
}

#[tokio::test]
async fn test_save_without_alias_writes_nothing() {
    let h = Harness::new();
    let mut builder = h.builder();
    builder.update_view_info(ViewInfoUpdate {
        name: Some("Sem alias".to_string()),
        ..Default::default()
    });
    builder.add_component(paragraph("t1", "a"));

    let outcome = builder.save_view("user-1").await;

    assert!(!outcome.success);
    assert!(outcome.error.is_some());
    assert_eq!(h.faults.write_count(), 0);
    assert!(builder.config().id.is_none());
}

#[tokio::test]
async fn test_save_refuses_invalid_view() {
    let h = Harness::new();
    let mut builder = h.builder();
    builder.update_view_info(info("Inválida", "bad01"));
    builder.add_component(
        paragraph("t1", "a").with_binding(DataBinding::new("q_missing")),
    );

    let outcome = builder.save_view("user-1").await;

    assert!(!outcome.success);
    assert!(outcome.error.unwrap().contains("q_missing"));
    assert_eq!(h.faults.write_count(), 0);
}

#[tokio::test]
async fn test_save_creates_then_updates() {
    let h = Harness::new();
    let mut builder = h.builder();
    builder.update_view_info(info("Materiais", "mat100"));
    builder.add_component(paragraph("t1", "a"));

    let first = builder.save_view("user-1").await;
    assert!(first.success, "{:?}", first.error);
    let id = first.id.clone().unwrap();
    assert_eq!(builder.config().id.as_deref(), Some(id.as_str()));
    assert!(!builder.is_dirty());

    h.clock.advance(60);
    builder.add_component(paragraph("t2", "b"));
    assert!(builder.is_dirty());

    let second = builder.save_view("user-1").await;
    assert_eq!(second.id.as_deref(), Some(id.as_str()));
    assert_eq!(h.views.list_development().await.unwrap().len(), 1);

    let stored = h.views.get_development(&id).await.unwrap().unwrap();
    assert_eq!(stored.config().unwrap().components.len(), 2);
}

#[tokio::test]
async fn test_store_failure_is_reported_in_outcome() {
    let h = Harness::new();
    h.faults.fail(Operation::Insert, "development_views");
    let mut builder = h.builder();
    builder.update_view_info(info("Materiais", "mat100"));

    let outcome = builder.save_view("user-1").await;

    assert!(!outcome.success);
    assert!(outcome.error.unwrap().contains("injected"));
    assert!(builder.config().id.is_none());
}

#[tokio::test]
async fn test_build_save_resolve_round_trip() {
    let h = Harness::new();
    let mut builder = h.builder();
    builder.update_view_info(info("Estoque", "est001"));
    for source in data_sources() {
        builder.add_data_source(source);
    }
    builder.add_query(QueryBuilder::new("q_stock", "Estoque").source("ds_materials"));
    builder.add_component(ViewComponent::card(
        "card",
        CardProps {
            title: Some("Estoque".to_string()),
            ..Default::default()
        },
        vec![ViewComponent::button(
            "refresh",
            ButtonProps {
                text: Some("Atualizar".to_string()),
                ..Default::default()
            },
        )],
    ));
    builder.add_component(
        ViewComponent::new("grid", ComponentBody::empty(ComponentKind::DataTable))
            .with_binding(DataBinding::new("q_stock").map_field("codigo", "code")),
    );

    let outcome = builder.save_view("user-1").await;
    assert!(outcome.success, "{:?}", outcome.error);

    let resolved = h.resolver().resolve("est001", "admin").await.unwrap();
    assert_eq!(resolved.view_type, ViewType::Development);
    let config = resolved.config.unwrap();
    let built = builder.config();

    assert_eq!(config.total_components(), built.total_components());
    assert_eq!(config.query_ids(), built.query_ids());
    assert_eq!(config.data_sources, built.data_sources);
}

#[tokio::test]
async fn test_load_and_reset() {
    let h = Harness::new();
    let mut builder = h.builder();
    builder.update_view_info(info("Materiais", "mat100"));
    builder.add_component(paragraph("t1", "a"));
    let id = builder.save_view("user-1").await.id.unwrap();

    let mut other = h.builder();
    other.load_view(&id).await.unwrap();
    assert_eq!(other.config().id.as_deref(), Some(id.as_str()));
    assert_eq!(other.config().alias, "mat100");
    assert!(!other.is_dirty());

    assert_eq!(
        other.load_view("missing").await,
        Err(BuilderError::NotFound {
            id: "missing".to_string()
        })
    );

    other.reset();
    assert!(other.config().id.is_none());
    assert!(other.config().components.is_empty());
}

#[tokio::test]
async fn test_load_view_drops_previous_catalog() {
    let h = Harness::new();
    let mut saver = h.builder();
    saver.update_view_info(info("Vazia", "vaz001"));
    saver.add_component(paragraph("t1", "a"));
    let id = saver.save_view("user-1").await.id.unwrap();

    let mut builder = h.builder();
    for source in data_sources() {
        builder.add_data_source(source);
    }
    assert!(builder.data_source("ds_materials").is_some());

    builder.load_view(&id).await.unwrap();

    assert!(builder.config().data_sources.is_empty());
    assert!(builder.data_sources().is_empty());
    assert!(builder.data_source("ds_materials").is_none());
}
