use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::view::DynamicViewConfig;

/// Deepest component nesting accepted, top-level components being depth 1.
pub const MAX_NESTING_DEPTH: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum ValidationIssue {
    MissingName,
    MissingAlias,
    DuplicateComponentId {
        component_id: String,
    },
    UnknownQueryBinding {
        component_id: String,
        query_id: String,
    },
    NestingTooDeep {
        component_id: String,
        depth: usize,
    },
    DuplicateQueryId {
        query_id: String,
    },
    UnknownDataSource {
        query_id: String,
        data_source_id: String,
    },
    UnknownComponentType {
        component_id: String,
        kind: String,
    },
    MalformedProp {
        component_id: String,
        prop: String,
    },
}

impl ValidationIssue {
    pub fn severity(&self) -> Severity {
        match self {
            ValidationIssue::UnknownComponentType { .. } | ValidationIssue::MalformedProp { .. } => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingName => write!(f, "view name is required"),
            ValidationIssue::MissingAlias => write!(f, "view alias is required"),
            ValidationIssue::DuplicateComponentId { component_id } => {
                write!(f, "component id '{}' is used more than once", component_id)
            }
            ValidationIssue::UnknownQueryBinding {
                component_id,
                query_id,
            } => write!(
                f,
                "component '{}' is bound to unknown query '{}'",
                component_id, query_id
            ),
            ValidationIssue::NestingTooDeep {
                component_id,
                depth,
            } => write!(
                f,
                "component '{}' is nested {} levels deep (max {})",
                component_id, depth, MAX_NESTING_DEPTH
            ),
            ValidationIssue::DuplicateQueryId { query_id } => {
                write!(f, "query id '{}' is used more than once", query_id)
            }
            ValidationIssue::UnknownDataSource {
                query_id,
                data_source_id,
            } => write!(
                f,
                "query '{}' reads data source '{}' which the view does not include",
                query_id, data_source_id
            ),
            ValidationIssue::UnknownComponentType { component_id, kind } => write!(
                f,
                "component '{}' has unrecognized type '{}' and will render as a placeholder",
                component_id, kind
            ),
            ValidationIssue::MalformedProp { component_id, prop } => write!(
                f,
                "component '{}' has a value for '{}' that cannot be used; it is ignored",
                component_id, prop
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// True when no issue is an error; warnings are allowed.
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
    }

    /// Errors joined into one line, for string-typed error channels.
    pub fn error_summary(&self) -> String {
        self.errors()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Check a view for the invariants construction does not enforce.
pub fn validate(config: &DynamicViewConfig) -> ValidationReport {
    let mut issues = Vec::new();

    if config.name.trim().is_empty() {
        issues.push(ValidationIssue::MissingName);
    }
    if config.alias.trim().is_empty() {
        issues.push(ValidationIssue::MissingAlias);
    }

    let query_ids: HashSet<&str> = config.queries.iter().map(|q| q.id.as_str()).collect();
    let mut seen_ids = HashSet::new();
    for component in &config.components {
        check_component(component, 1, &query_ids, &mut seen_ids, &mut issues);
    }

    let mut seen_queries = HashSet::new();
    for query in &config.queries {
        if !seen_queries.insert(query.id.as_str()) {
            issues.push(ValidationIssue::DuplicateQueryId {
                query_id: query.id.clone(),
            });
        }
        for source_id in &query.data_sources {
            if !config.data_sources.contains(source_id) {
                issues.push(ValidationIssue::UnknownDataSource {
                    query_id: query.id.clone(),
                    data_source_id: source_id.clone(),
                });
            }
        }
    }

    ValidationReport { issues }
}

fn check_component<'a>(
    component: &'a crate::ViewComponent,
    depth: usize,
    query_ids: &HashSet<&str>,
    seen_ids: &mut HashSet<&'a str>,
    issues: &mut Vec<ValidationIssue>,
) {
    if depth > MAX_NESTING_DEPTH {
        // Descendants are deeper still; one report per branch is enough.
        issues.push(ValidationIssue::NestingTooDeep {
            component_id: component.id.clone(),
            depth,
        });
        return;
    }

    if !seen_ids.insert(component.id.as_str()) {
        issues.push(ValidationIssue::DuplicateComponentId {
            component_id: component.id.clone(),
        });
    }

    if let Some(binding) = &component.data_binding
        && !query_ids.contains(binding.query_id.as_str())
    {
        issues.push(ValidationIssue::UnknownQueryBinding {
            component_id: component.id.clone(),
            query_id: binding.query_id.clone(),
        });
    }

    if component.body.kind().is_none() {
        issues.push(ValidationIssue::UnknownComponentType {
            component_id: component.id.clone(),
            kind: component.kind_name().to_string(),
        });
    }

    for prop in component.body.malformed_props() {
        issues.push(ValidationIssue::MalformedProp {
            component_id: component.id.clone(),
            prop: prop.to_string(),
        });
    }

    for child in component.children() {
        check_component(child, depth + 1, query_ids, seen_ids, issues);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{CardProps, ComponentBody, DataBinding, PropMap, TextProps};
    use crate::query::QueryBuilder;
    use crate::ViewComponent;
    use chrono::{TimeZone, Utc};

    fn named_view() -> DynamicViewConfig {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut view = DynamicViewConfig::draft("u", now);
        view.name = "Estoque".to_string();
        view.alias = "est01".to_string();
        view
    }

    #[test]
    fn test_empty_draft_needs_name_and_alias() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let report = validate(&DynamicViewConfig::draft("u", now));
        assert_eq!(
            report.issues,
            vec![ValidationIssue::MissingName, ValidationIssue::MissingAlias]
        );
        assert!(!report.is_valid());
        assert_eq!(
            report.error_summary(),
            "view name is required; view alias is required"
        );
    }

    #[test]
    fn test_duplicate_component_ids_across_nesting() {
        let mut view = named_view();
        view.components.push(ViewComponent::card(
            "x",
            CardProps::default(),
            vec![ViewComponent::text("x", TextProps::default())],
        ));

        let report = validate(&view);
        assert_eq!(
            report.issues,
            vec![ValidationIssue::DuplicateComponentId {
                component_id: "x".to_string()
            }]
        );
    }

    #[test]
    fn test_binding_must_reference_known_query() {
        let mut view = named_view();
        view.queries.push(QueryBuilder::new("q1", "Saldo"));
        view.components.push(
            ViewComponent::text("ok", TextProps::default()).with_binding(DataBinding::new("q1")),
        );
        view.components.push(
            ViewComponent::text("bad", TextProps::default())
                .with_binding(DataBinding::new("q404")),
        );

        let report = validate(&view);
        assert_eq!(
            report.issues,
            vec![ValidationIssue::UnknownQueryBinding {
                component_id: "bad".to_string(),
                query_id: "q404".to_string()
            }]
        );
    }

    #[test]
    fn test_nesting_cap() {
        let mut node = ViewComponent::text("leaf", TextProps::default());
        for level in (0..MAX_NESTING_DEPTH).rev() {
            node = ViewComponent::card(format!("c{}", level), CardProps::default(), vec![node]);
        }
        let mut view = named_view();
        view.components.push(node);

        let report = validate(&view);
        assert_eq!(
            report.issues,
            vec![ValidationIssue::NestingTooDeep {
                component_id: "leaf".to_string(),
                depth: MAX_NESTING_DEPTH + 1
            }]
        );
    }

    #[test]
    fn test_query_sources_must_be_in_view() {
        let mut view = named_view();
        view.data_sources.push("ds_a".to_string());
        view.queries
            .push(QueryBuilder::new("q1", "A").source("ds_a").source("ds_b"));
        view.queries.push(QueryBuilder::new("q1", "A again"));

        let report = validate(&view);
        assert_eq!(
            report.issues,
            vec![
                ValidationIssue::UnknownDataSource {
                    query_id: "q1".to_string(),
                    data_source_id: "ds_b".to_string()
                },
                ValidationIssue::DuplicateQueryId {
                    query_id: "q1".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_unknown_type_is_only_a_warning() {
        let mut view = named_view();
        view.components.push(ViewComponent::new(
            "w",
            ComponentBody::Unknown {
                kind: "gauge".to_string(),
                props: PropMap::new(),
                children: Vec::new(),
            },
        ));

        let report = validate(&view);
        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_mistyped_prop_is_only_a_warning() {
        let mut view = named_view();
        let mut props = TextProps::default();
        props.extra.insert("content".to_string(), serde_json::json!(42));
        view.components.push(ViewComponent::text("n1", props));

        let report = validate(&view);
        assert!(report.is_valid());
        assert_eq!(
            report.issues,
            vec![ValidationIssue::MalformedProp {
                component_id: "n1".to_string(),
                prop: "content".to_string()
            }]
        );
    }
}
