use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Count,
    Sum,
    Avg,
    Min,
    Max,
}

impl Aggregation {
    pub fn sql_name(&self) -> &'static str {
        match self {
            Aggregation::Count => "COUNT",
            Aggregation::Sum => "SUM",
            Aggregation::Avg => "AVG",
            Aggregation::Min => "MIN",
            Aggregation::Max => "MAX",
        }
    }
}

/// A selected column, optionally aggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryField {
    pub table: String,
    pub column: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<Aggregation>,
}

impl QueryField {
    pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
            alias: None,
            aggregation: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn aggregate(mut self, aggregation: Aggregation) -> Self {
        self.aggregation = Some(aggregation);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    Contains,
    In,
    Between,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogicalOperator {
    And,
    Or,
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => write!(f, "AND"),
            LogicalOperator::Or => write!(f, "OR"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryFilter {
    pub table: String,
    pub column: String,
    pub operator: FilterOperator,
    #[serde(default)]
    pub value: Value,
    /// Connector to the next filter; `AND` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_operator: Option<LogicalOperator>,
}

impl QueryFilter {
    pub fn new(
        table: impl Into<String>,
        column: impl Into<String>,
        operator: FilterOperator,
        value: Value,
    ) -> Self {
        Self {
            table: table.into(),
            column: column.into(),
            operator,
            value,
            logical_operator: None,
        }
    }

    pub fn then(mut self, logical_operator: LogicalOperator) -> Self {
        self.logical_operator = Some(logical_operator);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Full,
}

impl JoinKind {
    pub fn sql_keyword(&self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Full => "FULL OUTER JOIN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryJoin {
    pub source_table: String,
    pub source_column: String,
    pub target_table: String,
    pub target_column: String,
    #[serde(rename = "type")]
    pub kind: JoinKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    pub column: String,
    #[serde(default)]
    pub direction: SortDirection,
}

/// Declarative query a component can bind to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryBuilder {
    pub id: String,
    pub name: String,
    /// Ids of the data sources this query reads.
    #[serde(default)]
    pub data_sources: Vec<String>,
    #[serde(default)]
    pub fields: Vec<QueryField>,
    #[serde(default)]
    pub filters: Vec<QueryFilter>,
    #[serde(default)]
    pub joins: Vec<QueryJoin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_by: Option<Vec<OrderBy>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

impl QueryBuilder {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            data_sources: Vec::new(),
            fields: Vec::new(),
            filters: Vec::new(),
            joins: Vec::new(),
            group_by: None,
            order_by: None,
            limit: None,
        }
    }

    pub fn source(mut self, data_source_id: impl Into<String>) -> Self {
        self.data_sources.push(data_source_id.into());
        self
    }

    pub fn field(mut self, field: QueryField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn filter(mut self, filter: QueryFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn join(mut self, join: QueryJoin) -> Self {
        self.joins.push(join);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn references_source(&self, data_source_id: &str) -> bool {
        self.data_sources.iter().any(|id| id == data_source_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_json_shape() {
        let query: QueryBuilder = serde_json::from_value(json!({
            "id": "q1",
            "name": "Materiais por categoria",
            "data_sources": ["ds_materials"],
            "fields": [
                { "table": "materials", "column": "category_id" },
                { "table": "materials", "column": "id", "alias": "total", "aggregation": "count" }
            ],
            "filters": [
                { "table": "materials", "column": "active", "operator": "equals", "value": true, "logical_operator": "AND" }
            ],
            "joins": [
                { "source_table": "materials", "source_column": "category_id",
                  "target_table": "categories", "target_column": "id", "type": "LEFT" }
            ],
            "group_by": ["materials.category_id"],
            "limit": 50
        }))
        .unwrap();

        assert_eq!(query.fields[1].aggregation, Some(Aggregation::Count));
        assert_eq!(query.filters[0].operator, FilterOperator::Equals);
        assert_eq!(query.filters[0].logical_operator, Some(LogicalOperator::And));
        assert_eq!(query.joins[0].kind, JoinKind::Left);
        assert_eq!(query.limit, Some(50));
        assert!(query.references_source("ds_materials"));
        assert!(!query.references_source("ds_clients"));
    }
}
