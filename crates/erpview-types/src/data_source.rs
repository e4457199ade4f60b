use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSourceType {
    Table,
    View,
    CustomQuery,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Text,
    Number,
    Date,
    Boolean,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            nullable: false,
            default_value: None,
            description: None,
        }
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToMany,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    pub target_source_id: String,
    pub source_column: String,
    pub target_column: String,
    #[serde(rename = "type")]
    pub cardinality: Cardinality,
}

/// A table, view or custom query a view's queries can read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: DataSourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

impl DataSource {
    pub fn table(
        id: impl Into<String>,
        name: impl Into<String>,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            source_type: DataSourceType::Table,
            table_name: Some(table_name.into()),
            columns: Vec::new(),
            relationships: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: ColumnDef) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationships.push(relationship);
        self
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Backing table name, falling back to the source name.
    pub fn physical_name(&self) -> &str {
        self.table_name.as_deref().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_data_source_json_shape() {
        let source: DataSource = serde_json::from_value(json!({
            "id": "ds_clients",
            "name": "Clientes",
            "type": "table",
            "table_name": "clients",
            "columns": [
                { "name": "id", "type": "text" },
                { "name": "credit_limit", "type": "number", "nullable": true }
            ],
            "relationships": [
                { "target_source_id": "ds_orders", "source_column": "id",
                  "target_column": "client_id", "type": "one_to_many" }
            ]
        }))
        .unwrap();

        assert_eq!(source.source_type, DataSourceType::Table);
        assert_eq!(source.physical_name(), "clients");
        assert!(source.column("credit_limit").unwrap().nullable);
        assert_eq!(source.relationships[0].cardinality, Cardinality::OneToMany);
    }

    #[test]
    fn test_physical_name_falls_back_to_name() {
        let source = DataSource {
            id: "ds".to_string(),
            name: "v_stock".to_string(),
            source_type: DataSourceType::View,
            table_name: None,
            columns: Vec::new(),
            relationships: Vec::new(),
        };
        assert_eq!(source.physical_name(), "v_stock");
    }
}
