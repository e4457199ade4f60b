use erpview_types::{
    DataSource, FilterOperator, LogicalOperator, QueryBuilder, QueryFilter, SortDirection,
};
use serde_json::Value;

/// Render a query as ANSI SQL for display. The text is never executed.
pub fn sql_preview(query: &QueryBuilder, sources: &[DataSource]) -> String {
    let mut lines = Vec::new();

    let columns = if query.fields.is_empty() {
        "*".to_string()
    } else {
        query
            .fields
            .iter()
            .map(|field| {
                let column = format!("{}.{}", field.table, field.column);
                let expr = match field.aggregation {
                    Some(aggregation) => format!("{}({})", aggregation.sql_name(), column),
                    None => column,
                };
                match &field.alias {
                    Some(alias) => format!("{} AS {}", expr, alias),
                    None => expr,
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    };
    lines.push(format!("SELECT {}", columns));

    if let Some(table) = from_table(query, sources) {
        lines.push(format!("FROM {}", table));
    }

    for join in &query.joins {
        lines.push(format!(
            "{} {} ON {}.{} = {}.{}",
            join.kind.sql_keyword(),
            join.target_table,
            join.source_table,
            join.source_column,
            join.target_table,
            join.target_column
        ));
    }

    if !query.filters.is_empty() {
        let mut clause = String::new();
        for (i, filter) in query.filters.iter().enumerate() {
            if i > 0 {
                let connector = query.filters[i - 1]
                    .logical_operator
                    .unwrap_or(LogicalOperator::And);
                clause.push_str(&format!(" {} ", connector));
            }
            clause.push_str(&condition(filter));
        }
        lines.push(format!("WHERE {}", clause));
    }

    if let Some(group_by) = query.group_by.as_ref().filter(|g| !g.is_empty()) {
        lines.push(format!("GROUP BY {}", group_by.join(", ")));
    }

    if let Some(order_by) = query.order_by.as_ref().filter(|o| !o.is_empty()) {
        let terms: Vec<String> = order_by
            .iter()
            .map(|term| {
                let column = match &term.table {
                    Some(table) => format!("{}.{}", table, term.column),
                    None => term.column.clone(),
                };
                let direction = match term.direction {
                    SortDirection::Asc => "ASC",
                    SortDirection::Desc => "DESC",
                };
                format!("{} {}", column, direction)
            })
            .collect();
        lines.push(format!("ORDER BY {}", terms.join(", ")));
    }

    if let Some(limit) = query.limit {
        lines.push(format!("LIMIT {}", limit));
    }

    lines.join("\n")
}

/// Table of the first data source, by its backing table when it is known.
fn from_table(query: &QueryBuilder, sources: &[DataSource]) -> Option<String> {
    match query.data_sources.first() {
        Some(id) => Some(
            sources
                .iter()
                .find(|s| &s.id == id)
                .map(|s| s.physical_name().to_string())
                .unwrap_or_else(|| id.clone()),
        ),
        None => query.fields.first().map(|f| f.table.clone()),
    }
}

fn condition(filter: &QueryFilter) -> String {
    let column = format!("{}.{}", filter.table, filter.column);
    match filter.operator {
        FilterOperator::Equals => format!("{} = {}", column, literal(&filter.value)),
        FilterOperator::NotEquals => format!("{} <> {}", column, literal(&filter.value)),
        FilterOperator::GreaterThan => format!("{} > {}", column, literal(&filter.value)),
        FilterOperator::LessThan => format!("{} < {}", column, literal(&filter.value)),
        FilterOperator::Contains => {
            let needle = match &filter.value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            format!("{} LIKE {}", column, quote(&format!("%{}%", needle)))
        }
        FilterOperator::In => {
            let items = match &filter.value {
                Value::Array(items) => items.iter().map(literal).collect::<Vec<_>>(),
                other => vec![literal(other)],
            };
            format!("{} IN ({})", column, items.join(", "))
        }
        FilterOperator::Between => match &filter.value {
            Value::Array(bounds) if bounds.len() == 2 => format!(
                "{} BETWEEN {} AND {}",
                column,
                literal(&bounds[0]),
                literal(&bounds[1])
            ),
            other => format!("{} BETWEEN {}", column, literal(other)),
        },
    }
}

fn literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(true) => "TRUE".to_string(),
        Value::Bool(false) => "FALSE".to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        other => quote(&other.to_string()),
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use erpview_types::{Aggregation, JoinKind, OrderBy, QueryField, QueryJoin};
    use serde_json::json;

    #[test]
    fn test_full_preview() {
        let sources = vec![DataSource::table("ds_materials", "Materiais", "materials_dev")];
        let mut query = QueryBuilder::new("q1", "Estoque por categoria")
            .source("ds_materials")
            .field(QueryField::new("materials_dev", "category"))
            .field(
                QueryField::new("materials_dev", "id")
                    .aggregate(Aggregation::Count)
                    .alias("total"),
            )
            .join(QueryJoin {
                source_table: "materials_dev".to_string(),
                source_column: "category".to_string(),
                target_table: "categories_dev".to_string(),
                target_column: "id".to_string(),
                kind: JoinKind::Left,
            })
            .filter(
                QueryFilter::new(
                    "materials_dev",
                    "stock",
                    FilterOperator::GreaterThan,
                    json!(10),
                )
                .then(LogicalOperator::Or),
            )
            .filter(QueryFilter::new(
                "materials_dev",
                "name",
                FilterOperator::Contains,
                json!("d'água"),
            ))
            .limit(50);
        query.group_by = Some(vec!["materials_dev.category".to_string()]);
        query.order_by = Some(vec![OrderBy {
            table: None,
            column: "total".to_string(),
            direction: SortDirection::Desc,
        }]);

        assert_eq!(
            sql_preview(&query, &sources),
            "SELECT materials_dev.category, COUNT(materials_dev.id) AS total\n\
             FROM materials_dev\n\
             LEFT JOIN categories_dev ON materials_dev.category = categories_dev.id\n\
             WHERE materials_dev.stock > 10 OR materials_dev.name LIKE '%d''água%'\n\
             GROUP BY materials_dev.category\n\
             ORDER BY total DESC\n\
             LIMIT 50"
        );
    }

    #[test]
    fn test_in_and_between() {
        let query = QueryBuilder::new("q2", "Filtros")
            .source("ds_unknown")
            .filter(QueryFilter::new(
                "t",
                "status",
                FilterOperator::In,
                json!(["a", "b"]),
            ))
            .filter(QueryFilter::new(
                "t",
                "price",
                FilterOperator::Between,
                json!([1, 2.5]),
            ));

        assert_eq!(
            sql_preview(&query, &[]),
            "SELECT *\nFROM ds_unknown\nWHERE t.status IN ('a', 'b') AND t.price BETWEEN 1 AND 2.5"
        );
    }
}
