use serde_json::{Map, Value};
use std::cmp::Ordering;

/// A stored row: a flat JSON object keyed by column name.
pub type Row = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Column equals the value.
    Eq(String, Value),
    /// String column contains the needle, ignoring case.
    ILike(String, String),
    /// Array column contains the value.
    Contains(String, Value),
    /// Column value is one of the values.
    In(String, Vec<Value>),
}

impl Filter {
    pub fn matches(&self, row: &Row) -> bool {
        match self {
            Filter::Eq(column, value) => row.get(column) == Some(value),
            Filter::ILike(column, needle) => match row.get(column) {
                Some(Value::String(s)) => s.to_lowercase().contains(&needle.to_lowercase()),
                _ => false,
            },
            Filter::Contains(column, value) => match row.get(column) {
                Some(Value::Array(items)) => items.contains(value),
                _ => false,
            },
            Filter::In(column, values) => row.get(column).is_some_and(|v| values.contains(v)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

/// Select-with-filter request: all filters must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
    pub filters: Vec<Filter>,
    pub order: Option<(String, Order)>,
    pub limit: Option<usize>,
}

impl Select {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq(column.to_string(), value.into()));
        self
    }

    pub fn ilike(mut self, column: &str, needle: &str) -> Self {
        self.filters
            .push(Filter::ILike(column.to_string(), needle.to_string()));
        self
    }

    pub fn contains(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters
            .push(Filter::Contains(column.to_string(), value.into()));
        self
    }

    pub fn in_list<I, V>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.filters.push(Filter::In(
            column.to_string(),
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn order_by(mut self, column: &str, order: Order) -> Self {
        self.order = Some((column.to_string(), order));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.filters.iter().all(|f| f.matches(row))
    }

    /// Filter, order and limit `rows`. Shared by every backend so they agree.
    pub fn apply(&self, rows: impl IntoIterator<Item = Row>) -> Vec<Row> {
        let mut selected: Vec<Row> = rows.into_iter().filter(|r| self.matches(r)).collect();

        if let Some((column, order)) = &self.order {
            // Stable sort keeps insertion order among equal keys.
            selected.sort_by(|a, b| {
                let ordering = compare_values(a.get(column), b.get(column));
                match order {
                    Order::Asc => ordering,
                    Order::Desc => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = self.limit {
            selected.truncate(limit);
        }

        selected
    }
}

/// Missing and null sort first; numbers numerically; strings lexically.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(x), Some(y)) => x.to_string().cmp(&y.to_string()),
    }
}
