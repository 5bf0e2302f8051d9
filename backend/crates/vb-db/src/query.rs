use crate::Table;

/// Equality filter on a storage column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn id(value: impl Into<String>) -> Self {
        Self::eq("id", value)
    }
}

/// Embeds the row of `table` whose id equals this row's `foreign_key`
/// under `key`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Join {
    pub key: &'static str,
    pub table: Table,
    pub foreign_key: &'static str,
}

impl Join {
    pub const fn new(key: &'static str, table: Table, foreign_key: &'static str) -> Self {
        Self {
            key,
            table,
            foreign_key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub descending: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub joins: Vec<Join>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn eq(self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter(Filter::eq(column, value))
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    pub fn joins(mut self, joins: &[Join]) -> Self {
        self.joins.extend_from_slice(joins);
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, descending: bool) -> Self {
        self.order = Some(Order {
            column: column.into(),
            descending,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}
