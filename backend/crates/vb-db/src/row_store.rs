use crate::{Filter, Query, Result, Table};

use vb_core::Row;

use async_trait::async_trait;

/// The single capability interface over both storage backends.
///
/// Rows are in storage shape (snake_case columns). Selecting the concrete
/// implementation happens once at process start; nothing above this trait
/// branches on which backend it is talking to.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Short backend name for logs and error messages.
    fn backend(&self) -> &'static str;

    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>>;

    /// Inserts one row and returns it as stored (with generated id and
    /// timestamps).
    async fn insert(&self, table: Table, row: Row) -> Result<Row>;

    /// Applies `patch` to every row matching all `filters`. Returns the
    /// updated rows; an empty result means nothing matched.
    async fn update(&self, table: Table, filters: &[Filter], patch: Row) -> Result<Vec<Row>>;

    /// Deletes every row matching all `filters`, returning how many went.
    async fn delete(&self, table: Table, filters: &[Filter]) -> Result<usize>;
}

/// Implemented by backends that forward a user session token.
#[async_trait]
pub trait SessionToken: Send + Sync {
    async fn set_access_token(&self, token: Option<String>);
}
