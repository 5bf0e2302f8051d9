//! Adapter for the hosted row store's REST interface.
//!
//! Tables live under `{base}/rest/v1/{table}`. Equality filters are sent as
//! `column=eq.value`, joins as resource embeds in `select`, and every write
//! asks for the affected rows back with `Prefer: return=representation`.

use crate::{DbError, Filter, Query, Result, RowStore, SessionToken, Table};

use vb_core::Row;

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Url};
use serde_json::Value;
use tokio::sync::RwLock;

const BACKEND: &str = "remote";
const REST_PREFIX: &str = "rest/v1";

pub struct RemoteRowStore {
    base_url: String,
    anon_key: String,
    access_token: RwLock<Option<String>>,
    client: ReqwestClient,
}

impl RemoteRowStore {
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token: RwLock::new(None),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table_url(&self, table: Table) -> Result<Url> {
        let raw = format!("{}/{}/{}", self.base_url, REST_PREFIX, table.remote_name());
        Url::parse(&raw)
            .map_err(|e| DbError::unexpected_response(table.remote_name(), format!("bad url {raw}: {e}")))
    }

    /// Build a request with the key headers. Reads run as the signed-in
    /// user when a session token is present, otherwise as the anon role.
    async fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let bearer = self
            .access_token
            .read()
            .await
            .clone()
            .unwrap_or_else(|| self.anon_key.clone());

        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }

    /// Execute request and map error bodies to [`DbError::Api`].
    async fn execute(&self, table: Table, req: RequestBuilder) -> Result<Vec<Row>> {
        let name = table.remote_name();
        let response = req.send().await.inspect_err(|e| {
            error!("Remote request on {name} failed: {e}");
        })?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let (code, message) = error_details(&text);
            error!("Remote {name} returned {status}: {message} ({code})");
            return Err(DbError::api(name, status.as_u16(), code, message));
        }

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        match serde_json::from_str::<Value>(&text)? {
            Value::Array(items) => Ok(items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Object(row) => Some(row),
                    _ => None,
                })
                .collect()),
            Value::Object(row) => Ok(vec![row]),
            other => Err(DbError::unexpected_response(
                name,
                format!("expected rows, got {other}"),
            )),
        }
    }
}

fn apply_filters(url: &mut Url, filters: &[Filter]) {
    let mut pairs = url.query_pairs_mut();
    for filter in filters {
        pairs.append_pair(&filter.column, &format!("eq.{}", filter.value));
    }
}

/// `*,pet:pets!pet_id(*),vet:profiles!vet_id(*)`
fn select_clause(query: &Query) -> String {
    let mut select = String::from("*");
    for join in &query.joins {
        select.push_str(&format!(
            ",{}:{}!{}(*)",
            join.key,
            join.table.remote_name(),
            join.foreign_key
        ));
    }
    select
}

/// Pulls `(code, message)` out of the row store's or auth service's error
/// bodies, falling back to the raw text.
pub fn error_details(body: &str) -> (String, String) {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return ("UNKNOWN".to_string(), body.trim().to_string());
    };

    let field = |keys: &[&str]| {
        keys.iter().find_map(|k| match map.get(*k) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    };

    let code = field(&["code", "error_code", "error"]).unwrap_or_else(|| "UNKNOWN".to_string());
    let message = field(&["message", "msg", "error_description", "error"])
        .unwrap_or_else(|| "Unknown error".to_string());
    (code, message)
}

#[async_trait]
impl RowStore for RemoteRowStore {
    fn backend(&self) -> &'static str {
        BACKEND
    }

    async fn select(&self, table: Table, query: &Query) -> Result<Vec<Row>> {
        let mut url = self.table_url(table)?;
        url.query_pairs_mut()
            .append_pair("select", &select_clause(query));
        apply_filters(&mut url, &query.filters);
        if let Some(order) = &query.order {
            let direction = if order.descending { "desc" } else { "asc" };
            url.query_pairs_mut()
                .append_pair("order", &format!("{}.{direction}", order.column));
        }
        if let Some(limit) = query.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }

        debug!("GET {url}");
        let req = self.request(Method::GET, url).await;
        self.execute(table, req).await
    }

    async fn insert(&self, table: Table, row: Row) -> Result<Row> {
        let url = self.table_url(table)?;
        let req = self
            .request(Method::POST, url)
            .await
            .header("Prefer", "return=representation")
            .json(&row);

        self.execute(table, req)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DbError::unexpected_response(table.remote_name(), "insert returned no row"))
    }

    async fn update(&self, table: Table, filters: &[Filter], patch: Row) -> Result<Vec<Row>> {
        let mut url = self.table_url(table)?;
        apply_filters(&mut url, filters);
        let req = self
            .request(Method::PATCH, url)
            .await
            .header("Prefer", "return=representation")
            .json(&patch);

        self.execute(table, req).await
    }

    async fn delete(&self, table: Table, filters: &[Filter]) -> Result<usize> {
        let mut url = self.table_url(table)?;
        apply_filters(&mut url, filters);
        let req = self
            .request(Method::DELETE, url)
            .await
            .header("Prefer", "return=representation");

        Ok(self.execute(table, req).await?.len())
    }
}

#[async_trait]
impl SessionToken for RemoteRowStore {
    async fn set_access_token(&self, token: Option<String>) {
        *self.access_token.write().await = token;
    }
}
