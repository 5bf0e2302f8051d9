//! Client for the hosted auth service's REST endpoints under `/auth/v1`.

use crate::{AuthFailure, AuthResult, AuthService, AuthSession, AuthUser, SignedUp};

use vb_db::error_details;

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode, Url};
use serde_json::{Value, json};

const AUTH_PREFIX: &str = "auth/v1";

pub struct HttpAuthService {
    base_url: String,
    anon_key: String,
    client: ReqwestClient,
}

impl HttpAuthService {
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> AuthResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> AuthResult<Url> {
        let raw = format!("{}/{}/{}", self.base_url, AUTH_PREFIX, path);
        Url::parse(&raw).map_err(|e| AuthFailure::network(format!("bad url {raw}: {e}")))
    }

    /// `bearer` defaults to the anon key for calls made before sign-in.
    fn request(&self, method: Method, url: Url, bearer: Option<&str>) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer.unwrap_or(&self.anon_key))
    }

    /// Send and return the parsed body. Non-2xx statuses go through
    /// `on_status` so each endpoint can pick its own failure.
    async fn execute(
        &self,
        operation: &'static str,
        req: RequestBuilder,
        on_status: fn(StatusCode, String, String) -> AuthFailure,
    ) -> AuthResult<Value> {
        let response = req.send().await.inspect_err(|e| {
            error!("Auth {operation} request failed: {e}");
        })?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let (code, message) = error_details(&text);
            debug!("Auth {operation} returned {status}: {message} ({code})");
            return Err(on_status(status, code, message));
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| AuthFailure::network(format!("invalid {operation} response: {e}")))
    }
}

fn rejected(_status: StatusCode, code: String, message: String) -> AuthFailure {
    AuthFailure::rejected(code, message)
}

fn sign_in_failure(status: StatusCode, code: String, message: String) -> AuthFailure {
    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED => AuthFailure::invalid_credentials(),
        _ => AuthFailure::rejected(code, message),
    }
}

fn recovery_failure(status: StatusCode, code: String, message: String) -> AuthFailure {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AuthFailure::recovery_rejected(message),
        _ => AuthFailure::rejected(code, message),
    }
}

/// Signup answers with either a bare user or a session wrapping one,
/// depending on whether email confirmation is required.
fn signed_up(body: Value) -> AuthResult<SignedUp> {
    let invalid = |e: serde_json::Error| AuthFailure::network(format!("invalid signup response: {e}"));

    if body.get("access_token").is_some_and(Value::is_string) {
        let session: AuthSession = serde_json::from_value(body).map_err(invalid)?;
        return Ok(SignedUp {
            user: session.user.clone(),
            session: Some(session),
        });
    }

    let user = match body {
        Value::Object(mut map) => match map.remove("user") {
            Some(user @ Value::Object(_)) => user,
            _ => Value::Object(map),
        },
        other => other,
    };
    let user: AuthUser = serde_json::from_value(user).map_err(invalid)?;
    Ok(SignedUp {
        user,
        session: None,
    })
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn sign_up(&self, email: &str, password: &str, full_name: &str) -> AuthResult<SignedUp> {
        let req = self
            .request(Method::POST, self.url("signup")?, None)
            .json(&json!({
                "email": email,
                "password": password,
                "data": { "full_name": full_name },
            }));
        let body = self.execute("signup", req, rejected).await?;
        signed_up(body)
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        let mut url = self.url("token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");
        let req = self
            .request(Method::POST, url, None)
            .json(&json!({ "email": email, "password": password }));
        let body = self.execute("login", req, sign_in_failure).await?;
        serde_json::from_value(body)
            .map_err(|e| AuthFailure::network(format!("invalid login response: {e}")))
    }

    async fn sign_out(&self, access_token: &str) -> AuthResult<()> {
        let req = self.request(Method::POST, self.url("logout")?, Some(access_token));
        self.execute("logout", req, rejected).await?;
        Ok(())
    }

    async fn request_password_reset(&self, email: &str, redirect_to: &str) -> AuthResult<()> {
        let mut url = self.url("recover")?;
        url.query_pairs_mut().append_pair("redirect_to", redirect_to);
        let req = self
            .request(Method::POST, url, None)
            .json(&json!({ "email": email }));
        self.execute("password reset request", req, rejected).await?;
        Ok(())
    }

    async fn update_password(&self, access_token: &str, new_password: &str) -> AuthResult<()> {
        let req = self
            .request(Method::PUT, self.url("user")?, Some(access_token))
            .json(&json!({ "password": new_password }));
        self.execute("password update", req, recovery_failure).await?;
        Ok(())
    }
}
