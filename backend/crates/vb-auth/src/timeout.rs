use crate::{AuthFailure, AuthResult};

use std::future::Future;
use std::time::Duration;

use log::error;

/// Race `fut` against `limit`.
///
/// On expiry the future is dropped, so a late response can never reach
/// state the caller has already moved past.
pub async fn with_timeout<T, F>(operation: &'static str, limit: Duration, fut: F) -> AuthResult<T>
where
    F: Future<Output = AuthResult<T>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_elapsed) => {
            error!("{operation} timed out after {limit:?}");
            Err(AuthFailure::timed_out(operation, limit))
        }
    }
}
