//! API Routes
//!
//! Route handlers organized by functionality.

pub mod channels;
pub mod health;
pub mod messages;
pub mod users;

use crate::api::error::{ApiError, ApiResult};
use crate::store::{ChatStore, StoreResult};

/// Run a store operation on the blocking pool
///
/// SQLite calls and password hashing block the thread, so handlers hop off
/// the async workers for them.
pub(crate) async fn with_store<T, F>(store: &ChatStore, op: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&ChatStore) -> StoreResult<T> + Send + 'static,
{
    let store = store.clone();

    tokio::task::spawn_blocking(move || op(&store))
        .await
        .map_err(|e| ApiError::Internal(format!("Store task failed: {}", e)))?
        .map_err(ApiError::from)
}
