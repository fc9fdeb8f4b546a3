use std::{future::Future, time::Duration};

use crate::server::error::AppError;

/// Runs a database future under a deadline.
///
/// # Arguments
/// - `limit` - Maximum time the call may take
/// - `fut` - The database call
///
/// # Returns
/// - `Ok(T)` - The call finished in time and succeeded
/// - `Err(AppError::Timeout)` - The deadline elapsed first; the call is dropped
/// - `Err(AppError)` - The call itself failed
pub async fn with_deadline<T, E, F>(limit: Duration, fut: F) -> Result<T, AppError>
where
    F: Future<Output = Result<T, E>>,
    AppError: From<E>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result.map_err(AppError::from),
        Err(_) => Err(AppError::Timeout(limit)),
    }
}
