//! Command execution helpers
//!
//! Keeps the timing and logging boilerplate out of the command handlers.

use std::future::Future;
use std::time::Instant;

use meetnotify_domain::Result as DomainResult;

use crate::utils::logging::log_command_execution;

/// Run a command, timing it and logging the outcome.
///
/// # Example
///
/// ```rust,ignore
/// let text = execute_command("meetings::list", || async move {
///     let page = ctx.meetings.list(&filter).await?;
///     Ok(render_page(&page))
/// })
/// .await?;
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();
    let result = command_fn().await;
    log_command_execution(command_name, start.elapsed(), result.as_ref().err());
    result
}
