//! Concurrent latest-version lookups
//!
//! Lookups fan out over a bounded window and are gathered back into input
//! order. What happens when one fails is decided by [`FailurePolicy`].

use crate::domain::DependencyRecord;
use crate::error::LookupError;
use crate::progress::Progress;
use crate::scanner::Scanner;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::debug;

/// Default number of lookups in flight
pub const DEFAULT_CONCURRENCY: usize = 10;

/// How a failed lookup affects the rest of the batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort on the first failure and discard the remaining results
    #[default]
    FailFast,
    /// Wait for every lookup and report all failures together
    CollectAll,
}

/// Fetch the latest version of every dependency
///
/// The returned versions line up with `dependencies` by index regardless of
/// the order in which the lookups complete.
pub async fn fetch_latest_versions(
    scanner: &Scanner<'_>,
    dependencies: &[DependencyRecord],
    policy: FailurePolicy,
    concurrency: usize,
    progress: &Progress,
) -> Result<Vec<String>, LookupError> {
    let lookups = stream::iter(dependencies.iter().enumerate())
        .map(|(index, dep)| async move {
            let result = scanner.fetch_latest(&dep.name).await;
            progress.tick();
            result.map(|latest| (index, latest))
        })
        .buffer_unordered(concurrency.max(1));

    let mut indexed: Vec<(usize, String)> = match policy {
        FailurePolicy::FailFast => lookups.try_collect().await?,
        FailurePolicy::CollectAll => {
            let results: Vec<Result<(usize, String), LookupError>> = lookups.collect().await;
            let mut found = Vec::with_capacity(results.len());
            let mut errors = Vec::new();
            for result in results {
                match result {
                    Ok(pair) => found.push(pair),
                    Err(e) => {
                        debug!(error = %e, "lookup failed");
                        errors.push(e);
                    }
                }
            }
            match errors.len() {
                0 => found,
                1 => return Err(errors.remove(0)),
                _ => return Err(LookupError::Batch(errors)),
            }
        }
    };

    indexed.sort_by_key(|(index, _)| *index);
    Ok(indexed.into_iter().map(|(_, latest)| latest).collect())
}
