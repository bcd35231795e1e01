//! Cancellation-scoped async resource: the one generic replacement for the
//! per-page fetch/cancel/loading-state boilerplate.
//!
//! # Design
//! Every page in the original duplicated the same dance: create an abort
//! scope on mount/parameter change, fetch, and guard every state write with
//! an "was I aborted?" check. `Resource` centralizes it:
//!
//! - starting a load cancels the previous in-flight scope and bumps a
//!   generation counter;
//! - a finished fetch only applies its result when its scope is still live
//!   and its generation is still current, so a stale response can never
//!   overwrite a newer one regardless of completion order;
//! - aborted fetches leave no trace: not a result, not an error banner.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use tokio_util::sync::CancellationToken;

use crate::error::ApiError;

/// Observable lifecycle of one fetched value.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceState<T> {
    /// Nothing fetched yet, or the last fetch was aborted.
    Idle,
    Loading,
    Ready(T),
    Failed(ApiError),
}

impl<T> ResourceState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ResourceState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ResourceState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

struct Inner<T> {
    state: ResourceState<T>,
    scope: Option<CancellationToken>,
    generation: u64,
}

/// A single fetchable value with lifetime-bound cancellation.
pub struct Resource<T> {
    inner: Arc<Mutex<Inner<T>>>,
    root: CancellationToken,
}

impl<T> Clone for Resource<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            root: self.root.clone(),
        }
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Resource<T> {
    pub fn new() -> Self {
        Self::with_parent(&CancellationToken::new())
    }

    /// Tie all fetch scopes to `parent`; cancelling it aborts everything.
    pub fn with_parent(parent: &CancellationToken) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: ResourceState::Idle,
                scope: None,
                generation: 0,
            })),
            root: parent.child_token(),
        }
    }

    /// Run `fetch` under a fresh cancellation scope, aborting whatever was
    /// in flight. The result is applied only if no newer load has started
    /// in the meantime.
    pub async fn load<F, Fut>(&self, fetch: F)
    where
        F: FnOnce(CancellationToken) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let (scope, generation) = {
            let mut inner = self.lock();
            if let Some(previous) = inner.scope.take() {
                previous.cancel();
            }
            inner.generation += 1;
            let scope = self.root.child_token();
            inner.scope = Some(scope.clone());
            inner.state = ResourceState::Loading;
            (scope, inner.generation)
        };

        let result = fetch(scope.clone()).await;

        let mut inner = self.lock();
        if scope.is_cancelled() || inner.generation != generation {
            // A newer load owns the state now; this result is stale.
            return;
        }
        inner.scope = None;
        inner.state = match result {
            Ok(value) => ResourceState::Ready(value),
            Err(err) if err.is_aborted() => ResourceState::Idle,
            Err(err) => ResourceState::Failed(err),
        };
    }

    /// Cancel the in-flight fetch, if any, without starting a new one.
    /// Used when the owning view goes away.
    pub fn abort(&self) {
        let mut inner = self.lock();
        if let Some(scope) = inner.scope.take() {
            scope.cancel();
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        // Never held across an await, so poisoning means a panic mid-update.
        self.inner.lock().expect("resource state mutex poisoned")
    }
}

impl<T: Clone> Resource<T> {
    pub fn state(&self) -> ResourceState<T> {
        self.lock().state.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    async fn slow_ok(value: i32, delay: Duration, scope: CancellationToken) -> Result<i32, ApiError> {
        tokio::select! {
            () = scope.cancelled() => Err(ApiError::Aborted),
            () = tokio::time::sleep(delay) => Ok(value),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn later_load_wins_regardless_of_order() {
        let resource: Resource<i32> = Resource::new();

        let first = resource.clone();
        let handle = tokio::spawn(async move {
            first
                .load(|scope| slow_ok(1, Duration::from_millis(100), scope))
                .await;
        });
        // Let the first load register its scope before starting the second.
        tokio::time::sleep(Duration::from_millis(10)).await;

        resource
            .load(|scope| slow_ok(2, Duration::from_millis(1), scope))
            .await;
        handle.await.unwrap();

        assert_eq!(resource.state(), ResourceState::Ready(2));
    }

    #[tokio::test(start_paused = true)]
    async fn stale_result_never_overwrites_even_if_fetch_ignores_its_scope() {
        let resource: Resource<i32> = Resource::new();

        let first = resource.clone();
        let handle = tokio::spawn(async move {
            first
                .load(|_| async {
                    // Deliberately ignores cancellation and reports success.
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    Ok(1)
                })
                .await;
        });
        tokio::time::sleep(Duration::from_millis(10)).await;

        resource.load(|_| async { Ok(2) }).await;
        handle.await.unwrap();

        assert_eq!(resource.state(), ResourceState::Ready(2));
    }

    #[tokio::test]
    async fn aborted_fetch_leaves_no_error() {
        let resource: Resource<i32> = Resource::new();
        resource.load(|_| async { Err(ApiError::Aborted) }).await;
        assert_eq!(resource.state(), ResourceState::Idle);
    }

    #[tokio::test]
    async fn failure_is_applied() {
        let resource: Resource<i32> = Resource::new();
        resource
            .load(|_| async {
                Err(ApiError::Http {
                    status: 500,
                    details: None,
                })
            })
            .await;
        assert_eq!(resource.state().error().and_then(ApiError::status), Some(500));
    }

    #[tokio::test(start_paused = true)]
    async fn abort_discards_the_inflight_result() {
        let resource: Resource<i32> = Resource::new();

        let loading = resource.clone();
        let handle = tokio::spawn(async move {
            loading
                .load(|scope| slow_ok(1, Duration::from_millis(100), scope))
                .await;
        });
        tokio::time::sleep(Duration::from_millis(10)).await;

        resource.abort();
        handle.await.unwrap();

        assert!(resource.state().ready().is_none());
    }

    #[tokio::test]
    async fn parent_cancellation_aborts_children() {
        let parent = CancellationToken::new();
        let resource: Resource<i32> = Resource::with_parent(&parent);
        parent.cancel();
        resource
            .load(|scope| async move {
                assert!(scope.is_cancelled());
                Err(ApiError::Aborted)
            })
            .await;
        assert!(resource.state().ready().is_none());
    }
}
