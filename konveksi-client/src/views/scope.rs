//! View lifetime scope
//!
//! A view issues its requests through [`ViewScope::run`]. Once the scope is
//! torn down, every pending and future `run` resolves to `None` and the view
//! drops the result instead of applying it.

use std::future::Future;

use tokio_util::sync::CancellationToken;

#[derive(Debug, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle that can tear this scope down from another task
    pub fn handle(&self) -> ScopeHandle {
        ScopeHandle {
            token: self.token.clone(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    pub fn teardown(&self) {
        self.token.cancel();
    }

    /// Drive `fut` unless the scope goes away first
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        if self.token.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                tracing::debug!("View torn down, discarding in-flight request");
                None
            }
            output = fut => {
                // the token may have fired while the future was completing
                self.is_active().then_some(output)
            }
        }
    }
}

impl Drop for ViewScope {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Cloneable teardown handle
#[derive(Debug, Clone)]
pub struct ScopeHandle {
    token: CancellationToken,
}

impl ScopeHandle {
    pub fn teardown(&self) {
        self.token.cancel();
    }

    pub fn is_torn_down(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_completes_while_active() {
        let scope = ViewScope::new();
        assert_eq!(scope.run(async { 5 }).await, Some(5));
    }

    #[tokio::test]
    async fn test_run_after_teardown_skips_future() {
        let scope = ViewScope::new();
        scope.teardown();
        let mut polled = false;
        let result = scope.run(async { polled = true }).await;
        assert!(result.is_none());
        assert!(!polled);
    }

    #[tokio::test]
    async fn test_handle_cancels_in_flight() {
        let scope = ViewScope::new();
        let handle = scope.handle();

        let canceller = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            handle.teardown();
        });

        let result = scope
            .run(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                1
            })
            .await;
        canceller.await.unwrap();

        assert!(result.is_none());
        assert!(!scope.is_active());
    }

    #[test]
    fn test_drop_tears_down() {
        let scope = ViewScope::new();
        let handle = scope.handle();
        assert!(!handle.is_torn_down());
        drop(scope);
        assert!(handle.is_torn_down());
    }
}
