//! Runtime - tokio-backed refresh scheduling (native)

use std::time::Duration;

use futures::future::LocalBoxFuture;

use crate::controller::Scheduler;

/// Runs deferred tasks with `tokio::task::spawn_local`.
///
/// Controller futures are `!Send` (`Rc` state), so scheduling must happen
/// inside a `tokio::task::LocalSet`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

impl TokioScheduler {
    pub fn new() -> Self { Self }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
    }
}
