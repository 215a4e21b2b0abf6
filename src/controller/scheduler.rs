//! Deferred work: the post-transaction balance refresh.

use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Runs `task` on the current thread after `delay`. Implementations must not
/// block the caller.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>);
}
