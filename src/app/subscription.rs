use std::future::Future;
use tokio::task::JoinHandle;
use tracing::debug;

/// A background event source that lives exactly as long as this guard.
///
/// Dropping the guard aborts the task, which releases whatever it was listening
/// to (the terminal event stream, a ticker, a file watcher).
pub struct Subscription {
    name: &'static str,
    task: JoinHandle<()>,
}

impl Subscription {
    pub fn spawn<F>(name: &'static str, future: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        debug!(subscription = name, "subscribed");
        Self {
            name,
            task: tokio::spawn(future),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        debug!(subscription = self.name, "unsubscribed");
        self.task.abort();
    }
}
