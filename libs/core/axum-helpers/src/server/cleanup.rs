//! Database connection cleanup utilities for graceful shutdown.

use tracing::{error, info};

/// Closes a SeaORM connection pool.
///
/// The pool also closes on drop; closing explicitly lets SQLite checkpoint
/// its journal before the process exits and gives a log line either way.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::close_database;
///
/// close_database(db, "items").await;
/// ```
pub async fn close_database(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("Database connection '{}' closed successfully", name),
        Err(e) => error!("Error closing database connection '{}': {}", name, e),
    }
}

/// Runs named cleanup tasks concurrently and waits for all of them.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::{CleanupCoordinator, close_database};
///
/// let mut cleanup = CleanupCoordinator::new();
/// cleanup.add_task("items", async move { close_database(db, "items").await });
/// cleanup.run().await;
/// ```
pub struct CleanupCoordinator {
    tasks: Vec<(&'static str, tokio::task::JoinHandle<()>)>,
}

impl CleanupCoordinator {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Spawns the task immediately and tracks it for completion.
    pub fn add_task<F>(&mut self, name: &'static str, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(task);
        self.tasks.push((name, handle));
    }

    /// A panicking task is logged and does not stop the others.
    pub async fn run(self) {
        info!("Running {} cleanup tasks", self.tasks.len());

        for (name, handle) in self.tasks {
            match handle.await {
                Ok(_) => info!("Cleanup task '{}' completed", name),
                Err(e) => error!("Cleanup task '{}' failed: {}", name, e),
            }
        }
    }
}

impl Default for CleanupCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_cleanup_runs_all_tasks() {
        let done = Arc::new(AtomicU32::new(0));
        let mut cleanup = CleanupCoordinator::new();

        for name in ["first", "second"] {
            let done = done.clone();
            cleanup.add_task(name, async move {
                done.fetch_add(1, Ordering::SeqCst);
            });
        }
        cleanup.add_task("panics", async { panic!("boom") });

        cleanup.run().await;
        assert_eq!(done.load(Ordering::SeqCst), 2);
    }
}
