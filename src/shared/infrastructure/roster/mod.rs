// Port for the activity roster store.
//
// Purpose
// - Describe how use case handlers reach a single activity for a read-modify-write.
//
// Boundaries
// - No concrete storage here. `in_memory` provides the process-wide implementation.

pub mod in_memory;

use crate::modules::activities::core::activity::Activity;
use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::OwnedMutexGuard;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Exclusive access to one activity. Other mutations of the same activity
/// wait until the guard is dropped.
pub type ActivityGuard = OwnedMutexGuard<Activity>;

#[async_trait]
pub trait ActivityRoster {
    /// Locks the activity named exactly `name`. `Ok(None)` when it does not exist.
    async fn checkout(&self, name: &str) -> Result<Option<ActivityGuard>, RosterError>;
}
