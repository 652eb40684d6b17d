use crate::modules::activities::core::decision::DecideError;
use crate::shared::infrastructure::roster::RosterError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error(transparent)]
    Domain(#[from] DecideError),

    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl ApplicationError {
    /// Text safe to hand back to a client. Roster failures are logged here
    /// and collapsed to a generic message.
    pub fn public_message(&self) -> String {
        match self {
            ApplicationError::Roster(e) => {
                tracing::error!(error = %e, "roster unavailable");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        }
    }
}
