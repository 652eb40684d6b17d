use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::unregister::command::Unregister;
use crate::modules::activities::use_cases::unregister::decide::decide_unregister;
use crate::shared::infrastructure::roster::ActivityRoster;
use std::sync::Arc;

pub struct UnregisterHandler<TRoster>
where
    TRoster: ActivityRoster + Send + Sync + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> UnregisterHandler<TRoster>
where
    TRoster: ActivityRoster + Send + Sync + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    pub async fn handle(&self, command: Unregister) -> Result<(), ApplicationError> {
        let mut activity = self
            .roster
            .checkout(&command.activity_name)
            .await?
            .ok_or(ApplicationError::ActivityNotFound)?;

        match decide_unregister(&activity, &command.email) {
            Decision::Accepted { events } => {
                *activity = events.into_iter().fold((*activity).clone(), evolve);
                tracing::info!(
                    activity = %command.activity_name,
                    email = %command.email,
                    "student unregistered"
                );
                Ok(())
            }
            Decision::Rejected { reason } => {
                tracing::warn!(
                    activity = %command.activity_name,
                    email = %command.email,
                    %reason,
                    "unregister rejected"
                );
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
