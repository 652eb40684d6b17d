use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::use_cases::errors::ApplicationError;
use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::modules::activities::use_cases::sign_up::decide::decide_sign_up;
use crate::shared::infrastructure::roster::ActivityRoster;
use std::sync::Arc;

pub struct SignUpHandler<TRoster>
where
    TRoster: ActivityRoster + Send + Sync + 'static,
{
    roster: Arc<TRoster>,
}

impl<TRoster> SignUpHandler<TRoster>
where
    TRoster: ActivityRoster + Send + Sync + 'static,
{
    pub fn new(roster: Arc<TRoster>) -> Self {
        Self { roster }
    }

    /// Decides and applies under the activity lock, so two signups can never
    /// both see the last free spot.
    pub async fn handle(&self, command: SignUp) -> Result<(), ApplicationError> {
        let mut activity = self
            .roster
            .checkout(&command.activity_name)
            .await?
            .ok_or(ApplicationError::ActivityNotFound)?;

        match decide_sign_up(&activity, &command.email) {
            Decision::Accepted { events } => {
                *activity = events.into_iter().fold((*activity).clone(), evolve);
                tracing::info!(
                    activity = %command.activity_name,
                    email = %command.email,
                    spots_left = activity.spots_left(),
                    "student signed up"
                );
                Ok(())
            }
            Decision::Rejected { reason } => {
                tracing::warn!(
                    activity = %command.activity_name,
                    email = %command.email,
                    %reason,
                    "signup rejected"
                );
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
