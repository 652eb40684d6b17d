use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::sign_up::command::SignUp;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct SignUpMutation;

#[Object]
impl SignUpMutation {
    async fn sign_up(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = SignUp {
            activity_name,
            email,
        };
        let confirmation = command.confirmation();

        state
            .sign_up_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.public_message()))?;

        Ok(confirmation)
    }
}
