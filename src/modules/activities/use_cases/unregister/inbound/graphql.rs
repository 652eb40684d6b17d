use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::activities::use_cases::unregister::command::Unregister;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UnregisterMutation;

#[Object]
impl UnregisterMutation {
    async fn unregister(
        &self,
        context: &Context<'_>,
        activity_name: String,
        email: String,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let command = Unregister {
            activity_name,
            email,
        };
        let confirmation = command.confirmation();

        state
            .unregister_handler
            .handle(command)
            .await
            .map_err(|e| async_graphql::Error::new(e.public_message()))?;

        Ok(confirmation)
    }
}
