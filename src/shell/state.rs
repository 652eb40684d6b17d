use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::modules::activities::use_cases::sign_up::handler::SignUpHandler;
use crate::modules::activities::use_cases::unregister::handler::UnregisterHandler;
use crate::shared::infrastructure::roster::in_memory::InMemoryRoster;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<InMemoryRoster>,
    pub queries: Arc<dyn ActivityQueries + Send + Sync>,
    pub sign_up_handler: Arc<SignUpHandler<InMemoryRoster>>,
    pub unregister_handler: Arc<UnregisterHandler<InMemoryRoster>>,
}

impl AppState {
    pub fn new(roster: Arc<InMemoryRoster>) -> Self {
        Self {
            queries: roster.clone(),
            sign_up_handler: Arc::new(SignUpHandler::new(roster.clone())),
            unregister_handler: Arc::new(UnregisterHandler::new(roster.clone())),
            roster,
        }
    }
}
