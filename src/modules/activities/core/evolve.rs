use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::events::RosterEvent;

pub fn evolve(mut state: Activity, event: RosterEvent) -> Activity {
    match event {
        RosterEvent::ParticipantSignedUp { email } => {
            if !state.is_registered(&email) {
                state.participants.push(email);
            }
        }
        RosterEvent::ParticipantUnregistered { email } => {
            state.participants.retain(|p| *p != email);
        }
    }
    state
}
