use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::events::RosterEvent;

pub fn decide_unregister(state: &Activity, email: &str) -> Decision {
    if !state.is_registered(email) {
        return Decision::Rejected {
            reason: DecideError::NotRegistered,
        };
    }
    Decision::Accepted {
        events: vec![RosterEvent::ParticipantUnregistered {
            email: email.to_string(),
        }],
    }
}
