// Pure decision function for signing a student up.
//
// Responsibilities
// - Reject malformed emails, duplicate registrations and signups on a full activity.
// - Emit ParticipantSignedUp otherwise.
// - Never perform input or output.

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::{DecideError, Decision};
use crate::modules::activities::core::email::is_valid_email;
use crate::modules::activities::core::events::RosterEvent;

pub fn decide_sign_up(state: &Activity, email: &str) -> Decision {
    let reason = if !is_valid_email(email) {
        DecideError::InvalidEmail
    } else if state.is_registered(email) {
        DecideError::AlreadySignedUp
    } else if state.is_full() {
        DecideError::ActivityFull
    } else {
        return Decision::Accepted {
            events: vec![RosterEvent::ParticipantSignedUp {
                email: email.to_string(),
            }],
        };
    };
    Decision::Rejected { reason }
}
