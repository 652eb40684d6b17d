#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum RosterEvent {
    ParticipantSignedUp { email: String },
    ParticipantUnregistered { email: String },
}
