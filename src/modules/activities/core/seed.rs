// Seed dataset for the roster.
//
// Purpose
// - Provide the activities the service starts with, and the snapshot a reset restores.
//
// Responsibilities
// - Build the default school roster.
// - Check that any roster used as a seed respects the roster invariants.

use crate::modules::activities::core::activity::{Activity, Roster};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("activity name must not be empty")]
    EmptyName,

    #[error("activity {activity:?} must allow at least one participant")]
    ZeroCapacity { activity: String },

    #[error("activity {activity:?} lists {email} more than once")]
    DuplicateParticipant { activity: String, email: String },

    #[error("activity {activity:?} has more participants than max_participants")]
    OverCapacity { activity: String },
}

const DEFAULT_ACTIVITIES: [(&str, &str, &str, u32, [&str; 2]); 9] = [
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        ["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        ["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        ["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Join the school soccer team and compete in matches",
        "Wednesdays, 4:00 PM - 5:30 PM",
        22,
        ["lucas@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Basketball Club",
        "Practice basketball skills and play friendly games",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        ["liam@mergington.edu", "ava@mergington.edu"],
    ),
    (
        "Art Workshop",
        "Explore painting, drawing, and sculpture techniques",
        "Mondays, 4:00 PM - 5:30 PM",
        18,
        ["ella@mergington.edu", "jack@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct, and produce school plays and performances",
        "Tuesdays, 3:30 PM - 5:00 PM",
        20,
        ["noah@mergington.edu", "grace@mergington.edu"],
    ),
    (
        "Math Olympiad",
        "Prepare for math competitions and solve challenging problems",
        "Fridays, 4:00 PM - 5:30 PM",
        15,
        ["ben@mergington.edu", "chloe@mergington.edu"],
    ),
    (
        "Science Club",
        "Conduct experiments and explore scientific concepts",
        "Wednesdays, 3:30 PM - 5:00 PM",
        16,
        ["ethan@mergington.edu", "zoe@mergington.edu"],
    ),
];

pub fn default_roster() -> Roster {
    DEFAULT_ACTIVITIES
        .iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            (
                name.to_string(),
                Activity {
                    description: description.to_string(),
                    schedule: schedule.to_string(),
                    max_participants: *max_participants,
                    participants: participants.iter().map(|p| p.to_string()).collect(),
                },
            )
        })
        .collect()
}

pub fn validate_roster(roster: &Roster) -> Result<(), SeedError> {
    for (name, activity) in roster {
        if name.is_empty() {
            return Err(SeedError::EmptyName);
        }
        if activity.max_participants == 0 {
            return Err(SeedError::ZeroCapacity {
                activity: name.clone(),
            });
        }
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.clone(),
                });
            }
        }
        if activity.participants.len() > activity.max_participants as usize {
            return Err(SeedError::OverCapacity {
                activity: name.clone(),
            });
        }
    }
    Ok(())
}
