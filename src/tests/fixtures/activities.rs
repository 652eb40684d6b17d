// Shared test fixture for building activities.

use crate::modules::activities::core::activity::Activity;

pub struct ActivityBuilder {
    inner: Activity,
}

impl Default for ActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Activity> for ActivityBuilder {
    fn from(inner: Activity) -> Self {
        Self { inner }
    }
}

#[allow(dead_code)]
impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: Activity {
                description: "Test activity for unit tests".to_string(),
                schedule: "Mondays, 3:00 PM - 4:00 PM".to_string(),
                max_participants: 5,
                participants: Vec::new(),
            },
        }
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn schedule(mut self, v: impl Into<String>) -> Self {
        self.inner.schedule = v.into();
        self
    }

    pub fn max_participants(mut self, v: u32) -> Self {
        self.inner.max_participants = v;
        self
    }

    pub fn participants(mut self, v: &[&str]) -> Self {
        self.inner.participants = v.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn build(self) -> Activity {
        self.inner
    }
}

#[cfg(test)]
mod activity_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = ActivityBuilder::default().build();
        assert_eq!(built, ActivityBuilder::new().build());
        assert_eq!(built.max_participants, 5);
        assert!(built.participants.is_empty());
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let built = ActivityBuilder::new()
            .description("Advanced art and crafts")
            .schedule("Mondays, 3:00 PM")
            .max_participants(10)
            .participants(&["artist@mergington.edu"])
            .build();
        assert_eq!(built.description, "Advanced art and crafts");
        assert_eq!(built.schedule, "Mondays, 3:00 PM");
        assert_eq!(built.max_participants, 10);
        assert_eq!(built.participants, vec!["artist@mergington.edu"]);
    }
}
