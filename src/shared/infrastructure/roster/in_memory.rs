use crate::modules::activities::core::activity::{Activity, Roster};
use crate::modules::activities::core::seed::default_roster;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use crate::shared::infrastructure::roster::{ActivityGuard, ActivityRoster, RosterError};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

type Slots = BTreeMap<String, Arc<Mutex<Activity>>>;

pub struct InMemoryRoster {
    activities: RwLock<Slots>,
    seed: Roster,
    is_offline: bool,
}

impl Default for InMemoryRoster {
    fn default() -> Self {
        Self::new(default_roster())
    }
}

impl InMemoryRoster {
    pub fn new(seed: Roster) -> Self {
        Self {
            activities: RwLock::new(Self::slots(&seed)),
            seed,
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Restores the seed snapshot, dropping every change made since startup.
    pub async fn reset(&self) {
        *self.activities.write().await = Self::slots(&self.seed);
    }

    /// Adds or replaces an activity. Not part of the seed, so a reset drops it.
    pub async fn insert(&self, name: impl Into<String>, activity: Activity) {
        self.activities
            .write()
            .await
            .insert(name.into(), Arc::new(Mutex::new(activity)));
    }

    pub async fn remove(&self, name: &str) -> Option<Activity> {
        let slot = self.activities.write().await.remove(name)?;
        let activity = slot.lock().await.clone();
        Some(activity)
    }

    pub async fn get(&self, name: &str) -> Option<Activity> {
        let slot = self.activities.read().await.get(name).cloned()?;
        let activity = slot.lock().await.clone();
        Some(activity)
    }

    fn slots(roster: &Roster) -> Slots {
        roster
            .iter()
            .map(|(name, activity)| (name.clone(), Arc::new(Mutex::new(activity.clone()))))
            .collect()
    }
}

#[async_trait::async_trait]
impl ActivityRoster for InMemoryRoster {
    async fn checkout(&self, name: &str) -> Result<Option<ActivityGuard>, RosterError> {
        if self.is_offline {
            return Err(RosterError::Backend("Roster offline".into()));
        }

        // Release the map before waiting on the activity so other activities stay reachable.
        let slot = self.activities.read().await.get(name).cloned();
        match slot {
            Some(slot) => Ok(Some(slot.lock_owned().await)),
            None => Ok(None),
        }
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryRoster {
    async fn list_activities(&self) -> anyhow::Result<Roster> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Roster offline"));
        }

        let slots: Vec<(String, Arc<Mutex<Activity>>)> = self
            .activities
            .read()
            .await
            .iter()
            .map(|(name, slot)| (name.clone(), slot.clone()))
            .collect();

        let mut roster = Roster::new();
        for (name, slot) in slots {
            let activity = slot.lock().await.clone();
            roster.insert(name, activity);
        }
        Ok(roster)
    }
}
