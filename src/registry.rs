//! In-memory activity registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::error::{Error, Result};

/// An extracurricular offering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    /// Human-readable meeting times, e.g. "Fridays, 3:30 PM - 5:00 PM".
    pub schedule: String,
    /// Informational capacity; signup does not enforce it.
    pub max_participants: u32,
    /// Registered student emails, in signup order. No duplicates.
    pub participants: Vec<String>,
}

/// Registry of activities keyed by name.
///
/// Seeded once at startup; only the participant lists change afterwards.
/// Handlers share it through `AppState`, so tests can build their own
/// isolated instances.
pub struct ActivityRegistry {
    activities: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityRegistry {
    /// Create a registry holding the given activities.
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Create a registry seeded with the school's activity table.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    /// Snapshot of every activity.
    pub async fn all(&self) -> BTreeMap<String, Activity> {
        self.activities.read().await.clone()
    }

    /// Add `email` to the participant list of `activity_name`.
    pub async fn signup(&self, activity_name: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(Error::ActivityNotFound)?;

        if activity.participants.iter().any(|p| p == email) {
            return Err(Error::AlreadySignedUp);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the participant list of `activity_name`.
    pub async fn unregister(&self, activity_name: &str, email: &str) -> Result<()> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(activity_name)
            .ok_or(Error::ActivityNotFound)?;

        let index = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(Error::NotSignedUp)?;

        activity.participants.remove(index);
        Ok(())
    }
}

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The school's activity table.
fn seed_activities() -> BTreeMap<String, Activity> {
    BTreeMap::from([
        (
            "Soccer Team".to_string(),
            activity(
                "Train in soccer skills and compete in inter-school matches",
                "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
                22,
                &["liam@mergington.edu", "ava@mergington.edu"],
            ),
        ),
        (
            "Basketball Club".to_string(),
            activity(
                "Practice basketball fundamentals and team play",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                15,
                &["noah@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Art Club".to_string(),
            activity(
                "Explore drawing, painting, and mixed media projects",
                "Wednesdays, 3:30 PM - 5:00 PM",
                18,
                &["isabella@mergington.edu", "lucas@mergington.edu"],
            ),
        ),
        (
            "Drama Society".to_string(),
            activity(
                "Develop acting and stage performance through school productions",
                "Fridays, 3:30 PM - 5:30 PM",
                25,
                &["amelia@mergington.edu", "henry@mergington.edu"],
            ),
        ),
        (
            "Debate Team".to_string(),
            activity(
                "Build critical thinking and public speaking through debate practice",
                "Mondays, 3:30 PM - 5:00 PM",
                16,
                &["charlotte@mergington.edu", "ethan@mergington.edu"],
            ),
        ),
        (
            "Science Olympiad".to_string(),
            activity(
                "Prepare for science competitions with hands-on problem solving",
                "Thursdays, 3:30 PM - 5:00 PM",
                14,
                &["harper@mergington.edu", "jack@mergington.edu"],
            ),
        ),
        (
            "Chess Club".to_string(),
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class".to_string(),
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class".to_string(),
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_registry_contains_activity_table() {
        let registry = ActivityRegistry::seeded();
        let activities = registry.all().await;

        assert_eq!(activities.len(), 9);

        let soccer = &activities["Soccer Team"];
        assert_eq!(soccer.max_participants, 22);
        assert_eq!(
            soccer.participants,
            ["liam@mergington.edu", "ava@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn test_signup_appends_participant() {
        let registry = ActivityRegistry::seeded();

        registry
            .signup("Chess Club", "newstudent@mergington.edu")
            .await
            .unwrap();

        let activities = registry.all().await;
        assert_eq!(
            activities["Chess Club"].participants,
            [
                "michael@mergington.edu",
                "daniel@mergington.edu",
                "newstudent@mergington.edu",
            ]
        );
    }

    #[tokio::test]
    async fn test_signup_rejects_duplicate() {
        let registry = ActivityRegistry::seeded();

        let err = registry
            .signup("Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::AlreadySignedUp));
        let activities = registry.all().await;
        assert_eq!(activities["Chess Club"].participants.len(), 2);
    }

    #[tokio::test]
    async fn test_signup_unknown_activity() {
        let registry = ActivityRegistry::seeded();

        let err = registry
            .signup("Knitting Circle", "a@mergington.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ActivityNotFound));
    }

    #[tokio::test]
    async fn test_unregister_removes_exactly_one_email() {
        let registry = ActivityRegistry::seeded();

        registry
            .unregister("Gym Class", "john@mergington.edu")
            .await
            .unwrap();

        let activities = registry.all().await;
        assert_eq!(activities["Gym Class"].participants, ["olivia@mergington.edu"]);
    }

    #[tokio::test]
    async fn test_unregister_non_participant() {
        let registry = ActivityRegistry::seeded();

        let err = registry
            .unregister("Gym Class", "not.registered@mergington.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::NotSignedUp));
    }

    #[tokio::test]
    async fn test_unregister_unknown_activity() {
        let registry = ActivityRegistry::seeded();

        let err = registry
            .unregister("Knitting Circle", "a@mergington.edu")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ActivityNotFound));
    }
}
