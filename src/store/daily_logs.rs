use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::models::{DailyLog, DailyLogPatch, Id, NewDailyLog};
use super::collection::{Collection, Patch, UserDated};

impl UserDated for DailyLog {
    fn user_id(&self) -> Id {
        self.user_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Patch<DailyLog> for DailyLogPatch {
    fn apply(self, log: &mut DailyLog) {
        if let Some(date) = self.date {
            log.date = date;
        }
        if let Some(mood) = self.mood {
            log.mood = mood;
        }
        if let Some(energy) = self.energy {
            log.energy = energy;
        }
        if let Some(hours) = self.sleep_hours {
            log.sleep_hours = hours;
        }
        if let Some(exercised) = self.exercised {
            log.exercised = exercised;
        }
        if let Some(kind) = self.exercise_type {
            log.exercise_type = kind;
        }
        if let Some(minutes) = self.exercise_duration {
            log.exercise_duration = minutes;
        }
        if let Some(diet) = self.diet {
            log.diet = diet;
        }
        if let Some(supplements) = self.supplements {
            log.supplements = supplements;
        }
        if let Some(symptoms) = self.symptoms {
            log.symptoms = symptoms;
        }
        if let Some(notes) = self.notes {
            log.notes = notes;
        }
    }
}

#[derive(Debug, Default)]
pub struct DailyLogStore {
    logs: RwLock<Collection<DailyLog>>,
}

impl DailyLogStore {
    pub async fn create(&self, new: NewDailyLog) -> DailyLog {
        self.logs.write().await.insert(|id| DailyLog {
            id,
            user_id: new.user_id,
            date: new.date,
            mood: new.mood,
            energy: new.energy,
            sleep_hours: new.sleep_hours,
            exercised: new.exercised,
            exercise_type: new.exercise_type,
            exercise_duration: new.exercise_duration,
            diet: new.diet,
            supplements: new.supplements,
            symptoms: new.symptoms,
            notes: new.notes,
        })
    }

    pub async fn get(&self, id: Id) -> Option<DailyLog> {
        self.logs.read().await.get(id)
    }

    pub async fn update(&self, id: Id, patch: DailyLogPatch) -> Option<DailyLog> {
        self.logs.write().await.update(id, patch)
    }

    pub async fn list_for_user(&self, user_id: Id) -> Vec<DailyLog> {
        self.logs.read().await.for_user(user_id)
    }

    pub async fn list_for_user_in_range(
        &self,
        user_id: Id,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<DailyLog> {
        self.logs.read().await.for_user_in_range(user_id, start, end)
    }

    /// First log of `user_id` on `date`. Later same-day logs are only
    /// reachable through the list queries.
    pub async fn get_for_user_on_date(&self, user_id: Id, date: NaiveDate) -> Option<DailyLog> {
        self.logs.read().await.first_on_day(user_id, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn happy_day(user_id: Id, date: &str) -> NewDailyLog {
        serde_json::from_value(json!({
            "user_id": user_id,
            "date": date,
            "mood": "happy",
            "energy": 7,
            "sleep_hours": 8.0,
            "exercised": true,
            "exercise_type": "yoga",
            "exercise_duration": 30,
            "diet": { "breakfast": "oats", "water_glasses": 6 },
            "supplements": ["inositol"],
            "symptoms": ["bloating"],
            "notes": "good day"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn mood_update_is_visible_through_date_lookup() {
        let store = DailyLogStore::default();
        let original = store.create(happy_day(3, "2024-02-02")).await;

        let patch = DailyLogPatch {
            mood: Some("sad".into()),
            ..Default::default()
        };
        store.update(original.id, patch).await.unwrap();

        let found = store.get_for_user_on_date(3, day("2024-02-02")).await.unwrap();
        assert_eq!(found.mood, "sad");
        assert_eq!(found.id, original.id);
        assert_eq!(found.energy, original.energy);
        assert_eq!(found.sleep_hours, original.sleep_hours);
        assert_eq!(found.exercise_type, original.exercise_type);
        assert_eq!(found.exercise_duration, original.exercise_duration);
        assert_eq!(found.diet, original.diet);
        assert_eq!(found.supplements, original.supplements);
        assert_eq!(found.symptoms, original.symptoms);
        assert_eq!(found.notes, original.notes);
    }

    #[tokio::test]
    async fn timestamps_collapse_to_their_calendar_day() {
        let store = DailyLogStore::default();
        let mut new = happy_day(3, "2024-02-02");
        new.date = crate::models::day::parse("2024-02-02T23:10:00Z").unwrap();
        store.create(new).await;

        assert!(store.get_for_user_on_date(3, day("2024-02-02")).await.is_some());
        assert!(store.get_for_user_on_date(3, day("2024-02-03")).await.is_none());
    }

    #[tokio::test]
    async fn date_lookup_agrees_with_user_listing() {
        let store = DailyLogStore::default();
        for d in ["2024-02-01", "2024-02-03", "2024-02-07"] {
            store.create(happy_day(3, d)).await;
        }
        store.create(happy_day(4, "2024-02-02")).await;

        let listed = store.list_for_user(3).await;
        for offset in 0..10 {
            let probe = day("2024-02-01") + chrono::Duration::days(offset);
            let expected = listed.iter().any(|l| l.date == probe);
            let found = store.get_for_user_on_date(3, probe).await.is_some();
            assert_eq!(found, expected, "mismatch on {probe}");
        }
    }

    #[tokio::test]
    async fn duplicate_days_are_kept_but_lookup_returns_first() {
        let store = DailyLogStore::default();
        let first = store.create(happy_day(3, "2024-02-02")).await;
        let mut second = happy_day(3, "2024-02-02");
        second.mood = "tired".into();
        store.create(second).await;

        let found = store.get_for_user_on_date(3, day("2024-02-02")).await.unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(store.list_for_user(3).await.len(), 2);
    }
}
