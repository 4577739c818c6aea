use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::models::{Id, MentalHealthLog, MentalHealthLogPatch, NewMentalHealthLog};
use super::collection::{Collection, Patch, UserDated};

impl UserDated for MentalHealthLog {
    fn user_id(&self) -> Id {
        self.user_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Patch<MentalHealthLog> for MentalHealthLogPatch {
    fn apply(self, log: &mut MentalHealthLog) {
        if let Some(date) = self.date {
            log.date = date;
        }
        if let Some(stress) = self.stress_level {
            log.stress_level = stress;
        }
        if let Some(anxiety) = self.anxiety_level {
            log.anxiety_level = anxiety;
        }
        if let Some(mood) = self.mood_level {
            log.mood_level = mood;
        }
        if let Some(quality) = self.sleep_quality {
            log.sleep_quality = quality;
        }
        if let Some(journal) = self.journal {
            log.journal = journal;
        }
        if let Some(gratitude) = self.gratitude {
            log.gratitude = gratitude;
        }
    }
}

#[derive(Debug, Default)]
pub struct MentalHealthLogStore {
    logs: RwLock<Collection<MentalHealthLog>>,
}

impl MentalHealthLogStore {
    pub async fn create(&self, new: NewMentalHealthLog) -> MentalHealthLog {
        self.logs.write().await.insert(|id| MentalHealthLog {
            id,
            user_id: new.user_id,
            date: new.date,
            stress_level: new.stress_level,
            anxiety_level: new.anxiety_level,
            mood_level: new.mood_level,
            sleep_quality: new.sleep_quality,
            journal: new.journal,
            gratitude: new.gratitude,
        })
    }

    pub async fn get(&self, id: Id) -> Option<MentalHealthLog> {
        self.logs.read().await.get(id)
    }

    pub async fn update(&self, id: Id, patch: MentalHealthLogPatch) -> Option<MentalHealthLog> {
        self.logs.write().await.update(id, patch)
    }

    pub async fn list_for_user(&self, user_id: Id) -> Vec<MentalHealthLog> {
        self.logs.read().await.for_user(user_id)
    }

    pub async fn list_for_user_in_range(
        &self,
        user_id: Id,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<MentalHealthLog> {
        self.logs.read().await.for_user_in_range(user_id, start, end)
    }

    pub async fn get_for_user_on_date(
        &self,
        user_id: Id,
        date: NaiveDate,
    ) -> Option<MentalHealthLog> {
        self.logs.read().await.first_on_day(user_id, date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn checkin(user_id: Id, date: &str, stress: u8) -> NewMentalHealthLog {
        NewMentalHealthLog {
            user_id,
            date: day(date),
            stress_level: stress,
            anxiety_level: 4,
            mood_level: 6,
            sleep_quality: 5,
            journal: Some("long week".into()),
            gratitude: vec!["tea".into(), "sunlight".into()],
        }
    }

    #[tokio::test]
    async fn listing_is_newest_first_per_user() {
        let store = MentalHealthLogStore::default();
        store.create(checkin(1, "2024-04-01", 3)).await;
        store.create(checkin(1, "2024-04-03", 5)).await;
        store.create(checkin(2, "2024-04-02", 9)).await;

        let stress: Vec<u8> = store
            .list_for_user(1)
            .await
            .iter()
            .map(|l| l.stress_level)
            .collect();
        assert_eq!(stress, vec![5, 3]);
        assert!(store.list_for_user(5).await.is_empty());
    }

    #[tokio::test]
    async fn update_then_lookup_by_date() {
        let store = MentalHealthLogStore::default();
        let log = store.create(checkin(1, "2024-04-01", 3)).await;

        let patch = MentalHealthLogPatch {
            stress_level: Some(8),
            gratitude: Some(vec!["friends".into()]),
            ..Default::default()
        };
        store.update(log.id, patch).await.unwrap();

        let found = store.get_for_user_on_date(1, day("2024-04-01")).await.unwrap();
        assert_eq!(found.stress_level, 8);
        assert_eq!(found.gratitude, vec!["friends".to_string()]);
        assert_eq!(found.anxiety_level, log.anxiety_level);
        assert_eq!(found.journal, log.journal);
    }

    #[tokio::test]
    async fn range_excludes_days_outside_bounds() {
        let store = MentalHealthLogStore::default();
        store.create(checkin(1, "2024-03-31", 1)).await;
        store.create(checkin(1, "2024-04-15", 2)).await;
        store.create(checkin(1, "2024-05-01", 3)).await;

        let april = store
            .list_for_user_in_range(1, day("2024-04-01"), day("2024-04-30"))
            .await;
        assert_eq!(april.len(), 1);
        assert_eq!(april[0].stress_level, 2);
    }
}
