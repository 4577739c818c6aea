use chrono::NaiveDate;
use tokio::sync::RwLock;

use crate::models::{Id, NewPeriodLog, PeriodLog, PeriodLogPatch};
use super::collection::{Collection, Patch, UserDated};

impl UserDated for PeriodLog {
    fn user_id(&self) -> Id {
        self.user_id
    }

    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Patch<PeriodLog> for PeriodLogPatch {
    fn apply(self, log: &mut PeriodLog) {
        if let Some(date) = self.date {
            log.date = date;
        }
        if let Some(started) = self.period_started {
            log.period_started = started;
        }
        if let Some(flow) = self.flow_level {
            log.flow_level = flow;
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
pub struct PeriodLogStore {
    logs: RwLock<Collection<PeriodLog>>,
}

impl PeriodLogStore {
    pub async fn create(&self, new: NewPeriodLog) -> PeriodLog {
        self.logs.write().await.insert(|id| PeriodLog {
            id,
            user_id: new.user_id,
            date: new.date,
            period_started: new.period_started,
            flow_level: new.flow_level,
            symptoms: new.symptoms,
            notes: new.notes,
        })
    }

    pub async fn get(&self, id: Id) -> Option<PeriodLog> {
        self.logs.read().await.get(id)
    }

    pub async fn update(&self, id: Id, patch: PeriodLogPatch) -> Option<PeriodLog> {
        self.logs.write().await.update(id, patch)
    }

    pub async fn list_for_user(&self, user_id: Id) -> Vec<PeriodLog> {
        self.logs.read().await.for_user(user_id)
    }

    pub async fn list_for_user_in_range(
        &self,
        user_id: Id,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<PeriodLog> {
        self.logs.read().await.for_user_in_range(user_id, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlowLevel;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(user_id: Id, date: &str) -> NewPeriodLog {
        NewPeriodLog {
            user_id,
            date: day(date),
            period_started: false,
            flow_level: Some(FlowLevel::Medium),
            symptoms: vec!["cramps".into()],
            notes: None,
        }
    }

    #[tokio::test]
    async fn range_query_returns_only_days_inside_bounds() {
        let store = PeriodLogStore::default();
        store.create(entry(7, "2024-01-01")).await;
        let mid = store.create(entry(7, "2024-01-05")).await;
        store.create(entry(7, "2024-01-10")).await;

        let hits = store
            .list_for_user_in_range(7, day("2024-01-02"), day("2024-01-08"))
            .await;

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, mid.id);
        assert_eq!(hits[0].date, day("2024-01-05"));
    }

    #[tokio::test]
    async fn range_bounds_are_inclusive() {
        let store = PeriodLogStore::default();
        for d in ["2024-01-01", "2024-01-05", "2024-01-10"] {
            store.create(entry(7, d)).await;
        }

        let hits = store
            .list_for_user_in_range(7, day("2024-01-01"), day("2024-01-10"))
            .await;
        let dates: Vec<NaiveDate> = hits.iter().map(|l| l.date).collect();
        assert_eq!(dates, vec![day("2024-01-10"), day("2024-01-05"), day("2024-01-01")]);
    }

    #[tokio::test]
    async fn update_keeps_untouched_fields() {
        let store = PeriodLogStore::default();
        let log = store.create(entry(1, "2024-03-01")).await;

        let patch = PeriodLogPatch {
            flow_level: Some(Some(FlowLevel::Heavy)),
            ..Default::default()
        };
        store.update(log.id, patch).await.unwrap();

        let stored = store.get(log.id).await.unwrap();
        assert_eq!(stored.flow_level, Some(FlowLevel::Heavy));
        assert_eq!(stored.symptoms, log.symptoms);
        assert_eq!(stored.date, log.date);
        assert!(store.update(5, PeriodLogPatch::default()).await.is_none());
    }

    #[tokio::test]
    async fn null_in_patch_clears_the_field() {
        let store = PeriodLogStore::default();
        let mut new = entry(1, "2024-03-01");
        new.flow_level = Some(FlowLevel::Light);
        new.notes = Some("spotty".into());
        let log = store.create(new).await;

        let patch: PeriodLogPatch =
            serde_json::from_str(r#"{"notes":null,"flow_level":null}"#).unwrap();
        store.update(log.id, patch).await.unwrap();

        let stored = store.get(log.id).await.unwrap();
        assert_eq!(stored.notes, None);
        assert_eq!(stored.flow_level, None);
        assert_eq!(stored.symptoms, log.symptoms);
        assert_eq!(stored.period_started, log.period_started);
    }
}
