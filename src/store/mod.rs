//! In-memory record store. One keyed collection per entity kind, each
//! behind its own lock, aggregated by [`Storage`].

pub mod collection;
pub mod content;
pub mod daily_logs;
pub mod ids;
pub mod mental_health;
pub mod period_logs;
pub mod quotes;
pub mod users;
mod seed;

use content::ContentStore;
use daily_logs::DailyLogStore;
use mental_health::MentalHealthLogStore;
use period_logs::PeriodLogStore;
use quotes::QuoteStore;
use users::UserStore;

/// Every collection the routes read from or write to. Shared as
/// `Arc<Storage>` for the lifetime of the process. Only [`Storage::new`]
/// builds one outside tests, so the bootstrap content is always present.
#[derive(Debug)]
pub struct Storage {
    users: UserStore,
    period_logs: PeriodLogStore,
    daily_logs: DailyLogStore,
    mental_health_logs: MentalHealthLogStore,
    content: ContentStore,
    quotes: QuoteStore,
}

impl Storage {
    /// Empty stores plus the bootstrap articles and quotes.
    pub async fn new() -> Self {
        let storage = Self::unseeded();
        for item in seed::content() {
            storage.content.create(item).await;
        }
        for quote in seed::quotes() {
            storage.quotes.create(quote).await;
        }
        tracing::info!(
            "🌱 Seeded {} articles and {} quotes",
            storage.content.count().await,
            storage.quotes.count().await
        );
        storage
    }

    fn unseeded() -> Self {
        Self {
            users: UserStore::default(),
            period_logs: PeriodLogStore::default(),
            daily_logs: DailyLogStore::default(),
            mental_health_logs: MentalHealthLogStore::default(),
            content: ContentStore::default(),
            quotes: QuoteStore::default(),
        }
    }

    /// Facade without the bootstrap records.
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self::unseeded()
    }

    pub fn users(&self) -> &UserStore {
        &self.users
    }

    pub fn period_logs(&self) -> &PeriodLogStore {
        &self.period_logs
    }

    pub fn daily_logs(&self) -> &DailyLogStore {
        &self.daily_logs
    }

    pub fn mental_health_logs(&self) -> &MentalHealthLogStore {
        &self.mental_health_logs
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn quotes(&self) -> &QuoteStore {
        &self.quotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeding_fills_content_and_quotes_only() {
        let storage = Storage::new().await;

        let content = storage.content().list().await;
        let quotes = storage.quotes().list().await;
        assert_eq!(content.len(), seed::content().len());
        assert_eq!(quotes.len(), seed::quotes().len());

        let ids: Vec<u32> = content.iter().map(|c| c.id).collect();
        let expected: Vec<u32> = (1..=content.len() as u32).collect();
        assert_eq!(ids, expected);

        assert!(storage.users().get(1).await.is_none());
        assert!(storage.period_logs().list_for_user(1).await.is_empty());
        assert!(storage.quotes().random().await.is_some());
    }

    #[tokio::test]
    async fn empty_facade_has_no_records() {
        let storage = Storage::empty();
        assert_eq!(storage.content().count().await, 0);
        assert!(storage.quotes().random().await.is_none());
    }

    #[tokio::test]
    async fn seeded_nutrition_content_matches_any_case() {
        let storage = Storage::new().await;
        let a = storage.content().list_by_category("Nutrition").await;
        let b = storage.content().list_by_category("nutrition").await;

        assert!(!a.is_empty());
        assert_eq!(
            a.iter().map(|c| c.id).collect::<Vec<_>>(),
            b.iter().map(|c| c.id).collect::<Vec<_>>()
        );
    }
}
