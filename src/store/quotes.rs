use rand::seq::IteratorRandom;
use tokio::sync::RwLock;

use crate::models::{MotivationalQuote, NewMotivationalQuote};
use super::collection::Collection;

#[derive(Debug, Default)]
pub struct QuoteStore {
    quotes: RwLock<Collection<MotivationalQuote>>,
}

impl QuoteStore {
    pub(super) async fn create(&self, new: NewMotivationalQuote) -> MotivationalQuote {
        self.quotes.write().await.insert(|id| MotivationalQuote {
            id,
            quote: new.quote,
            author: new.author,
            category: new.category,
        })
    }

    pub async fn count(&self) -> usize {
        self.quotes.read().await.len()
    }

    pub async fn list(&self) -> Vec<MotivationalQuote> {
        self.quotes.read().await.list()
    }

    /// Uniform pick; `None` when no quotes are stored.
    pub async fn random(&self) -> Option<MotivationalQuote> {
        let quotes = self.quotes.read().await;
        quotes.iter().choose(&mut rand::thread_rng()).cloned()
    }
}
