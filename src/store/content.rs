use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{EducationalContent, Id, NewEducationalContent};
use super::collection::Collection;

#[derive(Debug, Default)]
pub struct ContentStore {
    items: RwLock<Collection<EducationalContent>>,
}

impl ContentStore {
    /// `created_at` is stamped here, never taken from the caller.
    pub(super) async fn create(&self, new: NewEducationalContent) -> EducationalContent {
        let created_at = Utc::now();
        self.items.write().await.insert(|id| EducationalContent {
            id,
            title: new.title,
            description: new.description,
            content_type: new.content_type,
            category: new.category,
            image_url: new.image_url,
            video_url: new.video_url,
            created_at,
            tags: new.tags,
        })
    }

    pub async fn count(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn list(&self) -> Vec<EducationalContent> {
        self.items.read().await.list()
    }

    pub async fn get(&self, id: Id) -> Option<EducationalContent> {
        self.items.read().await.get(id)
    }

    /// Case-insensitive exact match on the category name.
    pub async fn list_by_category(&self, category: &str) -> Vec<EducationalContent> {
        let wanted = category.to_lowercase();
        self.items
            .read()
            .await
            .iter()
            .filter(|c| c.category.to_lowercase() == wanted)
            .cloned()
            .collect()
    }
}
