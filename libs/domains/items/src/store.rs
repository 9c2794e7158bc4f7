use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::Item;

/// Name-keyed storage for items.
///
/// Every operation is atomic: it applies fully or fails without side effects.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// All items in insertion order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Exact, case-sensitive lookup
    async fn find_by_name(&self, name: &str) -> ItemResult<Option<Item>>;

    /// Append a new item; a taken name is rejected
    async fn insert(&self, item: Item) -> ItemResult<Item>;

    /// Swap the record keyed by `old_name` for `item`, keeping its position
    async fn replace(&self, old_name: &str, item: Item) -> ItemResult<Item>;

    /// Delete and return the record keyed by `name`
    async fn remove(&self, name: &str) -> ItemResult<Item>;

    /// Drop every record
    async fn clear(&self) -> ItemResult<()>;

    /// Number of records
    async fn count(&self) -> ItemResult<usize>;
}

/// Process-lifetime store kept in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn position(items: &[Item], name: &str) -> Option<usize> {
    items.iter().position(|item| item.name == name)
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> ItemResult<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(position(&items, name).map(|idx| items[idx].clone()))
    }

    async fn insert(&self, item: Item) -> ItemResult<Item> {
        let mut items = self.items.write().await;

        if position(&items, &item.name).is_some() {
            return Err(ItemError::DuplicateName(item.name));
        }

        items.push(item.clone());
        tracing::info!(item_name = %item.name, "Inserted item");
        Ok(item)
    }

    async fn replace(&self, old_name: &str, item: Item) -> ItemResult<Item> {
        let mut items = self.items.write().await;

        let idx =
            position(&items, old_name).ok_or_else(|| ItemError::NotFound(old_name.to_string()))?;

        if item.name != old_name && position(&items, &item.name).is_some() {
            return Err(ItemError::DuplicateName(item.name));
        }

        items[idx] = item.clone();
        tracing::info!(old_name, item_name = %item.name, "Replaced item");
        Ok(item)
    }

    async fn remove(&self, name: &str) -> ItemResult<Item> {
        let mut items = self.items.write().await;

        let idx = position(&items, name).ok_or_else(|| ItemError::NotFound(name.to_string()))?;
        let removed = items.remove(idx);

        tracing::info!(item_name = %removed.name, "Removed item");
        Ok(removed)
    }

    async fn clear(&self) -> ItemResult<()> {
        let mut items = self.items.write().await;
        let dropped = items.len();
        items.clear();

        tracing::debug!(dropped, "Cleared item store");
        Ok(())
    }

    async fn count(&self) -> ItemResult<usize> {
        Ok(self.items.read().await.len())
    }
}
