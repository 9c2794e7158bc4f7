//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::store::ItemStore;

/// Item service providing business logic operations
///
/// Validates input, enforces name uniqueness, and orchestrates store calls.
/// Cloning is cheap; clones share the same store.
pub struct ItemService<S: ItemStore> {
    store: Arc<S>,
}

/// Rejects NaN and infinities, which `range(min = 0.0)` accepts.
fn ensure_finite(price: Option<f64>) -> ItemResult<()> {
    match price {
        Some(p) if !p.is_finite() => {
            let mut error = ValidationError::new("finite");
            error.message = Some("price must be a finite number".into());

            let mut errors = ValidationErrors::new();
            errors.add("price", error);
            Err(ItemError::Validation(errors))
        }
        _ => Ok(()),
    }
}

impl<S: ItemStore> ItemService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// List every item in insertion order
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.store.list().await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, name: &str) -> ItemResult<Item> {
        self.store
            .find_by_name(name)
            .await?
            .ok_or_else(|| ItemError::NotFound(name.to_string()))
    }

    /// Create a new item
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input.validate()?;
        ensure_finite(Some(input.price))?;

        if self.store.find_by_name(&input.name).await?.is_some() {
            return Err(ItemError::DuplicateName(input.name));
        }

        self.store.insert(Item::from(input)).await
    }

    /// Apply the present fields of `input` to the item called `name`.
    ///
    /// The merge is computed on a snapshot and written back with a single
    /// `replace`, so a failure leaves the stored record untouched.
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, name: &str, input: UpdateItem) -> ItemResult<Item> {
        input.validate()?;
        ensure_finite(input.price)?;

        let existing = self.get_item(name).await?;
        if input.is_empty() {
            tracing::debug!(item_name = %existing.name, "Empty patch, item unchanged");
            return Ok(existing);
        }
        let updated = existing.merged(input);

        if updated.name != existing.name
            && self.store.find_by_name(&updated.name).await?.is_some()
        {
            return Err(ItemError::DuplicateName(updated.name));
        }

        self.store.replace(&existing.name, updated).await
    }

    /// Delete an item, returning what was removed
    #[instrument(skip(self))]
    pub async fn delete_item(&self, name: &str) -> ItemResult<Item> {
        self.store.remove(name).await
    }
}

impl<S: ItemStore> Clone for ItemService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockItemStore;

    fn pickles() -> Item {
        Item::new("pickles", 2.45)
    }

    #[tokio::test]
    async fn test_get_item_not_found() {
        let mut store = MockItemStore::new();
        store
            .expect_find_by_name()
            .withf(|name| name == "0")
            .returning(|_| Ok(None));

        let service = ItemService::new(store);
        let result = service.get_item("0").await;

        assert_eq!(result, Err(ItemError::NotFound("0".to_string())));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_without_inserting() {
        let mut store = MockItemStore::new();
        store
            .expect_find_by_name()
            .returning(|_| Ok(Some(pickles())));
        store.expect_insert().never();

        let service = ItemService::new(store);
        let result = service
            .create_item(CreateItem {
                name: "pickles".to_string(),
                price: 1.0,
            })
            .await;

        assert_eq!(result, Err(ItemError::DuplicateName("pickles".to_string())));
    }

    #[tokio::test]
    async fn test_create_validates_before_touching_store() {
        let mut store = MockItemStore::new();
        store.expect_find_by_name().never();
        store.expect_insert().never();

        let service = ItemService::new(store);
        let result = service
            .create_item(CreateItem {
                name: String::new(),
                price: 1.0,
            })
            .await;

        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_rejects_non_finite_price() {
        let mut store = MockItemStore::new();
        store.expect_insert().never();

        let service = ItemService::new(store);
        let result = service
            .create_item(CreateItem {
                name: "cheese".to_string(),
                price: f64::INFINITY,
            })
            .await;

        match result {
            Err(ItemError::Validation(errors)) => {
                assert!(errors.field_errors().contains_key("price"));
            }
            other => panic!("expected a price validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_price_only_replaces_under_same_name() {
        let mut store = MockItemStore::new();
        store
            .expect_find_by_name()
            .withf(|name| name == "pickles")
            .times(1)
            .returning(|_| Ok(Some(pickles())));
        store
            .expect_replace()
            .withf(|old_name, item| old_name == "pickles" && *item == Item::new("pickles", 2.65))
            .times(1)
            .returning(|_, item| Ok(item));

        let service = ItemService::new(store);
        let updated = service
            .update_item(
                "pickles",
                UpdateItem {
                    price: Some(2.65),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated, Item::new("pickles", 2.65));
    }

    #[tokio::test]
    async fn test_update_rename_onto_taken_name_is_conflict() {
        let mut store = MockItemStore::new();
        store
            .expect_find_by_name()
            .returning(|name| Ok(Some(Item::new(name, 1.0))));
        store.expect_replace().never();

        let service = ItemService::new(store);
        let result = service
            .update_item(
                "pickles",
                UpdateItem {
                    name: Some("cheese".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result, Err(ItemError::DuplicateName("cheese".to_string())));
    }

    #[tokio::test]
    async fn test_update_missing_item_is_not_found() {
        let mut store = MockItemStore::new();
        store.expect_find_by_name().returning(|_| Ok(None));
        store.expect_replace().never();

        let service = ItemService::new(store);
        let result = service.update_item("0", UpdateItem::default()).await;

        assert_eq!(result, Err(ItemError::NotFound("0".to_string())));
    }

    #[tokio::test]
    async fn test_delete_passes_store_not_found_through() {
        let mut store = MockItemStore::new();
        store
            .expect_remove()
            .returning(|name| Err(ItemError::NotFound(name.to_string())));

        let service = ItemService::new(store);
        let result = service.delete_item("kale").await;

        assert_eq!(result, Err(ItemError::NotFound("kale".to_string())));
    }
}
