use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An inventory item. `name` is the lookup key and is unique in a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique item name
    #[schema(example = "pickles")]
    pub name: String,
    /// Unit price
    #[schema(example = 2.45)]
    pub price: f64,
}

/// DTO for creating a new item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
}

/// DTO for a partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
}

impl UpdateItem {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

/// `GET /items/{name}` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub item: Item,
}

/// `POST /items` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemAdded {
    pub added: Item,
}

/// `PATCH /items/{name}` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ItemUpdated {
    pub updated: Item,
}

/// Plain confirmation body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Deleted")]
    pub message: String,
}

impl MessageResponse {
    pub fn deleted() -> Self {
        Self {
            message: "Deleted".to_string(),
        }
    }
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Returns a copy with the present fields of `update` applied.
    pub fn merged(&self, update: UpdateItem) -> Self {
        Self {
            name: update.name.unwrap_or_else(|| self.name.clone()),
            price: update.price.unwrap_or(self.price),
        }
    }
}

impl From<CreateItem> for Item {
    fn from(input: CreateItem) -> Self {
        Self::new(input.name, input.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pickles() -> Item {
        Item::new("pickles", 2.45)
    }

    #[test]
    fn test_merge_price_only_keeps_name() {
        let updated = pickles().merged(UpdateItem {
            price: Some(2.65),
            ..Default::default()
        });
        assert_eq!(updated, Item::new("pickles", 2.65));
    }

    #[test]
    fn test_merge_name_only_keeps_price() {
        let updated = pickles().merged(UpdateItem {
            name: Some("dill pickles".to_string()),
            ..Default::default()
        });
        assert_eq!(updated, Item::new("dill pickles", 2.45));
    }

    #[test]
    fn test_merge_both_fields() {
        let updated = pickles().merged(UpdateItem {
            name: Some("radishes".to_string()),
            price: Some(0.99),
        });
        assert_eq!(updated, Item::new("radishes", 0.99));
    }

    #[test]
    fn test_merge_leaves_snapshot_untouched() {
        let original = pickles();
        let _ = original.merged(UpdateItem {
            name: Some("radishes".to_string()),
            price: Some(0.99),
        });
        assert_eq!(original, pickles());
    }

    #[test]
    fn test_create_item_validation() {
        let valid = CreateItem {
            name: "cheese".to_string(),
            price: 3.47,
        };
        assert!(valid.validate().is_ok());

        let empty_name = CreateItem {
            name: String::new(),
            price: 3.47,
        };
        assert!(empty_name.validate().is_err());

        let negative = CreateItem {
            name: "cheese".to_string(),
            price: -1.0,
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_update_item_validation_skips_absent_fields() {
        assert!(UpdateItem::default().validate().is_ok());
        assert!(UpdateItem::default().is_empty());

        let bad = UpdateItem {
            name: Some(String::new()),
            price: None,
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_item_serializes_as_name_and_price() {
        let json = serde_json::to_value(Item::new("cheese", 3.47)).unwrap();
        assert_eq!(json, serde_json::json!({"name": "cheese", "price": 3.47}));
    }
}
