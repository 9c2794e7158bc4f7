//! Items Domain
//!
//! Name-keyed inventory items with a price, served over HTTP JSON.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, uniqueness, partial-update merge
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │    Store    │  ← ItemStore trait + in-memory implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, DTOs, response envelopes
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use axum::Router;
//! use domain_items::{InMemoryItemStore, ItemService, handlers};
//!
//! let service = ItemService::new(InMemoryItemStore::new());
//! let app: Router = Router::new().nest("/items", handlers::router(service));
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{
    CreateItem, Item, ItemAdded, ItemResponse, ItemUpdated, MessageResponse, UpdateItem,
};
pub use service::ItemService;
pub use store::{InMemoryItemStore, ItemStore};
