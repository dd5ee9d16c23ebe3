//! Items Domain
//!
//! Create, list and fetch items. Names are unique; ids are assigned by the
//! store in insertion order and never reused.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + SQLite / in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, CreateItem
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, schema, ItemService, SqliteItemRepository};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = sea_orm::Database::connect("sqlite://items.db?mode=rwc").await?;
//! schema::create_tables(&db).await?;
//!
//! let repository = SqliteItemRepository::new(db);
//! let service = ItemService::new(repository);
//!
//! // Mount under /items
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod schema;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use memory::InMemoryItemRepository;
pub use models::{CreateItem, Item};
pub use repository::ItemRepository;
pub use service::ItemService;
pub use sqlite::SqliteItemRepository;
