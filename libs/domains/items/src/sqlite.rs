use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr};

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::Item,
    repository::ItemRepository,
};

/// SQLite-backed item store
///
/// `insert` is a single INSERT; the UNIQUE index on `name` rejects a
/// duplicate atomically, including one racing in from another connection.
#[derive(Clone)]
pub struct SqliteItemRepository {
    db: DatabaseConnection,
}

impl SqliteItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn map_insert_error(err: DbErr, name: &str) -> ItemError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ItemError::DuplicateName(name.to_owned()),
            _ => {
                tracing::error!(error = %err, "Failed to insert item");
                ItemError::from(err)
            }
        }
    }
}

#[async_trait]
impl ItemRepository for SqliteItemRepository {
    async fn insert(&self, name: &str, description: Option<String>) -> ItemResult<Item> {
        let active_model = entity::ActiveModel {
            name: Set(name.to_owned()),
            description: Set(description),
            // Stored and returned values must agree; JSON carries microseconds
            created_at: Set(Utc::now().trunc_subsecs(6)),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| Self::map_insert_error(e, name))?;

        tracing::info!(item_id = model.id, "Created item");
        Ok(model.into())
    }

    async fn list_all(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> ItemResult<Item> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Item::from)
            .ok_or(ItemError::NotFound(id))
    }
}
