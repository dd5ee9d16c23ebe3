use sea_orm::entity::prelude::*;

/// Sea-ORM Entity for the items table
///
/// Layout is owned by [`crate::schema`]; the unique index on `name` is what
/// makes concurrent duplicate inserts fail.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from Sea-ORM Model to domain Item
impl From<Model> for crate::models::Item {
    fn from(model: Model) -> Self {
        Self::new(model.id, model.name, model.description, model.created_at)
    }
}
