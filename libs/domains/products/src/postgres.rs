use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder,
};

use crate::{
    entity,
    error::ProductResult,
    models::{CreateProduct, Product, UpdateProduct},
    repository::ProductRepository,
};

/// PostgreSQL implementation of ProductRepository
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32) -> ProductResult<Option<entity::Model>> {
        Ok(entity::Entity::find_by_id(id).one(&self.db).await?)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_desc(entity::Column::Price)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Product::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        Ok(self.find_model(id).await?.map(Product::from))
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let mut active_model = model.into_active_model();
        active_model.name = Set(input.name);
        active_model.price = Set(input.price);
        active_model.availability = Set(input.availability);
        active_model.updated_at = Set(Utc::now().into());

        let updated = active_model.update(&self.db).await?;

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(updated.into()))
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };

        let availability = !model.availability;
        let mut active_model = model.into_active_model();
        active_model.availability = Set(availability);
        active_model.updated_at = Set(Utc::now().into());

        let updated = active_model.update(&self.db).await?;

        tracing::info!(product_id = id, availability, "Toggled product availability");
        Ok(Some(updated.into()))
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<u64> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(result.rows_affected)
    }
}
