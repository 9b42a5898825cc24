use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All products, most expensive first
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list_all().await
    }

    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Replace every field of an existing product
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.get_product(id).await?;

        self.repository
            .update(id, input)
            .await?
            .ok_or(ProductError::NotFound)
    }

    /// Flip the availability of an existing product
    pub async fn toggle_availability(&self, id: i32) -> ProductResult<Product> {
        self.get_product(id).await?;

        self.repository
            .toggle_availability(id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        let deleted = self.repository.delete_by_id(id).await?;

        if deleted == 0 {
            return Err(ProductError::NotFound);
        }

        Ok(())
    }
}
