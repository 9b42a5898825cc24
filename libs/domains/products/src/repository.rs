use async_trait::async_trait;
use sea_orm::DbErr;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Repository trait for Product persistence
///
/// Absence of a row is reported as `Ok(None)` (or `0` rows for deletes),
/// never as an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products, most expensive first
    async fn list_all(&self) -> ProductResult<Vec<Product>>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Insert a product; storage assigns the id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Replace name, price and availability
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Flip availability
    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Number of rows removed (0 or 1)
    async fn delete_by_id(&self, id: i32) -> ProductResult<u64>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    products: BTreeMap<i32, Product>,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;

        let mut products: Vec<Product> = store.products.values().cloned().collect();
        products.sort_by(|a, b| b.price.total_cmp(&a.price));

        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        store.next_id += 1;
        let product = Product {
            id: store.next_id,
            name: input.name,
            price: input.price,
            availability: input.availability.unwrap_or(true),
        };
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };
        product.name = input.name;
        product.price = input.price;
        product.availability = input.availability;

        tracing::info!(product_id = id, "Updated product");
        Ok(Some(product.clone()))
    }

    async fn toggle_availability(&self, id: i32) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        let Some(product) = store.products.get_mut(&id) else {
            return Ok(None);
        };
        product.availability = !product.availability;

        tracing::info!(
            product_id = id,
            availability = product.availability,
            "Toggled product availability"
        );
        Ok(Some(product.clone()))
    }

    async fn delete_by_id(&self, id: i32) -> ProductResult<u64> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

/// Repository used when no database connection could be established:
/// every operation fails with a storage error
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableProductRepository;

impl UnavailableProductRepository {
    fn unavailable<T>() -> ProductResult<T> {
        Err(ProductError::Database(DbErr::Custom(
            "database connection is not available".to_string(),
        )))
    }
}

#[async_trait]
impl ProductRepository for UnavailableProductRepository {
    async fn list_all(&self) -> ProductResult<Vec<Product>> {
        Self::unavailable()
    }

    async fn get_by_id(&self, _id: i32) -> ProductResult<Option<Product>> {
        Self::unavailable()
    }

    async fn create(&self, _input: CreateProduct) -> ProductResult<Product> {
        Self::unavailable()
    }

    async fn update(&self, _id: i32, _input: UpdateProduct) -> ProductResult<Option<Product>> {
        Self::unavailable()
    }

    async fn toggle_availability(&self, _id: i32) -> ProductResult<Option<Product>> {
        Self::unavailable()
    }

    async fn delete_by_id(&self, _id: i32) -> ProductResult<u64> {
        Self::unavailable()
    }
}
