use std::sync::Arc;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductFilter};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List products, narrowing to a category when the filter names one
    pub async fn list_products(&self, filter: ProductFilter) -> ProductResult<Vec<Product>> {
        match filter.category() {
            Some(category) => self.list_products_by_category(category).await,
            None => self.list_all_products().await,
        }
    }

    /// List every product
    pub async fn list_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list_all().await
    }

    /// List products in a single category (exact, case-sensitive match)
    pub async fn list_products_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.repository.list_by_category(category).await
    }

    /// Get a product by ID
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Create a new product
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input.validate()?;
        self.repository.create(input).await
    }

    /// Delete a product
    ///
    /// Looks the product up first; a concurrent delete between the lookup
    /// and the delete also reports `NotFound`.
    pub async fn delete_product(&self, id: i32) -> ProductResult<()> {
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }
        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }
        Ok(())
    }
}
