use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::CreateProductCommand;
use crate::domain::product::models::ListProductsQuery;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::UpdateProductCommand;

/// Port for product domain service operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// Create a new product.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_product(&self, command: CreateProductCommand)
        -> Result<Product, ProductError>;

    /// Retrieve product by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_product(&self, id: &ProductId) -> Result<Product, ProductError>;

    /// List products, optionally paginated, ordered by creation time.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_products(&self, query: ListProductsQuery) -> Result<Vec<Product>, ProductError>;

    /// Replace name and price of an existing product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update_product(
        &self,
        id: &ProductId,
        command: UpdateProductCommand,
    ) -> Result<Product, ProductError>;

    /// Delete existing product.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_product(&self, id: &ProductId) -> Result<(), ProductError>;
}

/// Persistence operations for product aggregate.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// Persist new product to storage.
    async fn create(&self, product: Product) -> Result<Product, ProductError>;

    /// Retrieve product by identifier.
    ///
    /// # Returns
    /// Optional product entity (None if not found)
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;

    /// Retrieve products matching a listing query.
    async fn find_all(&self, query: ListProductsQuery) -> Result<Vec<Product>, ProductError>;

    /// Update existing product in storage.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// Remove product from storage.
    ///
    /// # Errors
    /// * `NotFound` - Product does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;
}
