use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::product::errors::ProductError;
use crate::domain::product::models::ListProductsQuery;
use crate::domain::product::models::Price;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductName;
use crate::domain::product::ports::ProductRepository;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_product(row: PgRow) -> Result<Product, ProductError> {
        let read = |e: sqlx::Error| ProductError::DatabaseError(e.to_string());

        Ok(Product {
            id: ProductId(row.try_get("id").map_err(read)?),
            name: ProductName::new(row.try_get("name").map_err(read)?)?,
            price: Price::new(row.try_get("price").map_err(read)?)?,
            created_at: row.try_get("created_at").map_err(read)?,
        })
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: Product) -> Result<Product, ProductError> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, price, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(product.name.as_str())
        .bind(product.price.value())
        .bind(product.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        Ok(product)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, price, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        row.map(Self::row_to_product).transpose()
    }

    async fn find_all(&self, query: ListProductsQuery) -> Result<Vec<Product>, ProductError> {
        // ORDER BY direction is interpolated; it comes from SortOrder only.
        // A NULL limit/offset means "all rows" / "no offset" in PostgreSQL.
        let sql = format!(
            "SELECT id, name, price, created_at FROM products \
             ORDER BY created_at {order}, id {order} \
             LIMIT $1 OFFSET $2",
            order = query.sort.as_sql()
        );
        let limit = query.page.map(|page| i64::from(page.size));
        let offset = query
            .page
            .map(|page| i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = sqlx::query(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Self::row_to_product).collect()
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = $2, price = $3
            WHERE id = $1
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(product.name.as_str())
        .bind(product.price.value())
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(product.id.to_string()));
        }

        Ok(product)
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| ProductError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(ProductError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
