use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::domain::product::{Product, ProductCreated};
use crate::domain::{Repository, RepositoryError, ShopEventDispatcher};
use super::publish;

/// SQLite implementation of the product repository
pub struct SqliteProductRepository {
    pool: SqlitePool,
    dispatcher: Option<Arc<ShopEventDispatcher>>,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            dispatcher: None,
        }
    }

    /// Emits `ProductCreatedEvent` after each successful insert.
    pub fn with_dispatcher(mut self, dispatcher: Arc<ShopEventDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    fn row_to_product(row: &sqlx::sqlite::SqliteRow) -> Result<Product, RepositoryError> {
        let id: String = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let price: f64 = row.try_get("price")?;

        Ok(Product::new(id, name, price)?)
    }
}

#[async_trait]
impl Repository<Product> for SqliteProductRepository {
    async fn create(&self, entity: &Product) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO products (id, name, price) VALUES (?, ?, ?)")
            .bind(entity.id())
            .bind(entity.name())
            .bind(entity.price())
            .execute(&self.pool)
            .await?;

        tracing::debug!(product_id = %entity.id(), "Product created");

        publish(
            self.dispatcher.as_ref(),
            ProductCreated {
                id: entity.id().to_string(),
                name: entity.name().to_string(),
                price: entity.price(),
            },
        )
    }

    async fn update(&self, entity: &Product) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE products SET name = ?, price = ? WHERE id = ?")
            .bind(entity.name())
            .bind(entity.price())
            .bind(entity.id())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Product"));
        }
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Product, RepositoryError> {
        let row = sqlx::query("SELECT id, name, price FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound("Product"))?;

        Self::row_to_product(&row)
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, price FROM products ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_product).collect()
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Product"));
        }
        Ok(())
    }
}
