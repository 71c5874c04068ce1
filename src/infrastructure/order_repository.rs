use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};

use crate::domain::order::{Order, OrderCreated, OrderItem};
use crate::domain::{Repository, RepositoryError, ShopEventDispatcher};
use super::publish;

/// SQLite implementation of the order repository.
///
/// Orders and their items are always written in one transaction.
pub struct SqliteOrderRepository {
    pool: SqlitePool,
    dispatcher: Option<Arc<ShopEventDispatcher>>,
}

impl SqliteOrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            dispatcher: None,
        }
    }

    /// Emits `OrderCreatedEvent` after each committed insert.
    pub fn with_dispatcher(mut self, dispatcher: Arc<ShopEventDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    async fn insert_items(
        tx: &mut Transaction<'_, Sqlite>,
        order_id: &str,
        items: &[OrderItem],
    ) -> Result<(), RepositoryError> {
        for item in items {
            sqlx::query(
                r"
                INSERT INTO order_items (id, order_id, product_id, name, price, quantity)
                VALUES (?, ?, ?, ?, ?, ?)
                ",
            )
            .bind(item.id())
            .bind(order_id)
            .bind(item.product_id())
            .bind(item.name())
            .bind(item.price())
            .bind(item.quantity())
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn load_items(&self, order_id: &str) -> Result<Vec<OrderItem>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, product_id, name, price, quantity
            FROM order_items
            WHERE order_id = ?
            ORDER BY rowid
            ",
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.try_get("id")?;
            let product_id: String = row.try_get("product_id")?;
            let name: String = row.try_get("name")?;
            let price: f64 = row.try_get("price")?;
            let quantity: i64 = row.try_get("quantity")?;
            items.push(OrderItem::new(id, name, price, product_id, quantity)?);
        }
        Ok(items)
    }

    async fn row_to_order(&self, row: &sqlx::sqlite::SqliteRow) -> Result<Order, RepositoryError> {
        let id: String = row.try_get("id")?;
        let customer_id: String = row.try_get("customer_id")?;
        let items = self.load_items(&id).await?;

        Ok(Order::new(id, customer_id, items)?)
    }
}

#[async_trait]
impl Repository<Order> for SqliteOrderRepository {
    async fn create(&self, entity: &Order) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES (?, ?, ?)")
            .bind(entity.id())
            .bind(entity.customer_id())
            .bind(entity.total())
            .execute(&mut *tx)
            .await?;
        Self::insert_items(&mut tx, entity.id(), entity.items()).await?;

        tx.commit().await?;
        tracing::debug!(order_id = %entity.id(), items = entity.items().len(), "Order created");

        publish(
            self.dispatcher.as_ref(),
            OrderCreated {
                id: entity.id().to_string(),
                customer_id: entity.customer_id().to_string(),
                total: entity.total(),
                item_count: entity.items().len(),
            },
        )
    }

    /// Replaces the order's items and total atomically.
    async fn update(&self, entity: &Order) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE orders SET total = ? WHERE id = ?")
            .bind(entity.total())
            .bind(entity.id())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Order"));
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(entity.id())
            .execute(&mut *tx)
            .await?;
        Self::insert_items(&mut tx, entity.id(), entity.items()).await?;

        tx.commit().await?;
        tracing::debug!(order_id = %entity.id(), items = entity.items().len(), "Order updated");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Order, RepositoryError> {
        let row = sqlx::query("SELECT id, customer_id FROM orders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepositoryError::NotFound("Order"))?;

        self.row_to_order(&row).await
    }

    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query("SELECT id, customer_id FROM orders ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in &rows {
            orders.push(self.row_to_order(row).await?);
        }
        Ok(orders)
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM order_items WHERE order_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Order"));
        }

        tx.commit().await?;
        Ok(())
    }
}
