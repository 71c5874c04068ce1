// Database connection and schema management
// SQLite through sqlx; tables mirror the customer/product/order entities.

use anyhow::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens a pool. sqlx opens `sqlite::memory:` as a shared-cache
    /// database, so every pooled connection sees the same schema and rows
    /// for as long as the pool keeps one connection open.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        tracing::info!(database_url, max_connections, "Connected to database");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn migrate(&self) -> Result<()> {
        let create_customers_sql = r#"
            CREATE TABLE IF NOT EXISTS customers (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                street TEXT,
                number INTEGER,
                zipcode TEXT,
                city TEXT,
                active BOOLEAN NOT NULL DEFAULT 0,
                reward_points REAL NOT NULL DEFAULT 0
            )
        "#;

        let create_products_sql = r#"
            CREATE TABLE IF NOT EXISTS products (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                price REAL NOT NULL
            )
        "#;

        let create_orders_sql = r#"
            CREATE TABLE IF NOT EXISTS orders (
                id TEXT PRIMARY KEY,
                customer_id TEXT NOT NULL,
                total REAL NOT NULL,
                FOREIGN KEY (customer_id) REFERENCES customers (id)
            )
        "#;

        let create_order_items_sql = r#"
            CREATE TABLE IF NOT EXISTS order_items (
                id TEXT NOT NULL,
                order_id TEXT NOT NULL,
                product_id TEXT NOT NULL,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                quantity INTEGER NOT NULL,
                PRIMARY KEY (order_id, id),
                FOREIGN KEY (order_id) REFERENCES orders (id),
                FOREIGN KEY (product_id) REFERENCES products (id)
            )
        "#;

        sqlx::query(create_customers_sql).execute(&self.pool).await?;
        sqlx::query(create_products_sql).execute(&self.pool).await?;
        sqlx::query(create_orders_sql).execute(&self.pool).await?;
        sqlx::query(create_order_items_sql).execute(&self.pool).await?;

        tracing::debug!("Database schema ready");
        Ok(())
    }
}
