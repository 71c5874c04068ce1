use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::domain::customer::{Address, Customer, CustomerAddressChanged, CustomerCreated};
use crate::domain::{Repository, RepositoryError, ShopEventDispatcher};
use super::publish;

/// SQLite implementation of the customer repository
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
    dispatcher: Option<Arc<ShopEventDispatcher>>,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            dispatcher: None,
        }
    }

    /// Emits `CustomerCreatedEvent` / `CustomerAddressChangedEvent` after
    /// successful writes.
    pub fn with_dispatcher(mut self, dispatcher: Arc<ShopEventDispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    fn row_to_address(row: &sqlx::sqlite::SqliteRow) -> Result<Option<Address>, RepositoryError> {
        let street: Option<String> = row.try_get("street")?;
        let number: Option<i64> = row.try_get("number")?;
        let zipcode: Option<String> = row.try_get("zipcode")?;
        let city: Option<String> = row.try_get("city")?;

        match (street, number, zipcode, city) {
            (Some(street), Some(number), Some(zipcode), Some(city)) => {
                Ok(Some(Address::new(street, number, zipcode, city)?))
            }
            _ => Ok(None),
        }
    }

    fn row_to_customer(row: &sqlx::sqlite::SqliteRow) -> Result<Customer, RepositoryError> {
        Ok(Customer::restore(
            row.try_get("id")?,
            row.try_get("name")?,
            Self::row_to_address(row)?,
            row.try_get("active")?,
            row.try_get("reward_points")?,
        )?)
    }
}

#[async_trait]
impl Repository<Customer> for SqliteCustomerRepository {
    async fn create(&self, entity: &Customer) -> Result<(), RepositoryError> {
        let address = entity.address();

        sqlx::query(
            r"
            INSERT INTO customers (id, name, street, number, zipcode, city, active, reward_points)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(entity.id())
        .bind(entity.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(entity.is_active())
        .bind(entity.reward_points())
        .execute(&self.pool)
        .await?;

        tracing::debug!(customer_id = %entity.id(), "Customer created");

        publish(
            self.dispatcher.as_ref(),
            CustomerCreated {
                id: entity.id().to_string(),
                name: entity.name().to_string(),
            },
        )
    }

    async fn update(&self, entity: &Customer) -> Result<(), RepositoryError> {
        let address = entity.address();
        let mut tx = self.pool.begin().await?;

        let stored = sqlx::query("SELECT street, number, zipcode, city FROM customers WHERE id = ?")
            .bind(entity.id())
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(RepositoryError::NotFound("Customer"))?;
        let previous_address = Self::row_to_address(&stored)?;

        let result = sqlx::query(
            r"
            UPDATE customers
            SET name = ?, street = ?, number = ?, zipcode = ?, city = ?, active = ?, reward_points = ?
            WHERE id = ?
            ",
        )
        .bind(entity.name())
        .bind(address.map(Address::street))
        .bind(address.map(Address::number))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(entity.is_active())
        .bind(entity.reward_points())
        .bind(entity.id())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Customer"));
        }
        tx.commit().await?;

        tracing::debug!(customer_id = %entity.id(), "Customer updated");

        match address {
            Some(new_address) if previous_address.as_ref() != Some(new_address) => publish(
                self.dispatcher.as_ref(),
                CustomerAddressChanged {
                    id: entity.id().to_string(),
                    name: entity.name().to_string(),
                    address: new_address.clone(),
                },
            ),
            _ => Ok(()),
        }
    }

    async fn find(&self, id: &str) -> Result<Customer, RepositoryError> {
        let row = sqlx::query(
            r"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(RepositoryError::NotFound("Customer"))?;

        Self::row_to_customer(&row)
    }

    async fn find_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let rows = sqlx::query(
            r"
            SELECT id, name, street, number, zipcode, city, active, reward_points
            FROM customers
            ORDER BY rowid
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_customer).collect()
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound("Customer"));
        }
        Ok(())
    }
}
