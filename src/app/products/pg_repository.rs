//! PostgreSQL 产品仓储

use async_trait::async_trait;
use sqlx::postgres::PgPool;

use super::{model::Product, repository::ProductRepository};
use crate::core::error::StoreError;

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, StoreError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, color FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(products)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, StoreError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, color FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as usize)
    }

    async fn create(&self, product: &Product) -> Result<Product, StoreError> {
        // id 始终由 identity 列生成，表单里的 id 不参与插入
        let stored = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, price, color) VALUES ($1, $2, $3) \
             RETURNING id, name, price, color",
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.color)
        .fetch_one(&self.pool)
        .await?;
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE products SET name = $1, price = $2, color = $3 WHERE id = $4")
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.color)
            .bind(product.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Concurrency { id: product.id });
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
