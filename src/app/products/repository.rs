//! 产品数据访问层

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::model::Product;
use crate::core::error::StoreError;
use crate::infrastructure::memory_store::MemoryTable;

/// 产品仓储
///
/// 查不到记录时 `get_by_id` 返回 `None`，而不是错误；
/// 删除不存在的 id 是静默的空操作。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, StoreError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, StoreError>;
    async fn count(&self) -> Result<usize, StoreError>;
    /// 插入并返回保存后的记录；id 总是由存储分配
    async fn create(&self, product: &Product) -> Result<Product, StoreError>;
    /// 记录已被并发删除时返回 [`StoreError::Concurrency`]
    async fn update(&self, product: &Product) -> Result<(), StoreError>;
    async fn delete(&self, id: i32) -> Result<(), StoreError>;
}

/// 基于内存表的仓储
#[derive(Clone, Default)]
pub struct MemoryProductRepository {
    table: Arc<MemoryTable<Product>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn get_all(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.table.to_list().await)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, StoreError> {
        Ok(self.table.find(id).await)
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.table.len().await)
    }

    async fn create(&self, product: &Product) -> Result<Product, StoreError> {
        self.table.add(product.clone()).await
    }

    async fn update(&self, product: &Product) -> Result<(), StoreError> {
        self.table.update(product).await
    }

    async fn delete(&self, id: i32) -> Result<(), StoreError> {
        self.table.remove(id).await;
        Ok(())
    }
}

/// 示例数据
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new(0, "Kalem", 100.0, "Kırmızı"),
        Product::new(0, "Defter", 200.0, "Mavi"),
    ]
}

/// 存储为空时写入示例数据，返回写入的条数
pub async fn seed_sample_products(repository: &dyn ProductRepository) -> Result<usize, StoreError> {
    if repository.count().await? > 0 {
        info!("Product store already contains data, skipping seed");
        return Ok(0);
    }

    let samples = sample_products();
    for product in &samples {
        repository.create(product).await?;
    }

    info!("Seeded {} sample products", samples.len());
    Ok(samples.len())
}
