//! 产品数据模型

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::infrastructure::memory_store::Record;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Product {
    /// 0 表示尚未由存储分配
    pub id: i32,
    #[validate(length(min = 1, max = 100, message = "The Name field is required and must be at most 100 characters."))]
    pub name: String,
    #[validate(range(min = 0.0, message = "The Price field must be zero or greater."))]
    pub price: f64,
    #[validate(length(min = 1, max = 50, message = "The Color field is required and must be at most 50 characters."))]
    pub color: String,
}

impl Product {
    pub fn new(id: i32, name: impl Into<String>, price: f64, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            color: color.into(),
        }
    }
}

impl Record for Product {
    fn key(&self) -> i32 {
        self.id
    }

    fn assign_key(&mut self, key: i32) {
        self.id = key;
    }
}
