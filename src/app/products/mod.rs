//! 产品管理

pub mod binding;
pub mod controller;
pub mod handler;
pub mod model;
#[cfg(feature = "database")]
pub mod pg_repository;
pub mod repository;

pub use controller::ProductsController;
pub use model::Product;
pub use repository::{MemoryProductRepository, ProductRepository};
