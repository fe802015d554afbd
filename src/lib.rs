//! # 产品目录服务
//!
//! 单一 Product 资源的增删改查服务，分层结构：
//! - `app`：路由、处理器与控制器
//! - `core`：错误、响应、中间件、校验结果
//! - `infrastructure`：配置、日志、数据存储

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{router, AppState};
