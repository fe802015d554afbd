//! 核心层：错误、响应、中间件与校验结果

pub mod error;
pub mod middleware;
pub mod response;
pub mod validation;
