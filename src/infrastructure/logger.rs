//! 日志基础设施

use tracing_subscriber::EnvFilter;

use super::config::LoggingConfig;

pub struct Logger;

impl Logger {
    /// 初始化全局日志订阅者，`RUST_LOG` 优先于配置中的级别
    pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(config.with_target)
            .compact()
            .try_init()
            .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

        Ok(())
    }
}
