//! 数据库基础设施

use sqlx::{
    postgres::{PgConnectOptions, PgPool, PgPoolOptions},
    Error,
};
use std::time::Duration;
use tracing::info;

use super::config::StoreConfig;

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    pub async fn new(config: &StoreConfig) -> Result<Self, Error> {
        let options: PgConnectOptions = config.database_url.parse()?;
        info!("Connecting to database: {}", describe_target(&options));

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(8))
            .idle_timeout(Duration::from_secs(60))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// 创建产品表（不存在时）
    pub async fn create_tables(&self) -> Result<(), Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id INTEGER GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
                name TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                color TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("Database tables ready");
        Ok(())
    }

    pub fn get_pool(&self) -> &PgPool {
        &self.pool
    }
}

/// 连接目标的日志描述，只含用户、主机、端口与库名，不含密码
fn describe_target(options: &PgConnectOptions) -> String {
    format!(
        "{}@{}:{}/{}",
        options.get_username(),
        options.get_host(),
        options.get_port(),
        options.get_database().unwrap_or_default()
    )
}
