//! 用户存储抽象
//!
//! 处理器每个请求只调用一次存储。连接池、并发写入的串行化都由具体存储负责。

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::app::user::model::{CreateUserRequest, UpdateUserRequest, User};
use crate::infrastructure::config::{DatabaseConfig, StoreBackend};

pub mod memory;
#[cfg(feature = "database")]
pub mod postgres;

pub use memory::MemoryUserStore;
#[cfg(feature = "database")]
pub use postgres::PgUserStore;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid user id: {0}")]
    InvalidId(String),
    #[cfg(feature = "database")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// "User" 集合上的文档式操作
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// 按 id 过滤，结果总是 0 或 1 条
    async fn find_by_id(&self, id: &str) -> Result<Vec<User>, StoreError>;

    async fn insert(&self, user: CreateUserRequest) -> Result<User, StoreError>;

    /// 返回更新后的记录，没有匹配时返回 `None`
    async fn find_and_update(
        &self,
        id: &str,
        changes: UpdateUserRequest,
    ) -> Result<Option<User>, StoreError>;

    /// 返回被删除的记录，没有匹配时返回 `None`
    async fn find_and_remove(&self, id: &str) -> Result<Option<User>, StoreError>;
}

/// 解析存储分配的 id
pub fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))
}

/// 按配置构建存储
pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn UserStore>, StoreError> {
    match config.backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryUserStore::new())),
        #[cfg(feature = "database")]
        StoreBackend::Postgres => {
            let store = PgUserStore::connect(config).await?;
            Ok(Arc::new(store))
        }
        #[cfg(not(feature = "database"))]
        StoreBackend::Postgres => Err(StoreError::Unavailable(
            "postgres backend requires the `database` feature".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_rejects_garbage() {
        assert!(matches!(parse_id("123"), Err(StoreError::InvalidId(_))));
        assert!(parse_id(&Uuid::new_v4().to_string()).is_ok());
    }

    #[tokio::test]
    async fn memory_backend_is_default() {
        let store = connect(&DatabaseConfig::default()).await.unwrap();
        assert!(store.find_all().await.unwrap().is_empty());
    }
}
