//! PostgreSQL 存储

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use tracing::debug;
use uuid::Uuid;

use super::{parse_id, StoreError, UserStore};
use crate::app::user::model::{CreateUserRequest, UpdateUserRequest, User};
use crate::infrastructure::{config::DatabaseConfig, database::DatabaseManager};

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    age: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id.to_string(),
            name: row.name,
            age: row.age,
        }
    }
}

pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 建立连接池并确保 `users` 表存在
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let manager = DatabaseManager::new(config).await?;
        manager.create_tables().await?;
        Ok(Self::new(manager.into_pool()))
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name, age FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Vec<User>, StoreError> {
        let id = parse_id(id)?;
        let rows = sqlx::query_as::<_, UserRow>("SELECT id, name, age FROM users WHERE id = $1")
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn insert(&self, user: CreateUserRequest) -> Result<User, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (id, name, age) VALUES ($1, $2, $3) RETURNING id, name, age",
        )
        .bind(Uuid::new_v4())
        .bind(&user.name)
        .bind(user.age)
        .fetch_one(&self.pool)
        .await?;

        debug!("postgres store inserted {}", row.id);
        Ok(row.into())
    }

    async fn find_and_update(
        &self,
        id: &str,
        changes: UpdateUserRequest,
    ) -> Result<Option<User>, StoreError> {
        let id = parse_id(id)?;
        // COALESCE 保留未提供的字段
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            UPDATE users
            SET name = COALESCE($1, name), age = COALESCE($2, age)
            WHERE id = $3
            RETURNING id, name, age
            "#,
        )
        .bind(changes.name)
        .bind(changes.age)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }

    async fn find_and_remove(&self, id: &str) -> Result<Option<User>, StoreError> {
        let id = parse_id(id)?;
        let row = sqlx::query_as::<_, UserRow>(
            "DELETE FROM users WHERE id = $1 RETURNING id, name, age",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(User::from))
    }
}
