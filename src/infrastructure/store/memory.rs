//! 内存存储

use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};
use tracing::debug;
use uuid::Uuid;

use super::{parse_id, StoreError, UserStore};
use crate::app::user::model::{CreateUserRequest, UpdateUserRequest, User};

/// 基于 `Mutex<HashMap>` 的存储，进程退出即丢失
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, User>>, StoreError> {
        self.users
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let users = self.lock()?;
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Vec<User>, StoreError> {
        let key = parse_id(id)?;
        let users = self.lock()?;
        Ok(users.get(&key).cloned().into_iter().collect())
    }

    async fn insert(&self, user: CreateUserRequest) -> Result<User, StoreError> {
        let key = Uuid::new_v4();
        let user = User {
            id: key.to_string(),
            name: user.name,
            age: user.age,
        };

        self.lock()?.insert(key, user.clone());
        debug!("memory store inserted {}", user.id);
        Ok(user)
    }

    async fn find_and_update(
        &self,
        id: &str,
        changes: UpdateUserRequest,
    ) -> Result<Option<User>, StoreError> {
        let key = parse_id(id)?;
        let mut users = self.lock()?;
        Ok(users.get_mut(&key).map(|user| {
            changes.apply_to(user);
            user.clone()
        }))
    }

    async fn find_and_remove(&self, id: &str) -> Result<Option<User>, StoreError> {
        let key = parse_id(id)?;
        Ok(self.lock()?.remove(&key))
    }
}
