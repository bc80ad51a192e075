//! 用户业务服务

use std::sync::Arc;
use tracing::{debug, info};

use super::model::{CreateUserRequest, UpdateUserRequest, User};
use crate::infrastructure::store::{StoreError, UserStore};

/// 每个方法只对存储发起一次调用
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = self.store.find_all().await?;
        debug!("Fetched {} users", users.len());
        Ok(users)
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> Result<User, StoreError> {
        let user = self.store.insert(request).await?;
        info!("Created user: {} ({})", user.name, user.id);
        Ok(user)
    }

    pub async fn get_user(&self, id: &str) -> Result<Vec<User>, StoreError> {
        self.store.find_by_id(id).await
    }

    pub async fn update_user(
        &self,
        id: &str,
        request: UpdateUserRequest,
    ) -> Result<Option<User>, StoreError> {
        let user = self.store.find_and_update(id, request).await?;
        match &user {
            Some(user) => info!("Updated user: {} ({})", user.name, user.id),
            None => debug!("Update matched no user: {}", id),
        }
        Ok(user)
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), StoreError> {
        if self.store.find_and_remove(id).await?.is_some() {
            info!("Deleted user: {}", id);
        }
        Ok(())
    }
}
