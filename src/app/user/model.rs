//! 用户数据模型

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i64,
}

// 创建用户请求
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "\"name\" is not allowed to be empty"))]
    pub name: String,

    pub age: i64,
}

// 更新用户请求，只修改提供了的字段
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "present")]
    #[validate(length(min = 1, message = "\"name\" is not allowed to be empty"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "present")]
    pub age: Option<i64>,
}

// 字段可以缺省，但出现时不能是 null
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl UpdateUserRequest {
    /// 把提供的字段合并进已有记录
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(age) = self.age {
            user.age = age;
        }
    }
}
