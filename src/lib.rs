//! # 用户 CRUD 服务
//!
//! 基于 Axum 的单资源 REST 服务，分层结构：
//! - `app`：路由、处理器、业务服务、数据模型
//! - `core`：统一错误、响应信封、请求提取器、中间件
//! - `infrastructure`：配置、日志、数据库连接与用户存储
//!
//! 所有响应都是 `{statusCode, message, data?}` 形式的 JSON。

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::create_routes;
pub use app::user::handler::AppState;
pub use app::user::model::User;
pub use infrastructure::config::Config;
pub use infrastructure::store::{MemoryUserStore, StoreError, UserStore};
