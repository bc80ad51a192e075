//! 应用层：路由与用户资源

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use user::handler::{self, AppState};

pub mod user;

// 创建路由
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/user",
            get(handler::list_users).post(handler::create_user),
        )
        .route(
            "/api/user/:id",
            get(handler::get_user)
                .put(handler::update_user)
                .delete(handler::delete_user),
        )
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
