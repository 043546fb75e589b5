//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`departments`] - 部门管理接口
//! - [`employees`] - 员工管理接口
//! - [`salaries`] - 工资管理接口
//! - [`reports`] - 统计报表接口 (只读)

pub mod auth;
pub mod departments;
pub mod employees;
pub mod health;
pub mod reports;
pub mod salaries;

use axum::Router;

use crate::core::ServerState;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(auth::router())
        .merge(health::router())
        // Data model APIs
        .merge(departments::router())
        .merge(employees::router())
        .merge(salaries::router())
        // Read-only reports
        .merge(reports::router())
}
