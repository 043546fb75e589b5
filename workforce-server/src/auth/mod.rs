//! 认证模块 - JWT 认证体系
//!
//! # 组件
//!
//! - [`JwtService`] - 令牌生成与验证
//! - [`CurrentUser`] - 请求上下文中的已认证用户
//! - [`require_auth`] - 认证中间件
//! - [`password`] - Argon2 密码哈希

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
