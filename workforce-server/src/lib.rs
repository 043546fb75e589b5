//! Workforce Records Server - 人事档案管理服务
//!
//! # 架构概述
//!
//! 本模块是服务的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SQLite 存储 (sqlx, WAL)
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **HTTP API** (`api`): RESTful API 接口
//! - **工资推导** (`payroll`): 净工资派生逻辑
//! - **报表引擎** (`reports`): 四种统计报表
//!
//! # 模块结构
//!
//! ```text
//! workforce-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、密码哈希
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (连接池 + 仓储)
//! ├── payroll.rs     # 净工资推导
//! ├── reports/       # 报表引擎
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod payroll;
pub mod reports;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState, build_router};
pub use payroll::NetSalaryPolicy;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置进程环境 (dotenv + 日志)
pub fn setup_environment() {
    dotenv::dotenv().ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(std::env::var("LOG_LEVEL").ok().as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
 _    _            _     __
| |  | |          | |   / _|
| |  | | ___  _ __| | _| |_ ___  _ __ ___ ___
| |/\| |/ _ \| '__| |/ /  _/ _ \| '__/ __/ _ \
\  /\  / (_) | |  |   <| || (_) | | | (_|  __/
 \/  \/ \___/|_|  |_|\_\_| \___/|_|  \___\___|
    "#
    );
}
