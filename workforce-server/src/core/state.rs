use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;

/// 服务器状态
///
/// 持有配置、数据库连接池和 JWT 服务的共享引用。没有任何可变字段：
/// 所有业务逻辑都是针对连接池的自由函数，服务本身无状态，
/// 并发安全因此不言自明。
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造，测试场景常用)
    pub fn new(config: Config, pool: SqlitePool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            pool,
            jwt_service,
        }
    }

    /// 初始化服务器状态
    ///
    /// 打开数据库 (WAL + 外键约束)、执行迁移、构造 JWT 服务
    pub async fn initialize(config: &Config) -> Result<Self, crate::utils::AppError> {
        let db_service = DbService::new(&config.db_path).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db_service.pool, jwt_service))
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
