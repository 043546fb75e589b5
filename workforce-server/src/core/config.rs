use crate::auth::JwtConfig;
use crate::payroll::NetSalaryPolicy;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DB_PATH | workforce.db | SQLite 数据库文件 |
/// | ENVIRONMENT | development | 运行环境 |
/// | CLAMP_NEGATIVE_NET | false | 负净工资是否钳制为 0 (待产品确认) |
/// | JWT_SECRET / JWT_EXPIRATION_MINUTES / JWT_ISSUER / JWT_AUDIENCE | 见 auth::jwt | JWT 认证配置 |
///
/// # 示例
///
/// ```ignore
/// DB_PATH=/data/workforce.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 数据库文件路径
    pub db_path: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 净工资推导策略 (默认不钳制负值，与服务端既有行为一致)
    pub net_salary_policy: NetSalaryPolicy,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            db_path: std::env::var("DB_PATH").unwrap_or_else(|_| "workforce.db".into()),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            net_salary_policy: NetSalaryPolicy {
                clamp_at_zero: std::env::var("CLAMP_NEGATIVE_NET")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(false),
            },
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
