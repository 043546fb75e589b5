//! Authentication Handlers
//!
//! Handles admin account registration and login

use std::time::Duration;

use axum::{Json, extract::State};

use crate::auth::password;
use crate::core::ServerState;
use crate::db::repository::user;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PASSWORD_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{LoginRequest, LoginResponse, RegisterRequest};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/register - 注册管理员账号
pub async fn register(
    State(state): State<ServerState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<Json<LoginResponse>> {
    validate_required_text(&req.name, "Name", MAX_NAME_LEN)?;
    validate_required_text(&req.email, "Email", MAX_EMAIL_LEN)?;
    validate_required_text(&req.password, "Password", MAX_PASSWORD_LEN)?;

    let password_hash = password::hash_password(&req.password)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?;

    let user = user::create(&state.pool, &req.name, &req.email, &password_hash).await?;

    let token = state
        .get_jwt_service()
        .generate_token(user.id, &user.email, &user.name)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(email = %user.email, "Account registered");

    Ok(Json(LoginResponse { user, token }))
}

/// POST /api/auth/login - 登录
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = user::find_by_email(&state.pool, &req.email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // 统一错误消息，防止邮箱枚举
    let user = match user {
        Some(u) => {
            let password_valid = password::verify_password(&u.password_hash, &req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            u
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - account not found");
            return Err(AppError::invalid_credentials());
        }
    };

    let token = state
        .get_jwt_service()
        .generate_token(user.id, &user.email, &user.name)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

    tracing::info!(email = %user.email, "Login successful");

    Ok(Json(LoginResponse { user, token }))
}
