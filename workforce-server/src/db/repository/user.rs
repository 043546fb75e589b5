//! User Repository (admin accounts)

use super::{RepoError, RepoResult, is_unique_violation};
use shared::models::User;
use sqlx::SqlitePool;

const USER_SELECT: &str = "SELECT id, name, email, password_hash, created_at, updated_at FROM users";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_email(pool: &SqlitePool, email: &str) -> RepoResult<Option<User>> {
    let sql = format!("{USER_SELECT} WHERE email = ? LIMIT 1");
    let row = sqlx::query_as::<_, User>(&sql)
        .bind(email)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> RepoResult<User> {
    // Check duplicate email
    if find_by_email(pool, email).await?.is_some() {
        return Err(RepoError::Conflict(format!(
            "Account '{email}' already exists"
        )));
    }

    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (name, email, password_hash, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?4) RETURNING id",
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            RepoError::Conflict(format!("Account '{email}' already exists"))
        } else {
            e.into()
        }
    })?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create user".into()))
}
