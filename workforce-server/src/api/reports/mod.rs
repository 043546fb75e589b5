//! Reports API 模块 (只读)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reports", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/department-summary", get(handler::department_summary))
        .route("/salary-distribution", get(handler::salary_distribution))
        .route("/gender-distribution", get(handler::gender_distribution))
        .route("/employee-tenure", get(handler::employee_tenure))
}
