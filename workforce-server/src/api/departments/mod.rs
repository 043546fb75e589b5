//! Department API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/departments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{code}",
            get(handler::get_by_code)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{code}/employees", get(handler::list_employees))
}
