//! Employee API 模块

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // Must be declared alongside /{number}; the two-segment path wins
        .route("/department/{code}", get(handler::list_by_department))
        .route(
            "/{number}",
            get(handler::get_by_number)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{number}/salary", get(handler::get_salary))
}
