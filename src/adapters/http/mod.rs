//! HTTP adapter: axum routes, handlers, and wire DTOs.

mod dto;
mod handlers;
mod routes;

pub use handlers::AppState;
pub use routes::api_router;
