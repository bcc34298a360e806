//! Axum router for the membership and booking API.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    cancel_membership, checkout, create_booking, create_payment_order, get_membership, get_stats,
    health, list_bookings, list_members, update_membership, verify_membership, verify_payment,
    AppState,
};

/// Builds the full API router.
///
/// # Routes
///
/// ## Membership
/// - `POST /api/membership/checkout` - create/update membership
/// - `GET /api/membership/:email` - fetch membership
/// - `PUT /api/membership/:email` - update contact fields
/// - `DELETE /api/membership/:email` - cancel membership
/// - `POST /api/membership/verify` - boolean active-membership check
///
/// ## Bookings
/// - `POST /api/bookings` - create a discounted booking
/// - `GET /api/bookings/:email` - list a member's bookings
///
/// ## Admin
/// - `GET /api/members` - list all members
/// - `GET /api/stats` - aggregate statistics
///
/// ## Payment bridge
/// - `POST /api/payment/order` - create a gateway order
/// - `POST /api/payment/verify` - verify a capture signature
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/membership/checkout", post(checkout))
        .route("/api/membership/verify", post(verify_membership))
        .route(
            "/api/membership/:email",
            get(get_membership)
                .put(update_membership)
                .delete(cancel_membership),
        )
        .route("/api/bookings", post(create_booking))
        .route("/api/bookings/:email", get(list_bookings))
        .route("/api/members", get(list_members))
        .route("/api/stats", get(get_stats))
        .route("/api/payment/order", post(create_payment_order))
        .route("/api/payment/verify", post(verify_payment))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
