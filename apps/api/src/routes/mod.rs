pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::accounts::handlers as accounts;
use crate::insurance::handlers as insurance;
use crate::recommendations::handlers as recommendations;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Accounts
        .route("/api/register", post(accounts::handle_register))
        .route("/api/login", post(accounts::handle_login))
        .route("/api/dashboard/:user_id", get(accounts::handle_dashboard))
        .route(
            "/api/verify-bank-account",
            post(accounts::handle_verify_bank_account),
        )
        .route(
            "/api/delete-user/:user_id",
            delete(accounts::handle_delete_user),
        )
        // Insurance
        .route(
            "/api/complete-insurance",
            post(insurance::handle_complete_insurance),
        )
        // Recommendations
        .route(
            "/api/internship-recommendations",
            post(recommendations::handle_recommendations),
        )
        .with_state(state)
}
