use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::insurance::POLICY_STATUS_ACTIVE;
use crate::models::user::INSURANCE_STATUS_COMPLETED;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteInsuranceRequest {
    pub user_id: Uuid,
    pub policy_number: String,
}

#[derive(Debug, Serialize)]
pub struct CompleteInsuranceResponse {
    pub message: String,
}

/// POST /api/complete-insurance
pub async fn handle_complete_insurance(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<CompleteInsuranceRequest>,
) -> Result<Json<CompleteInsuranceResponse>, AppError> {
    if req.policy_number.trim().is_empty() {
        return Err(AppError::Validation("policyNumber is required".to_string()));
    }

    let user = state
        .users
        .find_by_id(req.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    state
        .users
        .set_insurance_status(user.id, INSURANCE_STATUS_COMPLETED)
        .await?;
    state
        .insurance
        .insert(user.id, &req.policy_number, POLICY_STATUS_ACTIVE)
        .await?;

    info!("Insurance completed for user {}", user.id);

    Ok(Json(CompleteInsuranceResponse {
        message: "Insurance process completed successfully".to_string(),
    }))
}
