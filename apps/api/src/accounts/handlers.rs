use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::jwt::create_token;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::AuthUser;
use crate::errors::AppError;
use crate::models::insurance::InsurancePolicy;
use crate::models::user::{NewUser, UserSummary, BANK_STATUS_VERIFIED};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}

/// POST /api/register
pub async fn handle_register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    validate_registration(&req)?;

    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("User already exists".to_string()));
    }

    let password_hash = hash_password(&req.password)?;
    let user = state
        .users
        .insert(NewUser {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            national_id: req.national_id,
            password_hash,
        })
        .await?;

    info!("Registered user {}", user.id);
    let token = create_token(user.id, &state.config.jwt_secret)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            token,
            user: UserSummary::from(&user),
        }),
    ))
}

fn validate_registration(req: &RegisterRequest) -> Result<(), AppError> {
    let required = [
        ("firstName", &req.first_name),
        ("lastName", &req.last_name),
        ("email", &req.email),
        ("phone", &req.phone),
        ("nationalId", &req.national_id),
        ("password", &req.password),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{name} is required")));
        }
    }
    if !req.email.contains('@') {
        return Err(AppError::Validation("email is not valid".to_string()));
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/login
///
/// Unknown email and wrong password both answer 401 so the endpoint is not
/// a user-existence oracle.
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state
        .users
        .find_by_email(&req.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&req.password, &user.password_hash)? {
        return Err(AppError::Unauthorized);
    }

    let token = create_token(user.id, &state.config.jwt_secret)?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: UserSummary::from(&user),
    }))
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: UserSummary,
    pub insurance: Option<InsurancePolicy>,
}

/// GET /api/dashboard/:user_id
pub async fn handle_dashboard(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<DashboardResponse>, AppError> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let insurance = state.insurance.latest_for_user(user.id).await?;

    Ok(Json(DashboardResponse {
        user: UserSummary::from(&user),
        insurance,
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyBankRequest {
    pub user_id: Uuid,
    pub national_id: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyBankResponse {
    pub message: String,
    pub status: String,
}

/// POST /api/verify-bank-account
///
/// Verification is a stand-in: the supplied national-ID number is compared
/// with the stored one. A mismatch reports `failed` without mutating the
/// account.
pub async fn handle_verify_bank_account(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<VerifyBankRequest>,
) -> Result<Json<VerifyBankResponse>, AppError> {
    let user = state
        .users
        .find_by_id(req.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if user.national_id == req.national_id {
        state
            .users
            .set_bank_account_status(user.id, BANK_STATUS_VERIFIED)
            .await?;
        info!("Bank account verified for user {}", user.id);
        Ok(Json(VerifyBankResponse {
            message: "Bank account verified successfully".to_string(),
            status: "verified".to_string(),
        }))
    } else {
        Ok(Json(VerifyBankResponse {
            message: "Bank account verification failed".to_string(),
            status: "failed".to_string(),
        }))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResponse {
    pub message: String,
    pub deleted_user: DeletedUser,
}

/// DELETE /api/delete-user/:user_id
///
/// Dependent records go first so a half-finished delete never strands
/// policies or preferences without an owner.
pub async fn handle_delete_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<Uuid>,
) -> Result<Json<DeleteUserResponse>, AppError> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    state.insurance.delete_for_user(user.id).await?;
    state.preferences.delete_for_user(user.id).await?;
    state.users.delete(user.id).await?;

    info!("Deleted user {}", user.id);

    Ok(Json(DeleteUserResponse {
        message: "User account deleted successfully".to_string(),
        deleted_user: DeletedUser {
            name: format!("{} {}", user.first_name, user.last_name),
            email: user.email,
        },
    }))
}
