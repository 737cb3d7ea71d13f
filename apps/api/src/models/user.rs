use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Bank-account verification states. Verification is a simulation: a
/// national-ID equality check, not a bank integration.
pub const BANK_STATUS_PENDING: &str = "pending";
pub const BANK_STATUS_VERIFIED: &str = "verified";

pub const INSURANCE_STATUS_INCOMPLETE: &str = "incomplete";
pub const INSURANCE_STATUS_COMPLETED: &str = "completed";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub password_hash: String,
    pub bank_account_status: String,
    pub insurance_status: String,
    pub created_at: DateTime<Utc>,
}

/// Fields needed to create a user row. The password arrives pre-hashed;
/// plaintext never crosses the store boundary.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub national_id: String,
    pub password_hash: String,
}

/// The user projection returned by the API. Never exposes the password hash
/// or the national-ID number.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub insurance_status: String,
    pub bank_account_status: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        UserSummary {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            insurance_status: user.insurance_status.clone(),
            bank_account_status: user.bank_account_status.clone(),
        }
    }
}
