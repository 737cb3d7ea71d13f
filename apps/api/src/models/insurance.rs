use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const POLICY_STATUS_ACTIVE: &str = "active";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicy {
    pub id: Uuid,
    pub user_id: Uuid,
    pub policy_number: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
