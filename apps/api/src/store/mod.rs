// Storage ports. Handlers only ever see these traits; `AppState` carries
// `Arc<dyn …Store>` so tests can swap Postgres for the in-memory fakes.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::insurance::InsurancePolicy;
use crate::models::internship::{Posting, PreferenceRecord};
use crate::models::user::{NewUser, User};

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;
    async fn set_insurance_status(&self, id: Uuid, status: &str) -> Result<(), AppError>;
    async fn set_bank_account_status(&self, id: Uuid, status: &str) -> Result<(), AppError>;
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
pub trait InsuranceStore: Send + Sync {
    async fn insert(
        &self,
        user_id: Uuid,
        policy_number: &str,
        status: &str,
    ) -> Result<InsurancePolicy, AppError>;
    async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<InsurancePolicy>, AppError>;
    async fn delete_for_user(&self, user_id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Insert-or-replace, keyed by the token subject. Last write wins.
    async fn upsert(&self, user_id: Uuid, prefs: &PreferenceRecord) -> Result<(), AppError>;
    async fn find(&self, user_id: Uuid) -> Result<Option<PreferenceRecord>, AppError>;
    async fn delete_for_user(&self, user_id: Uuid) -> Result<(), AppError>;
}

#[async_trait]
pub trait PostingStore: Send + Sync {
    /// Active postings in catalog order. The scorer's tie-break depends on
    /// this ordering being stable across reads.
    async fn list_active(&self) -> Result<Vec<Posting>, AppError>;
}
