//! In-memory store fakes. Used by handler tests; no production wiring.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::insurance::InsurancePolicy;
use crate::models::internship::{Posting, PreferenceRecord};
use crate::models::user::{NewUser, User, BANK_STATUS_PENDING, INSURANCE_STATUS_INCOMPLETE};
use crate::recommendations::catalog::seed_catalog;
use crate::store::{InsuranceStore, PostingStore, PreferenceStore, UserStore};

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let user = User {
            id: Uuid::new_v4(),
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            phone: new_user.phone,
            national_id: new_user.national_id,
            password_hash: new_user.password_hash,
            bank_account_status: BANK_STATUS_PENDING.to_string(),
            insurance_status: INSURANCE_STATUS_INCOMPLETE.to_string(),
            created_at: Utc::now(),
        };
        self.users
            .lock()
            .expect("user store lock")
            .insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self
            .users
            .lock()
            .expect("user store lock")
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(self.users.lock().expect("user store lock").get(&id).cloned())
    }

    async fn set_insurance_status(&self, id: Uuid, status: &str) -> Result<(), AppError> {
        if let Some(user) = self.users.lock().expect("user store lock").get_mut(&id) {
            user.insurance_status = status.to_string();
        }
        Ok(())
    }

    async fn set_bank_account_status(&self, id: Uuid, status: &str) -> Result<(), AppError> {
        if let Some(user) = self.users.lock().expect("user store lock").get_mut(&id) {
            user.bank_account_status = status.to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.users.lock().expect("user store lock").remove(&id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryInsuranceStore {
    policies: Mutex<Vec<InsurancePolicy>>,
}

#[async_trait]
impl InsuranceStore for MemoryInsuranceStore {
    async fn insert(
        &self,
        user_id: Uuid,
        policy_number: &str,
        status: &str,
    ) -> Result<InsurancePolicy, AppError> {
        let policy = InsurancePolicy {
            id: Uuid::new_v4(),
            user_id,
            policy_number: policy_number.to_string(),
            status: status.to_string(),
            created_at: Utc::now(),
        };
        self.policies
            .lock()
            .expect("insurance store lock")
            .push(policy.clone());
        Ok(policy)
    }

    async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<InsurancePolicy>, AppError> {
        Ok(self
            .policies
            .lock()
            .expect("insurance store lock")
            .iter()
            .rev()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn delete_for_user(&self, user_id: Uuid) -> Result<(), AppError> {
        self.policies
            .lock()
            .expect("insurance store lock")
            .retain(|p| p.user_id != user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryPreferenceStore {
    prefs: Mutex<HashMap<Uuid, PreferenceRecord>>,
}

#[async_trait]
impl PreferenceStore for MemoryPreferenceStore {
    async fn upsert(&self, user_id: Uuid, prefs: &PreferenceRecord) -> Result<(), AppError> {
        self.prefs
            .lock()
            .expect("preference store lock")
            .insert(user_id, prefs.clone());
        Ok(())
    }

    async fn find(&self, user_id: Uuid) -> Result<Option<PreferenceRecord>, AppError> {
        Ok(self
            .prefs
            .lock()
            .expect("preference store lock")
            .get(&user_id)
            .cloned())
    }

    async fn delete_for_user(&self, user_id: Uuid) -> Result<(), AppError> {
        self.prefs
            .lock()
            .expect("preference store lock")
            .remove(&user_id);
        Ok(())
    }
}

/// Posting fake. Defaults to the reference seed catalog.
pub struct MemoryPostingStore {
    postings: Vec<Posting>,
}

impl MemoryPostingStore {
    pub fn with_catalog(postings: Vec<Posting>) -> Self {
        Self { postings }
    }
}

impl Default for MemoryPostingStore {
    fn default() -> Self {
        Self::with_catalog(seed_catalog())
    }
}

#[async_trait]
impl PostingStore for MemoryPostingStore {
    async fn list_active(&self) -> Result<Vec<Posting>, AppError> {
        Ok(self
            .postings
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect())
    }
}
