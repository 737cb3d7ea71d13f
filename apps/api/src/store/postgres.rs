use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::insurance::InsurancePolicy;
use crate::models::internship::{Posting, PreferenceRecord};
use crate::models::user::{NewUser, User, BANK_STATUS_PENDING, INSURANCE_STATUS_INCOMPLETE};
use crate::store::{InsuranceStore, PostingStore, PreferenceStore, UserStore};

#[derive(Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
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

        sqlx::query(
            r#"
            INSERT INTO users
                (id, first_name, last_name, email, phone, national_id,
                 password_hash, bank_account_status, insurance_status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user.id)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.national_id)
        .bind(&user.password_hash)
        .bind(&user.bank_account_status)
        .bind(&user.insurance_status)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        Ok(sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn set_insurance_status(&self, id: Uuid, status: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET insurance_status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn set_bank_account_status(&self, id: Uuid, status: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE users SET bank_account_status = $1 WHERE id = $2")
            .bind(status)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgInsuranceStore {
    pool: PgPool,
}

impl PgInsuranceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InsuranceStore for PgInsuranceStore {
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

        sqlx::query(
            r#"
            INSERT INTO insurance_policies (id, user_id, policy_number, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(policy.id)
        .bind(policy.user_id)
        .bind(&policy.policy_number)
        .bind(&policy.status)
        .bind(policy.created_at)
        .execute(&self.pool)
        .await?;

        Ok(policy)
    }

    async fn latest_for_user(&self, user_id: Uuid) -> Result<Option<InsurancePolicy>, AppError> {
        Ok(sqlx::query_as::<_, InsurancePolicy>(
            r#"
            SELECT * FROM insurance_policies
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn delete_for_user(&self, user_id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM insurance_policies WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgPreferenceStore {
    pool: PgPool,
}

impl PgPreferenceStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PreferenceStore for PgPreferenceStore {
    async fn upsert(&self, user_id: Uuid, prefs: &PreferenceRecord) -> Result<(), AppError> {
        let data = serde_json::to_value(prefs)
            .map_err(|e| anyhow::anyhow!("Failed to serialize preferences: {e}"))?;

        sqlx::query(
            r#"
            INSERT INTO internship_preferences (user_id, data, updated_at)
            VALUES ($1, $2, now())
            ON CONFLICT (user_id) DO UPDATE SET data = $2, updated_at = now()
            "#,
        )
        .bind(user_id)
        .bind(data)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, user_id: Uuid) -> Result<Option<PreferenceRecord>, AppError> {
        let data: Option<serde_json::Value> = sqlx::query_scalar(
            "SELECT data FROM internship_preferences WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        match data {
            Some(value) => {
                let prefs = serde_json::from_value(value)
                    .map_err(|e| anyhow::anyhow!("Failed to deserialize preferences: {e}"))?;
                Ok(Some(prefs))
            }
            None => Ok(None),
        }
    }

    async fn delete_for_user(&self, user_id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM internship_preferences WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct PgPostingStore {
    pool: PgPool,
}

impl PgPostingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostingStore for PgPostingStore {
    async fn list_active(&self) -> Result<Vec<Posting>, AppError> {
        Ok(sqlx::query_as::<_, Posting>(
            r#"
            SELECT id, title, company, location, duration, stipend, description,
                   required_skills, sector, work_mode, education_level, is_active
            FROM internships
            WHERE is_active
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await?)
    }
}
