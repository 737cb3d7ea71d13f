use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::recommendations::catalog::seed_catalog;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the schema if it does not exist yet. Idempotent.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id                  UUID PRIMARY KEY,
            first_name          TEXT NOT NULL,
            last_name           TEXT NOT NULL,
            email               TEXT NOT NULL UNIQUE,
            phone               TEXT NOT NULL,
            national_id         TEXT NOT NULL,
            password_hash       TEXT NOT NULL,
            bank_account_status TEXT NOT NULL DEFAULT 'pending',
            insurance_status    TEXT NOT NULL DEFAULT 'incomplete',
            created_at          TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS insurance_policies (
            id            UUID PRIMARY KEY,
            user_id       UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            policy_number TEXT NOT NULL,
            status        TEXT NOT NULL DEFAULT 'pending',
            created_at    TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS internship_preferences (
            user_id    UUID PRIMARY KEY REFERENCES users(id) ON DELETE CASCADE,
            data       JSONB NOT NULL,
            updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // seq preserves catalog order so equal-score recommendations tie-break
    // the same way on every read.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS internships (
            id              UUID PRIMARY KEY,
            seq             INT NOT NULL,
            title           TEXT NOT NULL,
            company         TEXT NOT NULL,
            location        TEXT NOT NULL,
            duration        TEXT NOT NULL,
            stipend         TEXT NOT NULL,
            description     TEXT NOT NULL,
            required_skills TEXT[] NOT NULL,
            sector          TEXT NOT NULL,
            work_mode       TEXT NOT NULL,
            education_level TEXT NOT NULL,
            is_active       BOOLEAN NOT NULL DEFAULT TRUE,
            created_at      TIMESTAMPTZ NOT NULL DEFAULT now()
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Schema initialized");
    Ok(())
}

/// Inserts the reference posting catalog when the table is empty, so a fresh
/// deployment serves recommendations immediately.
pub async fn seed_postings(pool: &PgPool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM internships")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    for (seq, posting) in seed_catalog().iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO internships
                (id, seq, title, company, location, duration, stipend,
                 description, required_skills, sector, work_mode, education_level, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(posting.id)
        .bind(seq as i32 + 1)
        .bind(&posting.title)
        .bind(&posting.company)
        .bind(&posting.location)
        .bind(&posting.duration)
        .bind(&posting.stipend)
        .bind(&posting.description)
        .bind(&posting.required_skills)
        .bind(&posting.sector)
        .bind(&posting.work_mode)
        .bind(&posting.education_level)
        .bind(posting.is_active)
        .execute(pool)
        .await?;
    }

    info!("Seeded internship catalog");
    Ok(())
}
