use axum::{extract::State, http::HeaderMap, Json};
use serde::Serialize;
use tracing::info;

use crate::auth::optional_subject;
use crate::errors::AppError;
use crate::models::internship::{PreferenceRecord, ScoredPosting};
use crate::recommendations::scorer::score_catalog;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub message: String,
    pub recommendations: Vec<ScoredPosting>,
}

/// POST /api/internship-recommendations
///
/// Scoring never requires authentication. When a bearer token is present it
/// must decode — a malformed token is a 401, not a scoring failure — and the
/// preference record is upserted under that identity before scoring.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(prefs): Json<PreferenceRecord>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    prefs.validate()?;

    if let Some(user_id) = optional_subject(&headers, &state.config.jwt_secret)? {
        state.preferences.upsert(user_id, &prefs).await?;
        info!("Stored internship preferences for user {user_id}");
    }

    let catalog = state.postings.list_active().await?;
    let recommendations = score_catalog(&prefs, &catalog);

    Ok(Json(RecommendationsResponse {
        message: "Recommendations generated successfully".to_string(),
        recommendations,
    }))
}
