use axum::{extract::State, response::Json};
use serde::Deserialize;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::answer::Answer;
use crate::models::result::TestResult;
use crate::models::user::UserProfile;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub user_data: UserProfile,
    pub answers: Vec<Answer>,
}

/// POST /api/results — submit the completed answer set for scoring.
///
/// The profile is validated before any network call. A gateway outage is
/// degraded to the unavailable-result payload inside the service, so this
/// handler only fails on bad input.
#[axum::debug_handler]
pub async fn score_test(
    State(state): State<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<TestResult>> {
    payload.user_data.validate()?;
    if payload.answers.is_empty() {
        return Err(Error::BadRequest("No answers submitted".into()));
    }
    if payload.answers.iter().any(|a| a.question_id.is_empty()) {
        return Err(Error::BadRequest("Answer with missing question id".into()));
    }

    let result = state
        .test_service
        .score_answers(&payload.user_data, &payload.answers)
        .await;

    // Keep a copy for registered takers; scoring itself needs no account.
    if let Some(user) = state.storage.get_user_by_name(&payload.user_data.name) {
        state
            .storage
            .create_result(user.id, result.clone(), payload.answers);
    }

    Ok(Json(result))
}
