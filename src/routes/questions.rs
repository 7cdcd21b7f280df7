use axum::{extract::State, response::Json};

use crate::error::Result;
use crate::models::question::Question;
use crate::AppState;

/// GET /api/questions — generate a fresh question list.
///
/// Fails only on configuration or gateway availability problems; a
/// malformed model reply is absorbed upstream and still yields a usable
/// list.
#[axum::debug_handler]
pub async fn get_questions(State(state): State<AppState>) -> Result<Json<Vec<Question>>> {
    let questions = state.test_service.fetch_questions().await?;
    Ok(Json(questions))
}
