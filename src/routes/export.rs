use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::error::Result;
use crate::models::result::TestResult;
use crate::models::user::UserProfile;
use crate::services::report_service::ReportService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    pub user_data: UserProfile,
    pub test_result: TestResult,
}

/// POST /api/results/download — render the results report for download.
///
/// Deterministic template render, no external call.
#[axum::debug_handler]
pub async fn download_report(Json(payload): Json<ExportRequest>) -> Result<impl IntoResponse> {
    payload.user_data.validate()?;

    let report = ReportService::render_report(&payload.user_data, &payload.test_result);
    let filename = ReportService::report_filename(&payload.user_data.name);
    let disposition = format!("attachment; filename=\"{}\"", filename);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report,
    ))
}
