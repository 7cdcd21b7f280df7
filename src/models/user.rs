use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::answer::Answer;
use crate::models::result::TestResult;

/// Profile captured on the start page, validated before any network call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct UserProfile {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "Please select a country"))]
    pub country: String,
    #[validate(range(min = 5, max = 120, message = "Age must be between 5 and 120"))]
    pub age: i32,
    #[validate(length(min = 1, message = "Please enter your last school attended"))]
    pub school: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// A registered test taker, as held by the in-memory store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    #[serde(flatten)]
    pub profile: UserProfile,
    pub photo_path: String,
}

/// A scored test kept for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResult {
    pub id: i32,
    pub user_id: i32,
    #[serde(flatten)]
    pub result: TestResult,
    pub answers: Vec<Answer>,
    pub created_at: DateTime<Utc>,
}
