use serde::{Deserialize, Serialize};

/// A user's answer to one question, keyed by the question's opaque id.
///
/// The live answer set holds at most one entry per question id; the
/// reconciler in `session::answers` enforces the upsert semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub answer: String,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            answer: answer.into(),
        }
    }
}
