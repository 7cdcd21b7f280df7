use serde::{Deserialize, Serialize};

/// A single questionnaire entry as served to the client.
///
/// Produced by the response extractor (or its fallback set) and immutable
/// afterwards. `options` is present exactly when `kind` is multiple choice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    ShortAnswer,
}

impl Question {
    pub fn multiple_choice(
        id: impl Into<String>,
        question: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: QuestionKind::MultipleChoice,
            question: question.into(),
            options: Some(options),
        }
    }

    pub fn short_answer(id: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: QuestionKind::ShortAnswer,
            question: question.into(),
            options: None,
        }
    }

    /// Shape check applied to every entry recovered from model output.
    pub fn is_well_formed(&self) -> bool {
        if self.id.trim().is_empty() || self.question.trim().is_empty() {
            return false;
        }
        match self.kind {
            QuestionKind::MultipleChoice => self
                .options
                .as_ref()
                .map(|o| !o.is_empty())
                .unwrap_or(false),
            QuestionKind::ShortAnswer => self.options.is_none(),
        }
    }
}
