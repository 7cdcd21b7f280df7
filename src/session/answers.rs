use crate::models::answer::Answer;
use crate::models::question::Question;

/// Order-preserving answer set keyed by question id.
///
/// Users revisit earlier questions freely; an edit must overwrite the prior
/// answer for that question without disturbing anything else, and merely
/// passing through a question without typing must not erase existing state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerSheet {
    entries: Vec<Answer>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the answer for `question_id`.
    ///
    /// Empty answer text means "the user left the field blank" and is a
    /// no-op: it neither records an empty answer nor clears a prior one.
    pub fn upsert(&mut self, question_id: &str, answer: &str) {
        if answer.is_empty() {
            return;
        }
        match self
            .entries
            .iter_mut()
            .find(|a| a.question_id == question_id)
        {
            Some(existing) => existing.answer = answer.to_string(),
            None => self.entries.push(Answer::new(question_id, answer)),
        }
    }

    pub fn lookup(&self, question_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.answer.as_str())
    }

    /// Ids of loaded questions that have no recorded answer, in list order.
    pub fn unanswered<'q>(&self, questions: &'q [Question]) -> Vec<&'q str> {
        questions
            .iter()
            .filter(|q| self.lookup(&q.id).is_none())
            .map(|q| q.id.as_str())
            .collect()
    }

    pub fn is_complete(&self, questions: &[Question]) -> bool {
        self.unanswered(questions).is_empty()
    }

    pub fn as_slice(&self) -> &[Answer] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
