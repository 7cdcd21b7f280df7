use crate::models::question::Question;
use crate::models::result::TestResult;
use crate::session::answers::AnswerSheet;

/// Where a session currently stands in the test flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No questions loaded yet.
    Empty,
    /// Questions loaded, user navigating and answering.
    InProgress,
    /// A result has been recorded; the session is read-only.
    Completed,
}

/// Outcome of a forward navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved to the given 1-based position.
    Moved(usize),
    /// Already on the last question; the caller should submit for scoring.
    ReadyToSubmit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("cannot load an empty question list")]
    EmptyQuestionList,
    #[error("questions are already loaded")]
    AlreadyLoaded,
    #[error("no test is in progress")]
    NotInProgress,
    #[error("test already completed")]
    AlreadyCompleted,
    #[error("unanswered questions: {}", .0.join(", "))]
    Incomplete(Vec<String>),
}

/// The per-user test session: the ordered question list, the 1-based cursor,
/// the answer set, and the final result.
///
/// All mutation goes through the transition methods below; the question list
/// is never reordered or edited once loaded. While in progress the cursor is
/// always a valid index into the list.
#[derive(Debug, Clone, Default)]
pub struct TestSession {
    questions: Vec<Question>,
    current: usize,
    answers: AnswerSheet,
    result: Option<TestResult>,
}

impl TestSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.result.is_some() {
            Phase::Completed
        } else if self.questions.is_empty() {
            Phase::Empty
        } else {
            Phase::InProgress
        }
    }

    /// Load the generated question list and move to the first question.
    pub fn load_questions(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        match self.phase() {
            Phase::Empty => {}
            Phase::InProgress => return Err(SessionError::AlreadyLoaded),
            Phase::Completed => return Err(SessionError::AlreadyCompleted),
        }
        if questions.is_empty() {
            return Err(SessionError::EmptyQuestionList);
        }
        self.questions = questions;
        self.current = 1;
        self.answers.clear();
        Ok(())
    }

    /// 1-based position of the question being shown.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.phase() == Phase::InProgress {
            self.questions.get(self.current - 1)
        } else {
            None
        }
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn result(&self) -> Option<&TestResult> {
        self.result.as_ref()
    }

    /// Record the user's input for the question currently shown.
    pub fn answer_current(&mut self, text: &str) -> Result<(), SessionError> {
        let id = self
            .current_question()
            .ok_or(SessionError::NotInProgress)?
            .id
            .clone();
        self.answers.upsert(&id, text);
        Ok(())
    }

    /// Advance one question, or signal submit-readiness on the last one.
    pub fn go_next(&mut self) -> Result<Advance, SessionError> {
        if self.phase() != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }
        if self.current < self.questions.len() {
            self.current += 1;
            Ok(Advance::Moved(self.current))
        } else {
            Ok(Advance::ReadyToSubmit)
        }
    }

    /// Step back one question; a no-op on the first one.
    pub fn go_previous(&mut self) -> Result<usize, SessionError> {
        if self.phase() != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }
        if self.current > 1 {
            self.current -= 1;
        }
        Ok(self.current)
    }

    /// Accept the scored result, completing the session.
    ///
    /// Rejected while any loaded question lacks an answer; the session stays
    /// in progress so the user can go back and fill the gaps.
    pub fn record_result(&mut self, result: TestResult) -> Result<(), SessionError> {
        if self.phase() != Phase::InProgress {
            return Err(SessionError::NotInProgress);
        }
        let missing = self.answers.unanswered(&self.questions);
        if !missing.is_empty() {
            return Err(SessionError::Incomplete(
                missing.into_iter().map(String::from).collect(),
            ));
        }
        self.result = Some(result);
        Ok(())
    }

    /// Discard everything and return to the empty state.
    pub fn reset(&mut self) {
        self.questions.clear();
        self.current = 0;
        self.answers.clear();
        self.result = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::result::PerformanceEntry;

    fn two_questions() -> Vec<Question> {
        vec![
            Question::multiple_choice(
                "q1",
                "2+2?",
                vec!["3".into(), "4".into(), "5".into(), "6".into()],
            ),
            Question::short_answer("q2", "Next: 1,2,3,?"),
        ]
    }

    fn some_result() -> TestResult {
        TestResult {
            iq_score: 120,
            iq_category: "Superior Intelligence".to_string(),
            percentile: 91,
            performance: vec![PerformanceEntry::new("Logical Reasoning", 88)],
            explanation: "Strong all-round performance.".to_string(),
        }
    }

    #[test]
    fn load_rejects_empty_list() {
        let mut session = TestSession::new();
        assert_eq!(
            session.load_questions(vec![]),
            Err(SessionError::EmptyQuestionList)
        );
        assert_eq!(session.phase(), Phase::Empty);
    }

    #[test]
    fn load_moves_to_first_question() {
        let mut session = TestSession::new();
        session.load_questions(two_questions()).unwrap();
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.position(), 1);
        assert_eq!(session.current_question().unwrap().id, "q1");
    }

    #[test]
    fn load_twice_is_rejected() {
        let mut session = TestSession::new();
        session.load_questions(two_questions()).unwrap();
        assert_eq!(
            session.load_questions(two_questions()),
            Err(SessionError::AlreadyLoaded)
        );
    }

    #[test]
    fn previous_at_first_position_is_a_no_op() {
        let mut session = TestSession::new();
        session.load_questions(two_questions()).unwrap();
        assert_eq!(session.go_previous(), Ok(1));
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn next_at_last_position_signals_submit() {
        let mut session = TestSession::new();
        session.load_questions(two_questions()).unwrap();
        assert_eq!(session.go_next(), Ok(Advance::Moved(2)));
        assert_eq!(session.go_next(), Ok(Advance::ReadyToSubmit));
        assert_eq!(session.position(), 2);
    }

    #[test]
    fn position_stays_in_bounds_over_any_walk() {
        let mut session = TestSession::new();
        session.load_questions(two_questions()).unwrap();
        for _ in 0..5 {
            session.go_next().unwrap();
            assert!(session.position() >= 1 && session.position() <= 2);
        }
        for _ in 0..5 {
            session.go_previous().unwrap();
            assert!(session.position() >= 1 && session.position() <= 2);
        }
    }

    #[test]
    fn navigation_outside_in_progress_fails() {
        let mut session = TestSession::new();
        assert_eq!(session.go_next(), Err(SessionError::NotInProgress));
        assert_eq!(session.go_previous(), Err(SessionError::NotInProgress));
        assert_eq!(session.answer_current("4"), Err(SessionError::NotInProgress));
    }

    #[test]
    fn record_result_requires_all_answers() {
        let mut session = TestSession::new();
        session.load_questions(two_questions()).unwrap();
        session.answer_current("4").unwrap();

        let err = session.record_result(some_result()).unwrap_err();
        assert_eq!(err, SessionError::Incomplete(vec!["q2".to_string()]));
        assert_eq!(session.phase(), Phase::InProgress);

        session.go_next().unwrap();
        session.answer_current("4").unwrap();
        session.record_result(some_result()).unwrap();
        assert_eq!(session.phase(), Phase::Completed);
        assert_eq!(session.result().unwrap().iq_score, 120);
    }

    #[test]
    fn revisiting_keeps_earlier_answers() {
        let mut session = TestSession::new();
        session.load_questions(two_questions()).unwrap();
        session.answer_current("4").unwrap();
        session.go_next().unwrap();
        // Glance at q2 without typing, then go back.
        session.answer_current("").unwrap();
        session.go_previous().unwrap();
        assert_eq!(session.answers().lookup("q1"), Some("4"));
        assert_eq!(session.answers().lookup("q2"), None);
    }

    #[test]
    fn reset_discards_everything_from_any_phase() {
        let mut session = TestSession::new();
        session.reset();
        assert_eq!(session.phase(), Phase::Empty);

        session.load_questions(two_questions()).unwrap();
        session.answer_current("4").unwrap();
        session.reset();
        assert_eq!(session.phase(), Phase::Empty);
        assert!(session.questions().is_empty());
        assert!(session.answers().is_empty());
        assert!(session.result().is_none());
    }
}
