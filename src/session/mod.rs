pub mod answers;
pub mod state;

pub use answers::AnswerSheet;
pub use state::{Advance, Phase, SessionError, TestSession};
