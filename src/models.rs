use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

impl Question {
    pub fn new(question: &str, options: &[&str], answer: &str) -> Self {
        Self {
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            answer: answer.to_string(),
        }
    }

    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// Result of submitting an answer to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
    /// The submitted label is not one of the current question's options.
    Rejected,
    /// Every question has been passed; nothing left to answer.
    Finished,
}

impl AnswerOutcome {
    pub fn scored(self) -> bool {
        self == AnswerOutcome::Correct
    }
}

/// Result of moving the engine forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    ReachedEnd,
}

/// Presentation-only state, never seen by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub selected_answer: Option<String>,
    pub quiz_completed: bool,
    pub highlighted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub selected: Option<String>,
    pub correct: bool,
}

/// What the presentation layer should draw right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Question,
    Loading,
    Completed { score: u32 },
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Quiz,
    QuitConfirm,
    Exit,
}
