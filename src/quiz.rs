//! The quiz engine: question list, progress and score.

use crate::models::{Advance, AnswerOutcome, Question};

#[derive(Debug, Clone)]
pub struct QuizCore {
    questions: Vec<Question>,
    current_index: usize,
    score: u32,
}

impl QuizCore {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
        }
    }

    /// The question at the current index, or `None` once every question has been passed.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Scores `selected` against the current question. Never moves the index.
    pub fn answer_question(&mut self, selected: &str) -> AnswerOutcome {
        let Some(question) = self.current_question() else {
            return AnswerOutcome::Finished;
        };

        if !question.has_option(selected) {
            return AnswerOutcome::Rejected;
        }

        if question.answer == selected {
            self.score += 1;
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect
        }
    }

    /// True when at least one question follows the current one.
    pub fn has_next_question(&self) -> bool {
        self.current_index + 1 < self.questions.len()
    }

    /// Moves to the following question. From the last question the index
    /// lands on `len()` and the engine becomes terminal; it never goes further.
    pub fn next_question(&mut self) -> Advance {
        if self.has_next_question() {
            self.current_index += 1;
            Advance::Moved(self.current_index)
        } else {
            self.current_index = self.questions.len();
            Advance::ReachedEnd
        }
    }

    pub fn reset(&mut self) {
        self.current_index = 0;
        self.score = 0;
    }
}
