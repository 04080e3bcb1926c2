pub mod deck;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod session;
pub mod terminal;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use deck::{load_default_deck, parse_deck};
pub use models::{Advance, AnswerOutcome, AnswerRecord, AppState, Question, Screen, ViewState};
pub use quiz::QuizCore;
pub use session::{handle_quiz_input, QuizApp};
pub use ui::{draw, draw_loading, draw_quit_confirmation, draw_quiz, draw_summary};
