pub mod layout;
mod quiz;
mod summary;

use crate::models::{AppState, Screen};
use crate::session::QuizApp;
use ratatui::Frame;

pub use layout::{calculate_quiz_chunks, calculate_summary_chunks};
pub use quiz::{draw_loading, draw_quit_confirmation, draw_quiz};
pub use summary::draw_summary;

/// Draws whichever screen `app_state` and the quiz progress call for.
pub fn draw(f: &mut Frame, app: &QuizApp, app_state: &AppState) {
    match app_state {
        AppState::QuitConfirm => draw_quit_confirmation(f),
        AppState::Quiz | AppState::Exit => match app.screen() {
            Screen::Completed { .. } => draw_summary(f, app),
            Screen::Loading => draw_loading(f),
            Screen::Question => draw_quiz(f, app),
        },
    }
}
