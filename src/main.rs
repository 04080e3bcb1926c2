use crossterm::event::{self, Event, KeyEventKind};
use quiz_widget::terminal::{restore_terminal, setup_terminal, QuizTerminal};
use quiz_widget::{draw, handle_quiz_input, load_default_deck, logger, AppState, QuizApp, QuizCore};
use std::io;

fn main() -> io::Result<()> {
    logger::init();

    let questions = load_default_deck()?;
    logger::log(&format!("Loaded deck with {} questions", questions.len()));
    let mut app = QuizApp::new(QuizCore::new(questions));

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app);
    let restored = restore_terminal();

    logger::log(&format!("Exiting with score {}", app.score()));
    result.and(restored)
}

fn run(terminal: &mut QuizTerminal, app: &mut QuizApp) -> io::Result<()> {
    let mut app_state = AppState::Quiz;

    while app_state != AppState::Exit {
        terminal.draw(|f| draw(f, app, &app_state))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_quiz_input(app, key, &mut app_state)?;
        }
    }

    Ok(())
}
