use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

pub type QuizTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus alternate screen. On failure the terminal is put back before returning.
pub fn setup_terminal() -> io::Result<QuizTerminal> {
    enable_raw_mode()?;
    match enter_alternate_screen() {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = restore_terminal();
            Err(e)
        }
    }
}

fn enter_alternate_screen() -> io::Result<QuizTerminal> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Runs every teardown step even if an earlier one fails; reports the first failure.
pub fn restore_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    first_error([
        disable_raw_mode(),
        execute!(stdout, LeaveAlternateScreen),
        execute!(stdout, cursor::Show),
    ])
}

pub fn first_error(results: impl IntoIterator<Item = io::Result<()>>) -> io::Result<()> {
    let mut first = Ok(());
    for result in results {
        if let Err(e) = result
            && first.is_ok()
        {
            first = Err(e);
        }
    }
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail(message: &str) -> io::Result<()> {
        Err(io::Error::other(message.to_string()))
    }

    #[test]
    fn test_first_error_all_ok() {
        assert!(first_error([Ok(()), Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_first_error_keeps_earliest_failure() {
        let err = first_error([Ok(()), fail("raw mode"), fail("alternate screen")]).unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
    }

    #[test]
    fn test_first_error_reports_late_failure() {
        let err = first_error([Ok(()), Ok(()), fail("cursor")]).unwrap_err();
        assert_eq!(err.to_string(), "cursor");
    }
}
