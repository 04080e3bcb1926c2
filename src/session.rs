use crate::logger;
use crate::models::{AnswerRecord, AppState, Question, Screen, ViewState};
use crate::quiz::QuizCore;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;

/// One running quiz: the engine plus what the screen is showing.
#[derive(Debug)]
pub struct QuizApp {
    core: QuizCore,
    pub view: ViewState,
    pub history: Vec<AnswerRecord>,
}

impl QuizApp {
    pub fn new(core: QuizCore) -> Self {
        Self {
            core,
            view: ViewState::default(),
            history: Vec::new(),
        }
    }

    pub fn core(&self) -> &QuizCore {
        &self.core
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.core.current_question()
    }

    pub fn score(&self) -> u32 {
        self.core.score()
    }

    pub fn screen(&self) -> Screen {
        if self.view.quiz_completed {
            Screen::Completed {
                score: self.core.score(),
            }
        } else if self.core.current_question().is_none() {
            Screen::Loading
        } else {
            Screen::Question
        }
    }

    /// Holds `option` as the selection. Labels that are not options of the
    /// current question are ignored.
    pub fn select_option(&mut self, option: &str) -> bool {
        if self.view.quiz_completed {
            return false;
        }
        let Some(question) = self.core.current_question() else {
            return false;
        };
        let Some(position) = question.options.iter().position(|o| o == option) else {
            return false;
        };

        self.view.selected_answer = Some(option.to_string());
        self.view.highlighted = position;
        true
    }

    pub fn select_by_number(&mut self, number: usize) -> bool {
        let option = match self.core.current_question() {
            Some(question) if number >= 1 => question.options.get(number - 1).cloned(),
            _ => None,
        };
        match option {
            Some(option) => self.select_option(&option),
            None => false,
        }
    }

    pub fn select_highlighted(&mut self) -> bool {
        self.select_by_number(self.view.highlighted + 1)
    }

    pub fn move_highlight_up(&mut self) {
        self.view.highlighted = self.view.highlighted.saturating_sub(1);
    }

    pub fn move_highlight_down(&mut self) {
        let count = self
            .core
            .current_question()
            .map(|q| q.options.len())
            .unwrap_or(0);
        if self.view.highlighted + 1 < count {
            self.view.highlighted += 1;
        }
    }

    /// Scores the held selection, then moves on or marks the quiz completed.
    pub fn advance(&mut self) {
        if self.view.quiz_completed {
            return;
        }

        let question_index = self.core.current_index();
        // an empty label counts as no selection
        let selected = self
            .view
            .selected_answer
            .take()
            .filter(|answer| !answer.is_empty());
        let mut correct = false;
        if let Some(answer) = &selected {
            let outcome = self.core.answer_question(answer);
            correct = outcome.scored();
            logger::log(&format!(
                "Question {}: answered {:?} -> {:?}",
                question_index + 1,
                answer,
                outcome
            ));
        } else {
            logger::log(&format!("Question {}: skipped", question_index + 1));
        }

        if self.core.current_question().is_some() {
            self.history.push(AnswerRecord {
                question_index,
                selected,
                correct,
            });
        }

        if self.core.has_next_question() {
            self.core.next_question();
            self.view.highlighted = 0;
        } else {
            self.view.quiz_completed = true;
            logger::log(&format!(
                "Quiz completed with score {} / {}",
                self.core.score(),
                self.core.len()
            ));
        }
    }

    pub fn restart(&mut self) {
        self.core.reset();
        self.view = ViewState::default();
        self.history.clear();
        logger::log("Quiz restarted");
    }
}

pub fn handle_quiz_input(
    app: &mut QuizApp,
    key: KeyEvent,
    app_state: &mut AppState,
) -> io::Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        *app_state = AppState::Exit;
        return Ok(());
    }

    match *app_state {
        AppState::QuitConfirm => match key.code {
            KeyCode::Char('y') => *app_state = AppState::Exit,
            KeyCode::Char('n') | KeyCode::Esc => *app_state = AppState::Quiz,
            _ => {}
        },
        AppState::Quiz => match app.screen() {
            Screen::Completed { .. } => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => app.restart(),
                KeyCode::Esc | KeyCode::Char('q') => *app_state = AppState::QuitConfirm,
                _ => {}
            },
            Screen::Question | Screen::Loading => match key.code {
                KeyCode::Up | KeyCode::Char('k') => app.move_highlight_up(),
                KeyCode::Down | KeyCode::Char('j') => app.move_highlight_down(),
                KeyCode::Char(' ') => {
                    app.select_highlighted();
                }
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    let number = c.to_digit(10).unwrap_or(0) as usize;
                    app.select_by_number(number);
                }
                KeyCode::Enter | KeyCode::Char('n') => app.advance(),
                KeyCode::Esc | KeyCode::Char('q') => *app_state = AppState::QuitConfirm,
                _ => {}
            },
        },
        AppState::Exit => {}
    }

    Ok(())
}
