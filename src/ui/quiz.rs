use crate::session::QuizApp;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{option_label, score_line};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

fn key_span(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

pub fn draw_quiz(f: &mut Frame, app: &QuizApp) {
    let Some(question) = app.current_question() else {
        draw_loading(f);
        return;
    };
    let layout = calculate_quiz_chunks(f.area());
    let core = app.core();

    let progress = format!(
        "Question {} / {} - {}",
        core.current_index() + 1,
        core.len(),
        score_line(core.score(), core.len())
    );
    let header = Paragraph::new(progress)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let prompt = Paragraph::new(Text::from(question.question.as_str()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Quiz Question"));
    f.render_widget(prompt, layout.question_area);

    let selected = app.view.selected_answer.as_deref();
    let items: Vec<ListItem> = question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let is_selected = selected == Some(option.as_str());
            let marker = if is_selected { "(*) " } else { "( ) " };
            let mut style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if i == app.view.highlighted {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(format!("{}{}", marker, option_label(i, option))).style(style)
        })
        .collect();

    let options = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Answer Options"),
    );
    f.render_widget(options, layout.options_area);

    let help_text = vec![Line::from(vec![
        key_span("↑/↓"),
        Span::from(" Move  "),
        key_span("Space/1-9"),
        Span::from(" Select  "),
        key_span("Enter"),
        Span::from(" Next Question  "),
        key_span("Esc"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

pub fn draw_loading(f: &mut Frame) {
    let loading = Paragraph::new("Loading...")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(loading, f.area());
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit Quiz")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Leave the quiz? Progress is not saved.")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Quit)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
