use crate::session::QuizApp;
use crate::ui::layout::calculate_summary_chunks;
use crate::utils::{score_line, truncate_string};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_summary(f: &mut Frame, app: &QuizApp) {
    let layout = calculate_summary_chunks(f.area());
    let core = app.core();

    let title = Paragraph::new("Quiz Completed")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let score = Paragraph::new(format!("Final {}", score_line(core.score(), core.len())))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(score, layout.score_area);

    let mut recap = Text::default();
    for record in &app.history {
        let Some(question) = core.questions().get(record.question_index) else {
            continue;
        };
        let (mark, color) = if record.correct {
            ("[✓]", Color::Green)
        } else {
            ("[✗]", Color::Red)
        };
        recap.push_line(Line::from(vec![
            Span::styled(mark, Style::default().fg(color)),
            Span::from(format!(
                " {}. {}",
                record.question_index + 1,
                truncate_string(&question.question, 60)
            )),
        ]));
        let given = record.selected.as_deref().unwrap_or("(no answer)");
        recap.push_line(Line::from(format!(
            "   Your Answer: {}",
            truncate_string(given, 56)
        )));
        if !record.correct {
            recap.push_line(Line::from(format!(
                "   Correct Answer: {}",
                truncate_string(&question.answer, 53)
            )));
        }
        recap.push_line(Line::from(""));
    }

    let recap = Paragraph::new(recap)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Answers"));
    f.render_widget(recap, layout.recap_area);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Restart  "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
