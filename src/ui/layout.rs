use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct QuizLayout {
    pub header_area: Rect,
    pub question_area: Rect,
    pub options_area: Rect,
    pub help_area: Rect,
}

pub struct SummaryLayout {
    pub header_area: Rect,
    pub score_area: Rect,
    pub recap_area: Rect,
    pub footer_area: Rect,
}

pub fn calculate_quiz_chunks(area: Rect) -> QuizLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Percentage(60),
            Constraint::Length(3),
        ])
        .split(area);

    QuizLayout {
        header_area: chunks[0],
        question_area: chunks[1],
        options_area: chunks[2],
        help_area: chunks[3],
    }
}

pub fn calculate_summary_chunks(area: Rect) -> SummaryLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    SummaryLayout {
        header_area: chunks[0],
        score_area: chunks[1],
        recap_area: chunks[2],
        footer_area: chunks[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_quiz_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert!(layout.question_area.height >= 4);
        assert!(layout.options_area.height > 0);
        assert!(layout.question_area.y < layout.options_area.y);
    }

    #[test]
    fn test_summary_layout() {
        let area = Rect::new(0, 0, 100, 100);
        let layout = calculate_summary_chunks(area);

        assert_eq!(layout.header_area.height, 3);
        assert_eq!(layout.score_area.height, 3);
        assert_eq!(layout.footer_area.height, 3);
        // margin 1 leaves 98 rows, fixed rows take 9
        assert_eq!(layout.recap_area.height, 89);
    }
}
