use crate::models::Question;
use std::collections::HashSet;
use std::io;

const DEFAULT_DECK: &str = include_str!("../decks/default.json");

pub fn load_default_deck() -> io::Result<Vec<Question>> {
    parse_deck(DEFAULT_DECK)
}

/// Parses a JSON array of questions and checks that each one is answerable.
pub fn parse_deck(content: &str) -> io::Result<Vec<Question>> {
    let questions: Vec<Question> = serde_json::from_str(content)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    if questions.is_empty() {
        return Err(invalid("deck contains no questions".to_string()));
    }

    for (i, question) in questions.iter().enumerate() {
        validate_question(i + 1, question)?;
    }

    Ok(questions)
}

fn validate_question(number: usize, question: &Question) -> io::Result<()> {
    if question.question.trim().is_empty() {
        return Err(invalid(format!("question {} has an empty prompt", number)));
    }
    if question.options.is_empty() {
        return Err(invalid(format!("question {} has no options", number)));
    }

    let mut seen = HashSet::new();
    for option in &question.options {
        if option.trim().is_empty() {
            return Err(invalid(format!("question {} has an empty option", number)));
        }
        if !seen.insert(option.as_str()) {
            return Err(invalid(format!(
                "question {} lists option {:?} twice",
                number, option
            )));
        }
    }

    if !question.has_option(&question.answer) {
        return Err(invalid(format!(
            "question {}: answer {:?} is not one of its options",
            number, question.answer
        )));
    }

    Ok(())
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck_loads() {
        let deck = load_default_deck().unwrap();
        assert!(!deck.is_empty());
        assert_eq!(deck[0].answer, "Paris");
        for question in &deck {
            assert!(question.has_option(&question.answer));
        }
    }

    #[test]
    fn test_parse_deck_simple() {
        let json = r#"[{"question": "What is 2+2?", "options": ["3", "4"], "answer": "4"}]"#;
        let deck = parse_deck(json).unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck[0].question, "What is 2+2?");
        assert_eq!(deck[0].options, vec!["3", "4"]);
    }

    #[test]
    fn test_parse_deck_keeps_order() {
        let json = r#"[
            {"question": "Q1", "options": ["a", "b"], "answer": "a"},
            {"question": "Q2", "options": ["c", "d"], "answer": "d"},
            {"question": "Q3", "options": ["e"], "answer": "e"}
        ]"#;
        let deck = parse_deck(json).unwrap();
        let prompts: Vec<&str> = deck.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(prompts, vec!["Q1", "Q2", "Q3"]);
    }

    #[test]
    fn test_parse_deck_rejects_empty() {
        let err = parse_deck("[]").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_parse_deck_rejects_malformed_json() {
        let err = parse_deck(r#"[{"question": "Q1""#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_parse_deck_rejects_answer_outside_options() {
        let json = r#"[{"question": "Q1", "options": ["a", "b"], "answer": "c"}]"#;
        let err = parse_deck(json).unwrap_err();
        assert!(err.to_string().contains("question 1"));
    }

    #[test]
    fn test_parse_deck_rejects_duplicate_options() {
        let json = r#"[
            {"question": "Q1", "options": ["a"], "answer": "a"},
            {"question": "Q2", "options": ["x", "x"], "answer": "x"}
        ]"#;
        let err = parse_deck(json).unwrap_err();
        assert!(err.to_string().contains("question 2"));
    }

    #[test]
    fn test_parse_deck_rejects_missing_options() {
        let json = r#"[{"question": "Q1", "options": [], "answer": "a"}]"#;
        assert!(parse_deck(json).is_err());
    }

    #[test]
    fn test_parse_deck_rejects_blank_prompt() {
        let json = r#"[{"question": "   ", "options": ["a"], "answer": "a"}]"#;
        assert!(parse_deck(json).is_err());
    }

    #[test]
    fn test_parse_deck_rejects_blank_option() {
        let json = r#"[{"question": "Q1", "options": ["", "x"], "answer": ""}]"#;
        let err = parse_deck(json).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("empty option"));

        let json = r#"[{"question": "Q1", "options": ["x", " "], "answer": "x"}]"#;
        assert!(parse_deck(json).is_err());
    }

    #[test]
    fn test_parse_deck_handles_escaped_quotes() {
        let json = r#"[{"question": "Who wrote \"Hamlet\"?", "options": ["Shakespeare, W."], "answer": "Shakespeare, W."}]"#;
        let deck = parse_deck(json).unwrap();
        assert_eq!(deck[0].question, "Who wrote \"Hamlet\"?");
        assert_eq!(deck[0].answer, "Shakespeare, W.");
    }
}
