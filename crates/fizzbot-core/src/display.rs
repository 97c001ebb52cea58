//! Transcript rendering.
//!
//! All functions here are pure: they build strings and leave writing to the
//! caller, so rendering the same record twice gives the same text.

use std::fmt::Write;

use crate::model::Question;

pub const SEPARATOR_LINE: &str = "----------------------------------------------------------";
pub const BANNER_LINE: &str = "-------------------- Starting fizzbot --------------------";

/// The visual break written around question blocks and outcome messages.
pub fn separator() -> String {
    format!("\n{SEPARATOR_LINE}\n\n")
}

/// Opening of a session, including the root message.
pub fn render_banner(root: &Question) -> String {
    format!(
        "{BANNER_LINE}\n\nDear Candidate\n\n{}{}",
        root.message,
        separator()
    )
}

/// A question block: message, rules, example answer, numbers, separator.
pub fn render_question(question: &Question) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", question.message);

    if let Some(rules) = &question.rules {
        out.push_str("\nRules:\n");
        for rule in rules {
            let _ = writeln!(out, "    For {} print {}", rule.divisor, rule.response);
        }
    }

    let _ = writeln!(out, "\nExample response: {}", question.example_answer());

    if let Some(numbers) = &question.numbers {
        let _ = writeln!(out, "\nNumbers: [{}]", join_numbers(numbers));
    }

    out.push_str(&separator());
    out
}

/// An accepted answer's message, framed by separators.
pub fn render_correct(outcome: &Question) -> String {
    format!("{}{}\n{}", separator(), outcome.message, separator())
}

/// The closing message.
pub fn render_complete(outcome: &Question) -> String {
    format!("{}{}{}", separator(), outcome.message, separator())
}

/// A rejected answer's message, shown as a hint.
pub fn render_hint(outcome: &Question) -> String {
    format!("{}\n", outcome.message)
}

fn join_numbers(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExampleResponse, Rule};

    fn numeric_question() -> Question {
        Question {
            message: "Solve this".into(),
            next_question: Some("/fizzbot/questions/1".into()),
            numbers: Some(vec![1, 2, 3]),
            rules: Some(vec![Rule::new(3, "Fizz").unwrap()]),
            example_response: Some(ExampleResponse {
                answer: "1 2 Fizz".into(),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn separator_has_58_dashes() {
        assert_eq!(SEPARATOR_LINE.len(), 58);
        assert_eq!(separator(), format!("\n{}\n\n", "-".repeat(58)));
    }

    #[test]
    fn question_block_layout() {
        let text = render_question(&numeric_question());
        let expected = format!(
            "Solve this\n\nRules:\n    For 3 print Fizz\n\nExample response: 1 2 Fizz\n\nNumbers: [1 2 3]\n{}",
            separator()
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn question_without_rules_or_numbers() {
        let q = Question {
            message: "What language?".into(),
            example_response: Some(ExampleResponse {
                answer: "COBOL".into(),
            }),
            ..Default::default()
        };
        let text = render_question(&q);
        assert!(!text.contains("Rules:"));
        assert!(!text.contains("Numbers:"));
        assert!(text.starts_with("What language?\n\nExample response: COBOL\n"));
    }

    #[test]
    fn rendering_is_repeatable() {
        let q = numeric_question();
        assert_eq!(render_question(&q), render_question(&q));
        assert_eq!(render_banner(&q), render_banner(&q));
    }

    #[test]
    fn banner_greets_candidate() {
        let root = Question {
            message: "Thank you for your application".into(),
            ..Default::default()
        };
        let text = render_banner(&root);
        assert!(text.starts_with(BANNER_LINE));
        assert!(text.contains("Dear Candidate\n\nThank you for your application\n---"));
    }
}
