//! Question list parsing and loading.
//!
//! A question list is plain text, one question per line. Surrounding
//! whitespace is trimmed and blank lines are skipped. Duplicate lines are
//! kept: each one is a separate question.

use anyhow::{Context, Result};
use std::path::Path;

/// Split raw text into trimmed, non-blank question lines
pub fn parse_questions(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check whether raw text contains no questions at all
pub fn is_blank(raw: &str) -> bool {
    raw.trim().is_empty()
}

/// Read a question file into raw text, expanding `~` in the path
pub fn read_questions_file(path: &str) -> Result<String> {
    let expanded = shellexpand::tilde(path);
    let path = Path::new(expanded.as_ref());

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read questions from {}", path.display()))?;

    tracing::debug!(
        "Read {} bytes of questions from {}",
        content.len(),
        path.display()
    );
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let questions = parse_questions("Q1\nQ2\n\n  Q3  \n");
        assert_eq!(questions, vec!["Q1", "Q2", "Q3"]);
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let questions = parse_questions("same\nother\nsame\n");
        assert_eq!(questions, vec!["same", "other", "same"]);
    }

    #[test]
    fn test_parse_crlf() {
        let questions = parse_questions("Why?\r\nHow?\r\n\r\n");
        assert_eq!(questions, vec!["Why?", "How?"]);
    }

    #[test]
    fn test_parse_blank_input() {
        assert!(parse_questions("").is_empty());
        assert!(parse_questions("   \n\n  ").is_empty());
        assert!(is_blank("   \n\t\n  "));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_inner_whitespace_preserved() {
        let questions = parse_questions("  What is   a question?  ");
        assert_eq!(questions, vec!["What is   a question?"]);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_questions_file("/definitely/not/here/questions.txt").unwrap_err();
        assert!(err.to_string().contains("Failed to read questions"));
    }

    #[test]
    fn test_read_file() {
        let path = std::env::temp_dir().join(format!("qpick-test-{}.txt", std::process::id()));
        std::fs::write(&path, "One\n\nTwo\n").unwrap();

        let raw = read_questions_file(path.to_str().unwrap()).unwrap();
        assert_eq!(parse_questions(&raw), vec!["One", "Two"]);

        std::fs::remove_file(&path).ok();
    }
}
