//! Pre-compiled regex patterns for note analysis

use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns shared across the note analyzer
pub struct NotePatterns;

impl NotePatterns {
    /// "revisita de Pedro", "Revisita a Ana", "revisita Luis"; group 1 is the name
    pub fn follow_up_subject() -> &'static Regex {
        static PATTERN: Lazy<Regex> = Lazy::new(|| {
            Regex::new(r"(?i)revisita(?: de| a)? (\w+)").expect("Valid follow-up subject regex")
        });
        &PATTERN
    }

    /// Runs of letters and digits, used for word-level matching
    pub fn word() -> &'static Regex {
        static PATTERN: Lazy<Regex> =
            Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("Valid word regex"));
        &PATTERN
    }

    /// First name captured by [`NotePatterns::follow_up_subject`]
    pub fn capture_follow_up_subject(text: &str) -> Option<String> {
        Self::follow_up_subject()
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}
