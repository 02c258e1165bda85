//! Code-likeness classification of OCR output.
//!
//! OCR text from a tutorial frame is either a code listing or incidental
//! prose (titles, captions, watermarks). The classifier accepts text showing
//! any one of three independent signals: a programming keyword, a structural
//! character, or a method-call shape. The OR is deliberate: OCR output is
//! noisy, a human reviews the final snippet list, and silently dropping real
//! code is the worse failure.

use crate::error::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters that essentially never appear in prose but are routine in code.
const STRUCTURAL_CHARS: [char; 12] = ['{', '}', '(', ')', '[', ']', ';', '=', '>', '<', '|', '&'];

/// An identifier, a dot, another identifier, and an argument list.
static CALL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\w+\s*\.\s*\w+\s*\([^)]*\)").expect("call-shape pattern is valid")
});

/// Default keyword set: Python (the most common tutorial language) plus
/// common Rust/JS/C-family keywords. Overridable through configuration.
///
/// Keywords that double as everyday English words (for, if, else, from,
/// while, try, let, use, match) are excluded: narration overlays match them
/// constantly, and code lines containing them carry a structural character
/// the second signal already catches.
pub const DEFAULT_CODE_KEYWORDS: &[&str] = &[
    // Python
    "def", "class", "import", "return", "elif", "lambda",
    // Rust
    "fn", "impl", "struct", "enum", "mut", "pub",
    // JS / C-family
    "function", "var", "const", "void", "static", "async", "await",
];

/// Returns the default keyword set as owned strings for configuration.
pub fn default_keywords() -> Vec<String> {
    DEFAULT_CODE_KEYWORDS.iter().map(|s| s.to_string()).collect()
}

/// Decides whether recognized text is plausibly source code.
pub struct CodeClassifier {
    keyword_pattern: Option<Regex>,
}

impl CodeClassifier {
    /// Builds a classifier matching the given keywords as whole words.
    /// An empty keyword set disables the keyword signal; the structural and
    /// call-shape signals still apply.
    pub fn new(keywords: &[String]) -> CoreResult<Self> {
        let keyword_pattern = if keywords.is_empty() {
            None
        } else {
            let alternatives: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
            let pattern = format!(r"\b(?:{})\b", alternatives.join("|"));
            Some(Regex::new(&pattern).map_err(|e| {
                CoreError::InvalidConfig(format!("invalid classifier keyword set: {e}"))
            })?)
        };
        Ok(Self { keyword_pattern })
    }

    /// Builds a classifier with the default keyword set.
    pub fn with_default_keywords() -> CoreResult<Self> {
        Self::new(&default_keywords())
    }

    /// Returns true if the text looks like code: non-empty and matching at
    /// least one of the three signals.
    pub fn is_code(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        self.keyword_pattern
            .as_ref()
            .is_some_and(|re| re.is_match(text))
            || text.contains(&STRUCTURAL_CHARS[..])
            || CALL_SHAPE.is_match(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> CodeClassifier {
        CodeClassifier::with_default_keywords().expect("default classifier")
    }

    #[test]
    fn test_accepts_keyword_and_call_shape() {
        let c = classifier();
        assert!(c.is_code("def foo(): return bar.baz(1,2)"));
    }

    #[test]
    fn test_rejects_plain_prose() {
        let c = classifier();
        assert!(!c.is_code("Thanks for watching, subscribe!"));
        assert!(!c.is_code("In this tutorial we build a web app"));
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        let c = classifier();
        assert!(!c.is_code(""));
        assert!(!c.is_code("   \n\t  "));
    }

    #[test]
    fn test_structural_character_is_sufficient() {
        let c = classifier();
        assert!(c.is_code("x = 1"));
        assert!(c.is_code("items[0]"));
        assert!(c.is_code("a | b"));
    }

    #[test]
    fn test_stopword_keywords_still_caught_by_structure() {
        // "for" and "if" are not in the default set, but real loop and
        // branch lines always carry structural characters.
        let c = classifier();
        assert!(c.is_code("for i in range(10):"));
        assert!(c.is_code("if x > 3:"));
    }

    #[test]
    fn test_call_shape_is_sufficient() {
        let c = CodeClassifier::new(&[]).expect("keyword-free classifier");
        assert!(c.is_code("result.unwrap()"));
        assert!(c.is_code("df.head(10)"));
    }

    #[test]
    fn test_keyword_requires_word_boundary() {
        // "definitely" must not match the keyword "def".
        let c = CodeClassifier::new(&["def".to_string()]).expect("classifier");
        assert!(!c.is_code("definitely a great video"));
        assert!(c.is_code("def main"));
    }

    #[test]
    fn test_custom_keyword_set() {
        let c = CodeClassifier::new(&["SELECT".to_string(), "WHERE".to_string()])
            .expect("classifier");
        assert!(c.is_code("SELECT name FROM users"));
        assert!(!c.is_code("def main"));
    }

    #[test]
    fn test_empty_keyword_set_keeps_other_signals() {
        let c = CodeClassifier::new(&[]).expect("classifier");
        assert!(!c.is_code("def main"));
        assert!(c.is_code("def main():"));
    }
}
