//! Snippet accumulation and deduplication.
//!
//! OCR recognizes the same on-screen listing many times over the course of a
//! video. Snippet identity is the exact textual content, not the source
//! frame: two recognitions producing identical text are the same snippet.

use serde::Serialize;
use std::collections::HashSet;

/// Deduplicating accumulator for accepted snippets.
///
/// `offer` is idempotent; no trimming or normalization happens here beyond
/// what the classifier already saw.
#[derive(Debug, Default)]
pub struct SnippetStore {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl SnippetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the text unless an identical snippet was already offered.
    /// Returns true if the snippet was newly stored.
    pub fn offer(&mut self, text: &str) -> bool {
        if self.seen.contains(text) {
            return false;
        }
        self.seen.insert(text.to_string());
        self.ordered.push(text.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Converts the accumulated set into its final ordered form. The store
    /// keeps first-seen order; uniqueness is the only guaranteed invariant.
    pub fn finalize(self) -> SnippetCollection {
        SnippetCollection {
            snippets: self.ordered,
        }
    }
}

/// Finalized, immutable sequence of unique snippets from one video pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SnippetCollection {
    snippets: Vec<String>,
}

impl SnippetCollection {
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.snippets
    }

    pub fn into_vec(self) -> Vec<String> {
        self.snippets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offer_deduplicates_exact_text() {
        let mut store = SnippetStore::new();
        assert!(store.offer("x=1"));
        assert!(!store.offer("x=1"));
        assert_eq!(store.len(), 1);

        let collection = store.finalize();
        assert_eq!(collection.as_slice(), ["x=1".to_string()]);
    }

    #[test]
    fn test_offer_is_byte_exact() {
        let mut store = SnippetStore::new();
        // Whitespace variants are different snippets; no normalization.
        assert!(store.offer("x=1"));
        assert!(store.offer("x = 1"));
        assert!(store.offer("x=1 "));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_finalize_keeps_first_seen_order() {
        let mut store = SnippetStore::new();
        store.offer("b");
        store.offer("a");
        store.offer("c");
        store.offer("a");
        assert_eq!(
            store.finalize().into_vec(),
            vec!["b".to_string(), "a".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_repeated_offers_never_duplicate() {
        let mut store = SnippetStore::new();
        for _ in 0..100 {
            store.offer("def main():");
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_store_finalizes_empty() {
        let collection = SnippetStore::new().finalize();
        assert!(collection.is_empty());
        assert_eq!(collection.len(), 0);
    }
}
