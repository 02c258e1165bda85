//! Transcript chunking for the generation stage.
//!
//! Splits long transcripts into chunks that fit a model context, preferring
//! paragraph breaks, then line breaks, then word boundaries before falling
//! back to a hard character split. Consecutive chunks share an overlap so
//! sentences cut at a boundary stay interpretable.

use crate::config::ChunkingConfig;

/// Separators tried in order, coarsest first.
const SEPARATORS: [&str; 3] = ["\n\n", "\n", " "];

/// Splits `text` into chunks of at most `chunk_size` characters (plus up to
/// `chunk_overlap` carried from the previous chunk). Returns an empty vector
/// for blank input.
pub fn chunk_text(text: &str, config: &ChunkingConfig) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    if text.len() <= config.chunk_size {
        return vec![text.trim().to_string()];
    }

    let pieces = split_pieces(text, &SEPARATORS, config.chunk_size);
    merge_pieces(pieces, config)
}

/// Recursively splits text on the first separator present until every piece
/// fits within `max` bytes. Separators are kept on the front of the piece
/// that follows them so concatenating pieces reproduces the input.
fn split_pieces(text: &str, separators: &[&str], max: usize) -> Vec<String> {
    if text.len() <= max {
        return vec![text.to_string()];
    }

    let Some((&sep, rest)) = separators.split_first() else {
        return hard_split(text, max);
    };

    if !text.contains(sep) {
        return split_pieces(text, rest, max);
    }

    let mut pieces = Vec::new();
    for (i, part) in text.split(sep).enumerate() {
        let piece = if i == 0 {
            part.to_string()
        } else {
            format!("{sep}{part}")
        };
        if piece.len() > max {
            pieces.extend(split_pieces(&piece, rest, max));
        } else {
            pieces.push(piece);
        }
    }
    pieces
}

/// Splits at character boundaries every `max` bytes. Last resort for text
/// with no usable separators.
fn hard_split(text: &str, max: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if !current.is_empty() && current.len() + ch.len_utf8() > max {
            out.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Greedily merges pieces into chunks, seeding each new chunk with the tail
/// of the previous one for overlap.
fn merge_pieces(pieces: Vec<String>, config: &ChunkingConfig) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_is_seed = false;

    for piece in pieces {
        if !current.is_empty() && current.len() + piece.len() > config.chunk_size {
            if current_is_seed {
                // The overlap seed alone cannot absorb this piece; drop it
                // rather than emit an overlap-only chunk.
                current.clear();
            } else {
                let chunk = current.trim().to_string();
                current = overlap_tail(&current, config.chunk_overlap);
                current_is_seed = true;
                if !chunk.is_empty() {
                    chunks.push(chunk);
                }
                if current.len() + piece.len() > config.chunk_size {
                    current.clear();
                }
            }
        }
        current.push_str(&piece);
        if !piece.trim().is_empty() {
            current_is_seed = false;
        }
    }

    let last = current.trim();
    if !last.is_empty() && !current_is_seed {
        chunks.push(last.to_string());
    }
    chunks
}

/// Last `overlap` bytes of `chunk`, adjusted to a char boundary.
fn overlap_tail(chunk: &str, overlap: usize) -> String {
    if overlap == 0 {
        return String::new();
    }
    if chunk.len() <= overlap {
        return chunk.to_string();
    }
    let mut idx = chunk.len() - overlap;
    while !chunk.is_char_boundary(idx) {
        idx += 1;
    }
    chunk[idx..].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(chunk_size: usize, chunk_overlap: usize) -> ChunkingConfig {
        ChunkingConfig {
            chunk_size,
            chunk_overlap,
        }
    }

    #[test]
    fn test_short_text_is_one_chunk() {
        let chunks = chunk_text("a short transcript", &config(3000, 200));
        assert_eq!(chunks, vec!["a short transcript".to_string()]);
    }

    #[test]
    fn test_blank_text_yields_nothing() {
        assert!(chunk_text("", &config(3000, 200)).is_empty());
        assert!(chunk_text("   \n\n  ", &config(3000, 200)).is_empty());
    }

    #[test]
    fn test_chunks_respect_size_budget() {
        let text = "word ".repeat(2000);
        let cfg = config(300, 50);
        let chunks = chunk_text(&text, &cfg);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(
                chunk.len() <= cfg.chunk_size + cfg.chunk_overlap,
                "chunk of {} bytes exceeds budget",
                chunk.len()
            );
        }
    }

    #[test]
    fn test_consecutive_chunks_overlap() {
        let chunks = chunk_text("aaaa bbbb cccc dddd", &config(10, 3));
        assert_eq!(chunks, vec!["aaaa bbbb", "bbb cccc", "ccc dddd"]);
    }

    #[test]
    fn test_prefers_paragraph_breaks() {
        let text = format!("{}\n\n{}", "a".repeat(40), "b".repeat(40));
        let chunks = chunk_text(&text, &config(50, 0));
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].chars().all(|c| c == 'a'));
        assert!(chunks[1].chars().all(|c| c == 'b'));
    }

    #[test]
    fn test_hard_split_handles_separator_free_text() {
        let text = "x".repeat(1000);
        let chunks = chunk_text(&text, &config(100, 0));
        assert_eq!(chunks.len(), 10);
        assert!(chunks.iter().all(|c| c.len() <= 100));
    }

    #[test]
    fn test_no_content_is_lost() {
        // With zero overlap the chunks concatenate back to the input words.
        let text = "one two three four five six seven eight nine ten";
        let chunks = chunk_text(text, &config(12, 0));
        let rejoined: Vec<&str> = chunks
            .iter()
            .flat_map(|c| c.split_whitespace())
            .collect();
        let original: Vec<&str> = text.split_whitespace().collect();
        assert_eq!(rejoined, original);
    }
}
