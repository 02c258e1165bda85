//! Blog post generation from transcript and extracted code.
//!
//! Assembles one prompt from the transcript chunks and the snippet
//! collection (rendered as fenced code blocks) and sends it to the
//! configured text-generation backend.

use crate::error::CoreResult;
use crate::external::llm::LlmClient;
use crate::extraction::snippets::SnippetCollection;

/// Prompt template. `{notes}` receives the joined transcript, `{code}` the
/// fenced snippet blocks.
const BLOG_PROMPT_TEMPLATE: &str = "\
Create a technical blog post from this video transcript and extracted code:

Transcript:
{notes}

Extracted Code:
{code}

Requirements:
1. Title with primary programming language
2. Introduction explaining concepts
3. Organized sections with headings
4. Integrated code snippets with explanations
5. Practical examples
6. Conclusion with key takeaways
7. Professional but approachable tone
";

/// Renders every snippet as a fenced code block.
fn render_snippets(snippets: &SnippetCollection) -> String {
    if snippets.is_empty() {
        return "(no code captured from the video)".to_string();
    }
    snippets
        .as_slice()
        .iter()
        .map(|s| format!("```\n{s}\n```"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Builds the full generation prompt.
pub fn build_prompt(chunks: &[String], snippets: &SnippetCollection) -> String {
    let notes = chunks.join(" ");
    BLOG_PROMPT_TEMPLATE
        .replace("{notes}", &notes)
        .replace("{code}", &render_snippets(snippets))
}

/// Generates the blog post markdown.
pub fn generate_blog<L: LlmClient>(
    client: &L,
    chunks: &[String],
    snippets: &SnippetCollection,
) -> CoreResult<String> {
    let prompt = build_prompt(chunks, snippets);
    log::debug!(
        "Generation prompt: {} chars, {} snippet(s)",
        prompt.len(),
        snippets.len()
    );
    client.complete(&prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::snippets::SnippetStore;

    fn collection(snippets: &[&str]) -> SnippetCollection {
        let mut store = SnippetStore::new();
        for s in snippets {
            store.offer(s);
        }
        store.finalize()
    }

    #[test]
    fn test_prompt_contains_transcript_and_fenced_code() {
        let chunks = vec!["we define a function".to_string(), "then call it".to_string()];
        let prompt = build_prompt(&chunks, &collection(&["def main():", "main()"]));

        assert!(prompt.contains("we define a function then call it"));
        assert!(prompt.contains("```\ndef main():\n```"));
        assert!(prompt.contains("```\nmain()\n```"));
    }

    #[test]
    fn test_prompt_without_snippets_states_absence() {
        let prompt = build_prompt(&["narration only".to_string()], &collection(&[]));
        assert!(prompt.contains("(no code captured from the video)"));
        assert!(!prompt.contains("```"));
    }

    #[test]
    fn test_snippets_render_in_first_seen_order() {
        let rendered = render_snippets(&collection(&["b()", "a()"]));
        let b_pos = rendered.find("b()").expect("b present");
        let a_pos = rendered.find("a()").expect("a present");
        assert!(b_pos < a_pos);
    }
}
