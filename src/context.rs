//! Context assembly: retrieved chunks → bounded prompt context with sources.

use crate::document::SearchResult;

/// A prompt context string with the document names it draws from.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledContext {
    /// Retrieved chunk texts joined by blank lines, similarity-descending.
    pub text: String,
    /// Distinct source document names, in first-seen order.
    pub sources: Vec<String>,
}

/// Join retrieved chunk texts into a context string and collect their
/// distinct source document names.
///
/// Chunks are joined in the given (similarity-descending) order, separated
/// by a blank line, with no truncation beyond the caller's `k`.
pub fn assemble(results: &[SearchResult]) -> AssembledContext {
    let text =
        results.iter().map(|r| r.chunk.text.as_str()).collect::<Vec<&str>>().join("\n\n");

    let mut sources: Vec<String> = Vec::new();
    for result in results {
        if !sources.iter().any(|s| s == &result.chunk.source) {
            sources.push(result.chunk.source.clone());
        }
    }

    AssembledContext { text, sources }
}

/// Build the answer prompt from an assembled context and the user's question.
pub fn build_prompt(context: &str, question: &str) -> String {
    format!(
        "You are a document assistant. Answer the user's question based on the \
         document context below.\n\n\
         Document context:\n{context}\n\n\
         Question: {question}\n\n\
         Instructions:\n\
         - Use the context to answer when it contains relevant information.\n\
         - If the context does not contain enough information, say so clearly.\n\
         - Cite the relevant parts of the documents where possible.\n\n\
         Answer:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Chunk;

    fn result(text: &str, source: &str) -> SearchResult {
        SearchResult {
            chunk: Chunk { text: text.to_string(), source: source.to_string(), seq: 0 },
            score: 0.5,
        }
    }

    #[test]
    fn joins_chunks_with_blank_lines_in_given_order() {
        let assembled = assemble(&[result("first", "a.pdf"), result("second", "b.pdf")]);
        assert_eq!(assembled.text, "first\n\nsecond");
    }

    #[test]
    fn deduplicates_sources_keeping_first_seen_order() {
        let assembled =
            assemble(&[result("1", "b.pdf"), result("2", "a.pdf"), result("3", "b.pdf")]);
        assert_eq!(assembled.sources, vec!["b.pdf", "a.pdf"]);
    }

    #[test]
    fn empty_results_assemble_to_empty_context() {
        let assembled = assemble(&[]);
        assert!(assembled.text.is_empty());
        assert!(assembled.sources.is_empty());
    }

    #[test]
    fn prompt_contains_context_and_question() {
        let prompt = build_prompt("some context", "what is it?");
        assert!(prompt.contains("some context"));
        assert!(prompt.contains("what is it?"));
    }
}
