//! Token-budget-aware context assembly.
//!
//! Packs a ranked, diversity-selected candidate list into a single text blob
//! bounded by a token budget. Packing is greedy first-fit-then-stop: the
//! moment one formatted block would overflow the budget, assembly ends, even
//! if a later smaller block would have fit.

use serde::{Deserialize, Serialize};

use crate::models::{MemoryCandidate, ScoredCandidate};

/// Fixed characters-per-token heuristic used by the budget math.
pub const CHARS_PER_TOKEN: usize = 4;

/// The packed context returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssembledContext {
    /// Newline-joined formatted memory blocks, no trailing newline
    pub context: String,

    /// How many memories fit the budget
    pub memory_count: usize,

    /// Sum of per-block token estimates for included memories only
    pub total_tokens_estimate: usize,
}

impl AssembledContext {
    /// The empty result produced for empty input or a budget nothing fits.
    pub fn empty() -> Self {
        Self {
            context: String::new(),
            memory_count: 0,
            total_tokens_estimate: 0,
        }
    }
}

/// Rough token estimate: ~4 characters per token, minimum 1.
///
/// Not a real tokenizer; the constant heuristic must stay bit-for-bit stable
/// because stored budget expectations depend on it.
pub fn estimate_tokens(text: &str) -> usize {
    (text.chars().count() / CHARS_PER_TOKEN).max(1)
}

/// Render one memory as a context line.
///
/// `- [<type> [tag1, tag2]] <content>` when tags are present, otherwise
/// `- [<type>] <content>`.
pub fn format_block(memory: &MemoryCandidate) -> String {
    if memory.tags.is_empty() {
        format!("- [{}] {}", memory.content_type, memory.content)
    } else {
        format!(
            "- [{} [{}]] {}",
            memory.content_type,
            memory.tags.join(", "),
            memory.content
        )
    }
}

/// Build a token-aware context string from ranked memory results.
///
/// Iterates in the given order (already ranked and diversified upstream),
/// adding memories until the next block would exceed `max_tokens`. Empty
/// input, or a first block that already overflows, yields the documented
/// empty result rather than an error.
pub fn assemble_context(candidates: &[ScoredCandidate], max_tokens: usize) -> AssembledContext {
    let mut lines: Vec<String> = Vec::new();
    let mut total_tokens = 0_usize;

    for candidate in candidates {
        let block = format_block(&candidate.memory);
        let block_tokens = estimate_tokens(&block);

        if total_tokens + block_tokens > max_tokens {
            break;
        }

        total_tokens += block_tokens;
        lines.push(block);
    }

    if lines.is_empty() {
        return AssembledContext::empty();
    }

    AssembledContext {
        memory_count: lines.len(),
        total_tokens_estimate: total_tokens,
        context: lines.join("\n"),
    }
}
