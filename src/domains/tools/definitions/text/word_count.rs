//! Word count tool definition.
//!
//! Counts words, characters and lines in a block of text.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{ToolError, ToolOutcome};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the word count tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WordCountParams {
    /// The text to analyze
    pub text: String,
}

// ============================================================================
// Output Structure
// ============================================================================

/// Text statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct TextStats {
    /// Whitespace-separated tokens
    pub words: usize,
    /// Total characters, whitespace included
    pub characters: usize,
    /// Characters excluding spaces and newlines
    pub characters_no_whitespace: usize,
    /// Lines (newlines + 1, or 0 for empty text)
    pub lines: usize,
}

impl TextStats {
    /// Compute statistics for `text`.
    ///
    /// Only spaces and `\n` count as whitespace for
    /// `characters_no_whitespace`; tabs and carriage returns are kept.
    pub fn of(text: &str) -> Self {
        let lines = if text.is_empty() {
            0
        } else {
            text.matches('\n').count() + 1
        };

        Self {
            words: text.split_whitespace().count(),
            characters: text.chars().count(),
            characters_no_whitespace: text.chars().filter(|c| *c != ' ' && *c != '\n').count(),
            lines,
        }
    }

    fn render(&self) -> String {
        format!(
            "Words: {}\nCharacters: {}\nCharacters (no whitespace): {}\nLines: {}",
            self.words, self.characters, self.characters_no_whitespace, self.lines
        )
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Word count tool - analyzes text and counts words, characters, and lines.
pub struct WordCountTool;

impl ToolDefinition for WordCountTool {
    const NAME: &'static str = "word_count";

    const DESCRIPTION: &'static str = "Analyze text and count words, characters, and lines";

    type Params = WordCountParams;
    type Output = TextStats;

    #[instrument(skip_all, fields(len = params.text.len()))]
    fn execute(params: &WordCountParams) -> Result<ToolOutcome, ToolError> {
        info!("word_count called with text length: {}", params.text.len());

        let stats = TextStats::of(&params.text);
        ToolOutcome::success(stats.render(), &stats)
    }
}

// ============================================================================
// Tests
// ============================================================================
