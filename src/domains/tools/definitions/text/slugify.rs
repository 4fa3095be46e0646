//! Slugify tool definition.
//!
//! Turns arbitrary text into a lowercase, hyphen-separated URL slug.

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{ToolError, ToolOutcome};

/// Any run of characters that may not appear in a slug.
static NON_SLUG_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Parameters for the slugify tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SlugifyParams {
    /// The text to convert to a URL-friendly slug
    pub text: String,
}

/// Slug result.
#[derive(Debug, Serialize, JsonSchema)]
pub struct SlugResult {
    /// The generated slug
    slug: String,
}

/// Lowercase, trim, collapse every non-`[a-z0-9]` run into one hyphen,
/// then strip hyphens from both ends.
///
/// Non-ASCII letters are treated as separators.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_SLUG_RUN
        .replace_all(lowered.trim(), "-")
        .trim_matches('-')
        .to_string()
}

/// Slugify tool - converts text to a URL-friendly slug.
pub struct SlugifyTool;

impl ToolDefinition for SlugifyTool {
    const NAME: &'static str = "slugify";

    const DESCRIPTION: &'static str =
        "Convert text to a URL-friendly slug (lowercase, hyphens, no special characters)";

    type Params = SlugifyParams;
    type Output = SlugResult;

    #[instrument(skip_all)]
    fn execute(params: &SlugifyParams) -> Result<ToolOutcome, ToolError> {
        info!("slugify called with text: {}", params.text);

        let slug = slugify(&params.text);
        ToolOutcome::success(slug.clone(), &SlugResult { slug })
    }
}
