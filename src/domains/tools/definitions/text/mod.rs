//! Plain-text tools.

pub mod slugify;
pub mod word_count;

pub use slugify::{SlugifyParams, SlugifyTool};
pub use word_count::{WordCountParams, WordCountTool};
