//! Whitespace normalization and removal of elements with no rendering value.

use super::Stage;
use crate::error::TransformResult;
use once_cell::sync::Lazy;
use regex::Regex;

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<title\b[^>]*>.*?</title>").unwrap());
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
// Runs of two or more whitespace chars, or a single non-space whitespace char.
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}|[\t\r\n\f\v]").unwrap());
static EMPTY_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<g>\s*</g>").unwrap());
static BETWEEN_TAGS: Lazy<Regex> = Lazy::new(|| Regex::new(r">\s+<").unwrap());

pub fn strip_title(markup: &str) -> String {
    TITLE.replace_all(markup, "").into_owned()
}

pub fn strip_comments(markup: &str) -> String {
    COMMENT.replace_all(markup, "").into_owned()
}

/// Collapse whitespace runs to a single space. Idempotent.
pub fn collapse_whitespace(markup: &str) -> String {
    WHITESPACE.replace_all(markup, " ").into_owned()
}

pub fn remove_empty_groups(markup: &str) -> String {
    EMPTY_GROUP.replace_all(markup, "").into_owned()
}

/// `> <` becomes `><`.
pub fn join_tags(markup: &str) -> String {
    BETWEEN_TAGS.replace_all(markup, "><").into_owned()
}

#[derive(Debug, Clone, Copy)]
pub struct Normalize {
    pub strip_title: bool,
    pub strip_comments: bool,
}

impl Stage for Normalize {
    fn name(&self) -> &'static str {
        "normalize"
    }

    fn apply(&self, markup: String) -> TransformResult<String> {
        let mut markup = markup;
        if self.strip_title {
            markup = strip_title(&markup);
        }
        if self.strip_comments {
            markup = strip_comments(&markup);
        }
        let markup = collapse_whitespace(&markup);
        let markup = remove_empty_groups(&markup);
        Ok(join_tags(&markup))
    }
}
