//! Injection of the `{...props}` spread into the root element.

use super::Stage;
use crate::error::{TransformError, TransformResult};
use once_cell::sync::Lazy;
use regex::Regex;

pub const PROPS_SPREAD: &str = "{...props}";

// Anchored so only the root opening tag can match.
static ROOT_OPEN_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\A\s*<svg\b[^>]*>").unwrap());

/// Insert the props spread right before the root tag's closing `>` (or `/>`).
pub fn inject_props(markup: &str) -> TransformResult<String> {
    let root = ROOT_OPEN_TAG
        .find(markup)
        .ok_or(TransformError::RootTagNotFound)?;
    let tag = root.as_str();
    let (open, close) = match tag.strip_suffix("/>") {
        Some(open) => (open, " />"),
        None => (&tag[..tag.len() - 1], ">"),
    };

    Ok(format!(
        "{}{} {}{}{}",
        &markup[..root.start()],
        open.trim_end(),
        PROPS_SPREAD,
        close,
        &markup[root.end()..]
    ))
}

pub struct InjectProps;

impl Stage for InjectProps {
    fn name(&self) -> &'static str {
        "inject-props"
    }

    fn apply(&self, markup: String) -> TransformResult<String> {
        inject_props(&markup)
    }
}
