//! Locate the `<svg>` element inside the source text.

use super::Stage;
use crate::error::{TransformError, TransformResult};
use once_cell::sync::Lazy;
use regex::Regex;

static SVG_ELEMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<svg\b.*?</svg>").unwrap());

/// Returns the first `<svg ...>...</svg>` span, dropping any prolog, doctype
/// or trailing content around it.
pub fn extract_svg(source: &str) -> TransformResult<&str> {
    SVG_ELEMENT
        .find(source)
        .map(|m| m.as_str())
        .ok_or(TransformError::NoSvgRoot)
}

pub struct Extract;

impl Stage for Extract {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn apply(&self, markup: String) -> TransformResult<String> {
        extract_svg(&markup).map(str::to_string)
    }
}
