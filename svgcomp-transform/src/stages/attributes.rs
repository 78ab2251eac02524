//! Removal of attributes React Native SVG cannot use.

use super::Stage;
use crate::error::TransformResult;
use regex::Regex;

/// Strips ` name="..."` for each configured attribute name.
pub struct StripAttributes {
    patterns: Vec<Regex>,
}

impl StripAttributes {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        let patterns = names
            .iter()
            .map(|name| {
                let pattern = format!(r#" {}=".*?""#, regex::escape(name.as_ref()));
                // escaped names always form a valid pattern
                Regex::new(&pattern).unwrap()
            })
            .collect();
        Self { patterns }
    }
}

impl Stage for StripAttributes {
    fn name(&self) -> &'static str {
        "strip-attributes"
    }

    fn apply(&self, markup: String) -> TransformResult<String> {
        let stripped = self
            .patterns
            .iter()
            .fold(markup, |acc, pattern| pattern.replace_all(&acc, "").into_owned());
        Ok(stripped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DEFAULT_REMOVED_ATTRIBUTES;
    use rstest::rstest;

    fn strip(markup: &str) -> String {
        StripAttributes::new(DEFAULT_REMOVED_ATTRIBUTES)
            .apply(markup.to_string())
            .unwrap()
    }

    #[rstest]
    #[case(r#"<svg version="1.1">"#, "<svg>")]
    #[case(r#"<svg id="Layer_1">"#, "<svg>")]
    #[case(r#"<svg xmlns="http://www.w3.org/2000/svg">"#, "<svg>")]
    #[case(r#"<svg xmlns:xlink="http://www.w3.org/1999/xlink">"#, "<svg>")]
    #[case(r#"<svg xml:space="preserve">"#, "<svg>")]
    #[case(r#"<path style="fill:red" d="M0"/>"#, r#"<path d="M0"/>"#)]
    fn removes_each_non_portable_attribute(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip(input), expected);
    }

    #[test]
    fn removes_from_nested_elements() {
        let input = r#"<svg id="a"><g id="b"><path id="c" d="M0"/></g></svg>"#;
        assert_eq!(strip(input), r#"<svg><g><path d="M0"/></g></svg>"#);
    }

    #[test]
    fn leaves_similarly_named_attributes_alone() {
        let input = r#"<svg data-id="a" viewBox="0 0 1 1" fill-rule="evenodd">"#;
        assert_eq!(strip(input), input);
    }

    #[test]
    fn custom_list_is_honored() {
        let stage = StripAttributes::new(&["fill"]);
        let out = stage
            .apply(r##"<path fill="#000" id="x"/>"##.to_string())
            .unwrap();
        assert_eq!(out, r#"<path id="x"/>"#);
    }
}
