//! Tag-name capitalization: `<path` becomes `<Path`, `</path` becomes `</Path`.
//!
//! The markup is split on every `>` and each fragment is treated as the text
//! of one tag, optionally preceded by text content. Fragments are joined back
//! with `>\n`, which leaves one element per line for the indent stage.

use super::Stage;
use crate::error::TransformResult;
use crate::options::TagCase;

pub fn capitalize_tags(markup: &str, case: TagCase) -> String {
    markup
        .split('>')
        .map(|fragment| capitalize_fragment(fragment, case))
        .collect::<Vec<_>>()
        .join(">\n")
}

fn capitalize_fragment(fragment: &str, case: TagCase) -> String {
    if fragment.trim().chars().count() <= 1 {
        return fragment.to_string();
    }

    match fragment.find('<') {
        None => fragment.to_string(),
        Some(0) => capitalize_tag(fragment, case),
        Some(start) => {
            // text content followed by a (usually closing) tag
            let text = fragment[..start].trim();
            let tag = capitalize_tag(&fragment[start..], case);
            if text.is_empty() {
                tag
            } else {
                format!("{}\n{}", text, tag)
            }
        }
    }
}

/// Capitalize a single `<name ...` or `</name ...` fragment (without its `>`).
fn capitalize_tag(tag: &str, case: TagCase) -> String {
    let name_start = if tag.starts_with("</") { 2 } else { 1 };
    let (prefix, rest) = tag.split_at(name_start);
    let name_len = rest
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(rest.len());
    let (name, attributes) = rest.split_at(name_len);

    let mut chars = name.chars();
    let first = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        // declarations, comments, stray `<`
        _ => return tag.to_string(),
    };
    let tail = match case {
        TagCase::Preserve => chars.as_str().to_string(),
        TagCase::Lowercase => chars.as_str().to_lowercase(),
    };

    let mut out = format!("{}{}{}{}", prefix, first, tail, attributes);
    if out.ends_with('/') && !out[..out.len() - 1].ends_with(char::is_whitespace) {
        out.insert(out.len() - 1, ' ');
    }
    out
}

#[derive(Debug, Clone, Copy)]
pub struct Capitalize {
    pub case: TagCase,
}

impl Stage for Capitalize {
    fn name(&self) -> &'static str {
        "capitalize"
    }

    fn apply(&self, markup: String) -> TransformResult<String> {
        Ok(capitalize_tags(&markup, self.case))
    }
}
