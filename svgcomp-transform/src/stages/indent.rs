//! Line-based re-indentation.
//!
//! Depth is tracked from the shape of each line rather than from a parse
//! tree: a line ending in `/>` is self-closing, one starting with `</` closes
//! an element and any other line starting with `<` opens one.

use super::Stage;
use crate::error::TransformResult;
use crate::options::IndentPolicy;

/// Shape of a single markup line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Opening,
    Closing,
    SelfClosing,
    /// Text content, declarations and comments
    Other,
}

impl TagKind {
    pub fn classify(line: &str) -> Self {
        let line = line.trim();
        if line.ends_with("/>") {
            TagKind::SelfClosing
        } else if line.starts_with("</") {
            TagKind::Closing
        } else if line.starts_with("<!") || line.starts_with("<?") {
            TagKind::Other
        } else if line.starts_with('<') {
            TagKind::Opening
        } else {
            TagKind::Other
        }
    }
}

/// Tracks indentation depth across lines.
struct Indenter {
    width: usize,
    base_depth: usize,
    depth: usize,
    pending: bool,
    policy: IndentPolicy,
}

impl Indenter {
    fn new(width: usize, base_depth: usize, policy: IndentPolicy) -> Self {
        Self {
            width,
            base_depth,
            depth: base_depth,
            pending: false,
            policy,
        }
    }

    fn pad(&self, line: &str) -> String {
        format!("{}{}", " ".repeat(self.depth * self.width), line)
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1).max(self.base_depth);
    }

    fn line(&mut self, line: &str) -> String {
        // blank artifacts of the `>` split are emitted without indentation
        if line.trim().chars().count() <= 1 {
            return line.to_string();
        }

        let kind = TagKind::classify(line);
        match self.policy {
            IndentPolicy::Nested => match kind {
                TagKind::Closing => {
                    self.close();
                    self.pad(line)
                }
                TagKind::Opening => {
                    let out = self.pad(line);
                    self.depth += 1;
                    out
                }
                TagKind::SelfClosing | TagKind::Other => self.pad(line),
            },
            IndentPolicy::Deferred => {
                // the increase owed by the previous opening line lands here
                if self.pending {
                    self.depth += 1;
                    self.pending = false;
                }
                match kind {
                    TagKind::Closing => {
                        self.close();
                        self.pad(line)
                    }
                    TagKind::Opening => {
                        self.pending = true;
                        self.pad(line)
                    }
                    TagKind::SelfClosing | TagKind::Other => self.pad(line),
                }
            }
        }
    }
}

pub fn indent_lines(markup: &str, width: usize, base_depth: usize, policy: IndentPolicy) -> String {
    let mut indenter = Indenter::new(width, base_depth, policy);
    markup
        .split('\n')
        .map(|line| indenter.line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Copy)]
pub struct Indent {
    pub width: usize,
    pub base_depth: usize,
    pub policy: IndentPolicy,
}

impl Stage for Indent {
    fn name(&self) -> &'static str {
        "indent"
    }

    fn apply(&self, markup: String) -> TransformResult<String> {
        Ok(indent_lines(&markup, self.width, self.base_depth, self.policy))
    }
}
