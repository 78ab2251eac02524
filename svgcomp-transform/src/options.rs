//! Knobs that change how the pipeline rewrites markup.
//!
//! Two behaviors have historically existed for tag-name case folding and for
//! when an opening tag raises the indentation. Both are kept as explicit
//! options instead of being merged.

use serde::Deserialize;

/// Attributes that React Native SVG does not understand.
pub const DEFAULT_REMOVED_ATTRIBUTES: &[&str] =
    &["version", "id", "xmlns", "xmlns:xlink", "xml:space", "style"];

/// How the characters after the first letter of a tag name are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagCase {
    /// `<linearGradient` becomes `<LinearGradient`
    #[default]
    Preserve,
    /// `<linearGradient` becomes `<Lineargradient`
    Lowercase,
}

/// When an opening tag raises the indentation of the lines below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IndentPolicy {
    /// Every opening tag indents the following line by one level.
    #[default]
    Nested,
    /// The opening line records a pending increase that the next line, of
    /// any kind, applies before it is emitted.
    Deferred,
}

/// Settings for the generated component's header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TemplateOptions {
    pub svg_module: String,
    pub primitives: Vec<String>,
    pub types_module: String,
    pub props_type: String,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            svg_module: "react-native-svg".to_string(),
            primitives: ["Path", "G", "Circle", "Rect", "Polygon"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            types_module: "../../types".to_string(),
            props_type: "SvgProps".to_string(),
        }
    }
}

/// Full option set for one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOptions {
    /// Spaces per indentation level
    pub indent_width: usize,
    /// Indentation level of the root element inside `return (`
    pub base_depth: usize,
    pub indent_policy: IndentPolicy,
    pub tag_case: TagCase,
    pub strip_title: bool,
    pub strip_comments: bool,
    pub removed_attributes: Vec<String>,
    pub template: TemplateOptions,
}

impl TransformOptions {
    /// One indentation level as a string of spaces.
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            base_depth: 2,
            indent_policy: IndentPolicy::default(),
            tag_case: TagCase::default(),
            strip_title: true,
            strip_comments: true,
            removed_attributes: DEFAULT_REMOVED_ATTRIBUTES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            template: TemplateOptions::default(),
        }
    }
}
