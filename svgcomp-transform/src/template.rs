//! Component naming and the header/footer wrapped around the markup.

use crate::error::{TransformError, TransformResult};
use crate::options::TransformOptions;
use std::fmt;
use std::path::Path;

/// Identifier of the generated component, taken verbatim from a file's base name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: impl Into<String>) -> TransformResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TransformError::InvalidComponentName(name));
        }
        Ok(Self(name))
    }

    /// Base name of `path` (file name without its extension).
    pub fn from_path(path: impl AsRef<Path>) -> TransformResult<Self> {
        let path = path.as_ref();
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| TransformError::InvalidComponentName(path.display().to_string()))?;
        Self::new(stem)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Header and footer text for one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentTemplate {
    pub header: String,
    pub footer: String,
}

impl ComponentTemplate {
    pub fn new(name: &ComponentName, options: &TransformOptions) -> Self {
        let tab = options.indent_unit();
        let template = &options.template;
        let header = format!(
            "import * as React from 'react';\n\
             import Svg, {{ {primitives} }} from '{svg_module}';\n\
             import {{ {props_type} }} from '{types_module}';\n\
             \n\
             const {name}: React.FC<{props_type}> = (props) => {{\n\
             {tab}return (\n",
            primitives = template.primitives.join(", "),
            svg_module = template.svg_module,
            props_type = template.props_type,
            types_module = template.types_module,
            name = name,
            tab = tab,
        );
        let footer = format!("{tab});\n}};\n\nexport default {name};\n");
        Self { header, footer }
    }

    pub fn wrap(&self, body: &str) -> String {
        let mut out = String::with_capacity(self.header.len() + body.len() + self.footer.len());
        out.push_str(&self.header);
        out.push_str(body);
        out.push_str(&self.footer);
        out
    }
}
