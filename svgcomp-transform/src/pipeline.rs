//! Ordered execution of the stages and the final template wrap.

use crate::error::TransformResult;
use crate::options::TransformOptions;
use crate::stages::{
    Capitalize, Extract, Indent, InjectProps, Normalize, Stage, StripAttributes,
};
use crate::template::{ComponentName, ComponentTemplate};

/// The stage sequence for a given option set.
///
/// Build once and reuse it for every file of a batch; it holds no per-document
/// state.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage + Send + Sync>>,
    options: TransformOptions,
}

impl Pipeline {
    pub fn new(options: TransformOptions) -> Self {
        let stages: Vec<Box<dyn Stage + Send + Sync>> = vec![
            Box::new(Extract),
            Box::new(Normalize {
                strip_title: options.strip_title,
                strip_comments: options.strip_comments,
            }),
            Box::new(StripAttributes::new(options.removed_attributes.as_slice())),
            Box::new(Capitalize {
                case: options.tag_case,
            }),
            Box::new(InjectProps),
            Box::new(Indent {
                width: options.indent_width,
                base_depth: options.base_depth,
                policy: options.indent_policy,
            }),
        ];
        Self { stages, options }
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage over `source`, returning the indented markup body.
    pub fn markup(&self, source: &str) -> TransformResult<String> {
        self.stages
            .iter()
            .try_fold(source.to_string(), |markup, stage| {
                let out = stage.apply(markup)?;
                tracing::debug!(stage = stage.name(), len = out.len(), "stage applied");
                Ok(out)
            })
    }

    /// Full component source for `source`.
    pub fn run(&self, source: &str, name: &ComponentName) -> TransformResult<String> {
        let body = self.markup(source)?;
        Ok(ComponentTemplate::new(name, &self.options).wrap(&body))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(TransformOptions::default())
    }
}

/// Convert SVG `source` into the source of component `name`.
pub fn transform(
    source: &str,
    name: &ComponentName,
    options: &TransformOptions,
) -> TransformResult<String> {
    Pipeline::new(options.clone()).run(source, name)
}
