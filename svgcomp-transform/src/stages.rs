//! The individual rewrite stages.
//!
//! Each stage consumes the previous stage's markup and returns new markup.
//! Only `extract` and `props` can fail; the rest are total.

pub mod attributes;
pub mod capitalize;
pub mod extract;
pub mod indent;
pub mod normalize;
pub mod props;

use crate::error::TransformResult;

/// A single string-to-string step of the pipeline.
pub trait Stage {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    fn apply(&self, markup: String) -> TransformResult<String>;
}

pub use attributes::StripAttributes;
pub use capitalize::Capitalize;
pub use extract::Extract;
pub use indent::Indent;
pub use normalize::Normalize;
pub use props::InjectProps;
