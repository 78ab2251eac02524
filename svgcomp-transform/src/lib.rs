//! # svgcomp-transform
//!
//! Turns raw SVG markup into the source of a React Native functional component.
//!
//! The transformation is a fixed sequence of text rewrites (see [`pipeline`]):
//!
//! ```text
//! extract -> normalize -> strip-attributes -> capitalize -> inject-props -> indent -> wrap
//! ```
//!
//! Every stage is a pure `String -> String` function. Nothing here touches the
//! filesystem; callers read the source, pick a [`ComponentName`] and write the
//! result wherever they like.
//!
//! This is not an SVG parser. The stages work on the markup text with regular
//! expressions and line heuristics, so irregular input can produce irregular
//! output.

pub mod error;
pub mod options;
pub mod pipeline;
pub mod stages;
pub mod template;

pub use error::TransformError;
pub use options::{IndentPolicy, TagCase, TemplateOptions, TransformOptions};
pub use pipeline::{transform, Pipeline};
pub use template::{ComponentName, ComponentTemplate};
