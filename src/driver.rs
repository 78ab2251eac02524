//! File-level processing around the transformation pipeline.
//!
//! Two entry points exist:
//!
//! - [`Driver::run_single`]: one file in, `<name>Svg.tsx` out, overwriting.
//! - [`Driver::run_batch`]: every `*.svg` directly inside a directory, never
//!   overwriting, optionally moving consumed sources elsewhere.
//!
//! Neither prints anything; results come back as values and the binary
//! decides how to report them.

mod batch;
mod single;

pub use batch::{BatchOptions, BatchReport, FileOutcome};
pub use single::SingleFileOutcome;

use crate::error::DriverError;
use std::fs;
use std::path::Path;
use svgcomp_config::{OutputConfig, SvgcompConfig};
use svgcomp_transform::{ComponentName, Pipeline};

/// Runs the pipeline over files on disk.
pub struct Driver {
    pipeline: Pipeline,
    output: OutputConfig,
}

impl Driver {
    pub fn new(config: &SvgcompConfig) -> Self {
        Self {
            pipeline: Pipeline::new(config.transform_options()),
            output: config.output.clone(),
        }
    }

    /// Read `source` and return its component name and generated text.
    fn generate(&self, source: &Path) -> Result<(ComponentName, String), DriverError> {
        let name = ComponentName::from_path(source).map_err(|e| DriverError::Transform {
            path: source.to_path_buf(),
            source: e,
        })?;
        let text = fs::read_to_string(source).map_err(|e| DriverError::io(source, e))?;
        let component = self
            .pipeline
            .run(&text, &name)
            .map_err(|e| DriverError::Transform {
                path: source.to_path_buf(),
                source: e,
            })?;
        tracing::debug!(component = %name, bytes = component.len(), "generated component");
        Ok((name, component))
    }

    fn output_file_name(&self, name: &ComponentName, suffix: &str) -> String {
        format!("{}{}.{}", name, suffix, self.output.extension)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Driver;

    pub const ARROW_SVG: &str =
        r#"<svg id="x" xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#;

    pub fn driver() -> Driver {
        let config = svgcomp_config::load_defaults().expect("defaults to load");
        Driver::new(&config)
    }
}
