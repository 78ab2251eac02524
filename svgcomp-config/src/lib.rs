//! Configuration for svgcomp runs.
//!
//! The shipped `defaults/svgcomp.default.toml` is compiled in and always forms
//! the bottom layer. A project `svgcomp.toml`, a `--config` file and CLI flags
//! go on top through [`Loader`]; the merged tree is read into [`SvgcompConfig`],
//! which hands the pipeline its [`TransformOptions`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use svgcomp_transform::{IndentPolicy, TagCase, TemplateOptions, TransformOptions};

const DEFAULT_TOML: &str = include_str!("../defaults/svgcomp.default.toml");

/// Top-level configuration consumed by svgcomp.
#[derive(Debug, Clone, Deserialize)]
pub struct SvgcompConfig {
    pub transform: TransformConfig,
    pub template: TemplateOptions,
    pub output: OutputConfig,
}

/// Mirrors the knobs of the transformation pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct TransformConfig {
    pub indent_width: usize,
    pub base_depth: usize,
    pub indent_policy: IndentPolicy,
    pub tag_case: TagCase,
    pub strip_title: bool,
    pub strip_comments: bool,
    pub removed_attributes: Vec<String>,
}

/// Naming of the generated files.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub extension: String,
    pub single_file_suffix: String,
}

impl SvgcompConfig {
    pub fn transform_options(&self) -> TransformOptions {
        let t = &self.transform;
        TransformOptions {
            indent_width: t.indent_width,
            base_depth: t.base_depth,
            indent_policy: t.indent_policy,
            tag_case: t.tag_case,
            strip_title: t.strip_title,
            strip_comments: t.strip_comments,
            removed_attributes: t.removed_attributes.clone(),
            template: self.template.clone(),
        }
    }
}

/// Stacks config sources above the compiled-in defaults; later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Only the compiled-in defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a TOML file the user asked for explicitly; `build` fails if it is absent.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a TOML file that may or may not exist, such as `./svgcomp.toml`.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key, e.g. `transform.indent_policy`, from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge all layers and read them into an [`SvgcompConfig`].
    pub fn build(self) -> Result<SvgcompConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration with no user layers, as used by tests and library callers.
pub fn load_defaults() -> Result<SvgcompConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn embedded_defaults_match_transform_defaults() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.transform_options(), TransformOptions::default());
        assert_eq!(config.output.extension, "tsx");
        assert_eq!(config.output.single_file_suffix, "Svg");
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("transform.indent_policy", "deferred")
            .expect("override to apply")
            .set_override("transform.tag_case", "lowercase")
            .expect("override to apply")
            .set_override("transform.indent_width", 4_i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        let options = config.transform_options();
        assert_eq!(options.indent_policy, IndentPolicy::Deferred);
        assert_eq!(options.tag_case, TagCase::Lowercase);
        assert_eq!(options.indent_width, 4);
    }

    #[test]
    fn user_file_layers_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("svgcomp.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[template]\nsvg_module = \"react-native-svg-web\"").unwrap();

        let config = Loader::new().with_file(&path).build().expect("config to build");
        assert_eq!(config.template.svg_module, "react-native-svg-web");
        assert_eq!(config.template.props_type, "SvgProps");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("definitely/not/here.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.transform.base_depth, 2);
    }

    #[test]
    fn missing_required_file_errors() {
        assert!(Loader::new()
            .with_file("definitely/not/here.toml")
            .build()
            .is_err());
    }
}
