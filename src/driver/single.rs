use super::Driver;
use crate::error::DriverError;
use std::fs;
use std::path::{Path, PathBuf};

/// A component written by single-file mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleFileOutcome {
    pub output: PathBuf,
    pub component: String,
}

impl Driver {
    /// Convert one file into `<out_dir>/<name><suffix>.<ext>`.
    ///
    /// An existing output file is overwritten.
    pub fn run_single(
        &self,
        input: Option<&Path>,
        out_dir: &Path,
    ) -> Result<SingleFileOutcome, DriverError> {
        let input = input.ok_or(DriverError::InputNotSpecified)?;
        if !input.is_file() {
            return Err(DriverError::InputNotFound(input.to_path_buf()));
        }
        if !out_dir.is_dir() {
            return Err(DriverError::OutputDirNotFound(out_dir.to_path_buf()));
        }

        let (name, component) = self.generate(input)?;
        let output =
            out_dir.join(self.output_file_name(&name, &self.output.single_file_suffix));
        fs::write(&output, &component).map_err(|e| DriverError::io(&output, e))?;
        tracing::info!(input = %input.display(), output = %output.display(), "created component");

        Ok(SingleFileOutcome { output, component })
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{driver, ARROW_SVG};
    use super::*;

    #[test]
    fn writes_suffixed_tsx_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("arrow.svg");
        fs::write(&input, ARROW_SVG).unwrap();

        let outcome = driver().run_single(Some(input.as_path()), dir.path()).unwrap();
        assert_eq!(outcome.output, dir.path().join("arrowSvg.tsx"));
        assert_eq!(fs::read_to_string(&outcome.output).unwrap(), outcome.component);
        assert!(outcome.component.contains("export default arrow;"));
    }

    #[test]
    fn overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("arrow.svg");
        fs::write(&input, ARROW_SVG).unwrap();
        fs::write(dir.path().join("arrowSvg.tsx"), "stale").unwrap();

        let outcome = driver().run_single(Some(input.as_path()), dir.path()).unwrap();
        assert_ne!(fs::read_to_string(outcome.output).unwrap(), "stale");
    }

    #[test]
    fn missing_argument() {
        let dir = tempfile::tempdir().unwrap();
        let err = driver().run_single(None, dir.path()).unwrap_err();
        assert!(matches!(err, DriverError::InputNotSpecified));
        assert_eq!(err.to_string(), "input file not specified.");
    }

    #[test]
    fn missing_file_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let err = driver()
            .run_single(Some(dir.path().join("nope.svg").as_path()), dir.path())
            .unwrap_err();
        assert_eq!(err.to_string(), "input file not found.");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn transform_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.svg");
        fs::write(&input, "<html/>").unwrap();

        let err = driver().run_single(Some(input.as_path()), dir.path()).unwrap_err();
        assert!(matches!(err, DriverError::Transform { .. }));
        assert!(!dir.path().join("emptySvg.tsx").exists());
    }
}
