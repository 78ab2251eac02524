use super::Driver;
use crate::error::DriverError;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Directories for a batch run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Where consumed sources go; ignored when the directory does not exist
    pub move_dir: Option<PathBuf>,
}

/// Result of processing one source file.
#[derive(Debug)]
pub enum FileOutcome {
    Created {
        source: PathBuf,
        output: PathBuf,
        moved_to: Option<PathBuf>,
    },
    /// The component was written but the source could not be moved
    MoveFailed {
        source: PathBuf,
        output: PathBuf,
        error: DriverError,
    },
    Failed {
        source: PathBuf,
        error: DriverError,
    },
}

impl FileOutcome {
    pub fn source(&self) -> &Path {
        match self {
            FileOutcome::Created { source, .. }
            | FileOutcome::MoveFailed { source, .. }
            | FileOutcome::Failed { source, .. } => source,
        }
    }

    /// Whether a component file was written for this source.
    pub fn is_processed(&self) -> bool {
        !matches!(self, FileOutcome::Failed { .. })
    }
}

/// Everything that happened during one batch run, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
    /// Set when a move directory was requested but does not exist
    pub move_dir_missing: Option<PathBuf>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_processed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.processed()
    }
}

impl Driver {
    /// Convert every `*.svg` directly inside `options.input_dir`.
    ///
    /// Only missing input/output directories fail the run as a whole; every
    /// per-file problem is recorded in the report and processing continues.
    pub fn run_batch(&self, options: &BatchOptions) -> Result<BatchReport, DriverError> {
        if !options.input_dir.is_dir() {
            return Err(DriverError::InputDirNotFound(options.input_dir.clone()));
        }
        if !options.output_dir.is_dir() {
            return Err(DriverError::OutputDirNotFound(options.output_dir.clone()));
        }

        let mut report = BatchReport::default();
        let move_dir = match &options.move_dir {
            Some(dir) if dir.is_dir() => Some(dir.as_path()),
            Some(dir) => {
                tracing::warn!(dir = %dir.display(), "move directory not found, sources stay in place");
                report.move_dir_missing = Some(dir.clone());
                None
            }
            None => None,
        };

        for source in discover_svg_files(&options.input_dir)? {
            let outcome = self.process_file(&source, &options.output_dir, move_dir);
            if let FileOutcome::Failed { error, .. } = &outcome {
                tracing::warn!(source = %source.display(), %error, "skipped");
            }
            report.outcomes.push(outcome);
        }

        tracing::info!(processed = report.processed(), failed = report.failed(), "batch finished");
        Ok(report)
    }

    fn process_file(&self, source: &Path, out_dir: &Path, move_dir: Option<&Path>) -> FileOutcome {
        let output = match self.write_component(source, out_dir) {
            Ok(output) => output,
            Err(error) => {
                return FileOutcome::Failed {
                    source: source.to_path_buf(),
                    error,
                }
            }
        };

        let Some(move_dir) = move_dir else {
            return FileOutcome::Created {
                source: source.to_path_buf(),
                output,
                moved_to: None,
            };
        };

        match move_source(source, move_dir) {
            Ok(moved_to) => FileOutcome::Created {
                source: source.to_path_buf(),
                output,
                moved_to: Some(moved_to),
            },
            Err(error) => FileOutcome::MoveFailed {
                source: source.to_path_buf(),
                output,
                error,
            },
        }
    }

    fn write_component(&self, source: &Path, out_dir: &Path) -> Result<PathBuf, DriverError> {
        let (name, component) = self.generate(source)?;
        let output = out_dir.join(self.output_file_name(&name, ""));

        // create_new refuses to clobber an existing component
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&output)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => DriverError::OutputExists(output.clone()),
                _ => DriverError::io(&output, e),
            })?;
        file.write_all(component.as_bytes())
            .map_err(|e| DriverError::io(&output, e))?;

        tracing::info!(source = %source.display(), output = %output.display(), "created component");
        Ok(output)
    }
}

/// `*.svg` files directly inside `dir`, sorted by file name.
fn discover_svg_files(dir: &Path) -> Result<Vec<PathBuf>, DriverError> {
    let entries = fs::read_dir(dir).map_err(|e| DriverError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| DriverError::io(dir, e))?.path();
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn move_source(source: &Path, move_dir: &Path) -> Result<PathBuf, DriverError> {
    let file_name = source
        .file_name()
        .ok_or_else(|| DriverError::InputNotFound(source.to_path_buf()))?;
    let target = move_dir.join(file_name);
    if target.exists() {
        return Err(DriverError::OutputExists(target));
    }

    match fs::rename(source, &target) {
        Ok(()) => {}
        Err(e) if copies_instead_of_rename(&e) => {
            fs::copy(source, &target).map_err(|e| DriverError::io(&target, e))?;
            fs::remove_file(source).map_err(|e| DriverError::io(source, e))?;
        }
        Err(e) => return Err(DriverError::io(source, e)),
    }
    tracing::debug!(from = %source.display(), to = %target.display(), "moved source");
    Ok(target)
}

/// Only a move across filesystems falls back to copy + remove.
fn copies_instead_of_rename(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::CrossesDevices
}
