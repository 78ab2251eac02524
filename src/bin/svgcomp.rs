//! Command-line interface for svgcomp
//! Turns SVG files into React Native SVG components.
//!
//! Usage:
//!   svgcomp `<file>` [--out `<dir>`]                           - Convert one file to `<name>Svg.tsx`
//!   svgcomp --in `<dir>` --out `<dir>` [--move `<dir>`]        - Convert every `*.svg` in a directory

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use svgcomp::{BatchOptions, BatchReport, Driver, DriverError, FileOutcome};
use svgcomp_config::{Loader, SvgcompConfig};

fn main() -> ExitCode {
    let matches = Command::new("svgcomp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate React Native SVG components from svg files")
        .arg(
            Arg::new("path")
                .help("Path to a single svg file")
                .index(1)
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("in"),
        )
        .arg(
            Arg::new("in")
                .long("in")
                .value_name("DIR")
                .help("Directory with the svg files to convert (batch mode)")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .value_name("DIR")
                .help("Directory for the generated components")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("move")
                .long("move")
                .value_name("DIR")
                .help("Move successfully converted svg files here (batch mode)")
                .requires("in")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("TOML file layered over the defaults")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("indent-policy")
                .long("indent-policy")
                .help("When opening tags indent the following lines")
                .value_parser(["nested", "deferred"]),
        )
        .arg(
            Arg::new("tag-case")
                .long("tag-case")
                .help("Case of tag names after the first letter")
                .value_parser(["preserve", "lowercase"]),
        )
        .arg(
            Arg::new("indent-width")
                .long("indent-width")
                .help("Spaces per indentation level")
                .value_parser(value_parser!(u8)),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every stage to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let driver = Driver::new(&config);

    match matches.get_one::<PathBuf>("in") {
        Some(input_dir) => handle_batch_command(&driver, input_dir, &matches),
        None => handle_single_command(&driver, &matches),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Defaults, then `./svgcomp.toml`, then `--config`, then flags.
fn load_config(matches: &ArgMatches) -> Result<SvgcompConfig, DriverError> {
    let mut loader = Loader::new().with_optional_file("svgcomp.toml");
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    if let Some(policy) = matches.get_one::<String>("indent-policy") {
        loader = loader.set_override("transform.indent_policy", policy.as_str())?;
    }
    if let Some(case) = matches.get_one::<String>("tag-case") {
        loader = loader.set_override("transform.tag_case", case.as_str())?;
    }
    if let Some(width) = matches.get_one::<u8>("indent-width") {
        loader = loader.set_override("transform.indent_width", i64::from(*width))?;
    }
    Ok(loader.build()?)
}

/// Handle single-file mode. Problems are printed but never change the exit code.
fn handle_single_command(driver: &Driver, matches: &ArgMatches) -> ExitCode {
    let input = matches.get_one::<PathBuf>("path").map(PathBuf::as_path);
    let out_dir = matches
        .get_one::<PathBuf>("out")
        .map(PathBuf::as_path)
        .unwrap_or(Path::new("."));

    match driver.run_single(input, out_dir) {
        Ok(outcome) => println!("{}", outcome.component),
        Err(e) => println!("Error: {}", e),
    }
    ExitCode::SUCCESS
}

/// Handle batch mode. Only missing directories produce a failing exit code.
fn handle_batch_command(driver: &Driver, input_dir: &Path, matches: &ArgMatches) -> ExitCode {
    let Some(output_dir) = matches.get_one::<PathBuf>("out") else {
        println!("Error: {}", DriverError::OutputDirNotSpecified);
        return ExitCode::FAILURE;
    };
    let options = BatchOptions {
        input_dir: input_dir.to_path_buf(),
        output_dir: output_dir.clone(),
        move_dir: matches.get_one::<PathBuf>("move").cloned(),
    };

    match driver.run_batch(&options) {
        Ok(report) => {
            print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_report(report: &BatchReport) {
    if let Some(dir) = &report.move_dir_missing {
        println!(
            "Warning: move directory not found, sources left in place: {}",
            dir.display()
        );
    }

    for outcome in &report.outcomes {
        match outcome {
            FileOutcome::Created {
                output, moved_to, ..
            } => {
                println!("Created {}", output.display());
                if let Some(target) = moved_to {
                    println!("Moved {} to {}", outcome.source().display(), target.display());
                }
            }
            FileOutcome::MoveFailed { output, error, .. } => {
                println!("Created {}", output.display());
                println!("Error: {}: {}", file_label(outcome.source()), error);
            }
            FileOutcome::Failed { error, .. } => {
                println!("Error: {}: {}", file_label(outcome.source()), error);
            }
        }
    }

    println!("Done: {} files processed.", report.processed());
}

fn file_label(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
