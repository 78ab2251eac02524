//! # svgcomp
//!
//! Generates React Native SVG components from `.svg` files.
//!
//! The text transformation itself lives in `svgcomp-transform`; this crate is
//! the file-level layer around it: deriving component names, reading sources,
//! writing outputs without clobbering existing files, and moving processed
//! sources aside. See [`driver`].

pub mod driver;
pub mod error;

pub use driver::{BatchOptions, BatchReport, Driver, FileOutcome, SingleFileOutcome};
pub use error::DriverError;
