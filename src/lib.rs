//! Fundcopy - copy fund exposure tables into report templates
//!
//! Each fund profile in a YAML config describes where the exposure table
//! sits in that fund's raw workbook (a fixed range, or a scan from a start
//! cell) and where it is pasted in the template (a start cell, optionally
//! after clearing a block of stale values). The pipeline extracts the table,
//! trims blank padding, places it, and writes a fresh output file; the
//! template on disk is never modified.
//!
//! Cell values only: formatting, formulas and merged cells are not
//! preserved.
//!
//! # Example
//!
//! ```no_run
//! use fundcopy::config::ProfileRegistry;
//! use fundcopy::copy::copy_exposure;
//! use std::path::Path;
//!
//! let registry = ProfileRegistry::load(Path::new("config/fund_profiles.yaml"))?;
//! let profile = registry.get("berry_street")?;
//!
//! copy_exposure(
//!     Path::new("raw.xlsx"),
//!     Path::new("template.xlsx"),
//!     Path::new("output.xlsx"),
//!     profile,
//! )?;
//! # Ok::<(), fundcopy::error::CopyError>(())
//! ```

pub mod cli;
pub mod config;
pub mod copy;
pub mod error;
pub mod excel;
pub mod grid;
pub mod types;

// Re-export commonly used types
pub use config::{FundProfile, ProfileRegistry, SourceLocator};
pub use error::{CopyError, CopyResult};
pub use grid::Grid;
pub use types::{CellRange, CellRef, CellValue};
