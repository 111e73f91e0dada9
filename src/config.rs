//! Fund profile configuration.
//!
//! Profiles live in a YAML document mapping fund names to a source locator
//! (where the exposure table sits in the raw file) and a target locator
//! (where it lands in the template). The raw serde shape is validated into a
//! typed model at load time; in particular the `range` / `start_cell` choice
//! becomes a [`SourceLocator`] variant, so "both set" and "neither set" are
//! unrepresentable after loading.
//!
//! ```yaml
//! funds:
//!   berry_street:
//!     source:
//!       sheet: Exposures
//!       start_cell: B4
//!       stop_at_blank_rows: 2
//!     target:
//!       sheet: Data
//!       start_cell: B2
//!       clear_rows: 200
//!       clear_cols: 20
//! ```

use crate::error::{CopyError, CopyResult};
use crate::types::{CellRange, CellRef};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

fn default_stop_at_blank_rows() -> usize {
    2
}

fn default_max_rows() -> u32 {
    200
}

fn default_max_cols() -> u32 {
    50
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(default)]
    funds: HashMap<String, RawProfile>,
}

#[derive(Debug, Deserialize)]
struct RawProfile {
    source: Option<RawSource>,
    target: Option<RawTarget>,
}

#[derive(Debug, Deserialize)]
struct RawSource {
    sheet: String,
    range: Option<String>,
    start_cell: Option<String>,
    #[serde(default = "default_stop_at_blank_rows")]
    stop_at_blank_rows: usize,
    #[serde(default = "default_max_rows")]
    max_rows: u32,
    #[serde(default = "default_max_cols")]
    max_cols: u32,
}

#[derive(Debug, Deserialize)]
struct RawTarget {
    sheet: String,
    start_cell: String,
    #[serde(default)]
    clear_rows: u32,
    #[serde(default)]
    clear_cols: u32,
}

/// Where the exposure table sits in the raw file.
#[derive(Debug, Clone)]
pub enum SourceLocator {
    /// A fixed rectangle, e.g. `A1:C30`.
    Range(CellRange),
    /// An open-ended scan from a start cell, bounded by `max_rows` and
    /// `max_cols`.
    Scan {
        start: CellRef,
        max_rows: u32,
        max_cols: u32,
    },
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub sheet: String,
    pub locator: SourceLocator,
    /// Consecutive fully blank rows tolerated inside the table before the
    /// scan gives up.
    pub stop_at_blank_rows: usize,
}

#[derive(Debug, Clone)]
pub struct TargetConfig {
    pub sheet: String,
    pub start_cell: CellRef,
    pub clear_rows: u32,
    pub clear_cols: u32,
}

/// One fund's copy instructions, immutable once loaded.
#[derive(Debug, Clone)]
pub struct FundProfile {
    pub name: String,
    pub source: SourceConfig,
    pub target: TargetConfig,
}

/// All fund profiles from one config file, keyed by case-sensitive name.
#[derive(Debug)]
pub struct ProfileRegistry {
    profiles: HashMap<String, FundProfile>,
}

impl ProfileRegistry {
    /// Load and validate a YAML config file.
    ///
    /// Structural problems (missing sections, ambiguous or absent locator,
    /// malformed cell references, zero profiles) are surfaced here, not at
    /// copy time.
    pub fn load(path: &Path) -> CopyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    fn from_yaml(content: &str) -> CopyResult<Self> {
        let raw: RawConfig = serde_yaml::from_str(content)?;

        let mut profiles = HashMap::new();
        for (name, raw_profile) in raw.funds {
            let profile = build_profile(&name, raw_profile)?;
            profiles.insert(name, profile);
        }

        if profiles.is_empty() {
            return Err(CopyError::Config(
                "No fund profiles found in config file".to_string(),
            ));
        }

        Ok(Self { profiles })
    }

    pub fn get(&self, fund: &str) -> CopyResult<&FundProfile> {
        self.profiles
            .get(fund)
            .ok_or_else(|| CopyError::Config(format!("Fund profile '{fund}' not found")))
    }

    /// Profile names, sorted for stable listing.
    pub fn available(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn build_profile(name: &str, raw: RawProfile) -> CopyResult<FundProfile> {
    let source = raw.source.ok_or_else(|| {
        CopyError::Config(format!("Profile '{name}' is missing required section 'source'"))
    })?;
    let target = raw.target.ok_or_else(|| {
        CopyError::Config(format!("Profile '{name}' is missing required section 'target'"))
    })?;

    let locator = match (source.range, source.start_cell) {
        (Some(_), Some(_)) => {
            return Err(CopyError::Config(format!(
                "Profile '{name}' should define either 'range' or 'start_cell', not both"
            )));
        }
        (None, None) => {
            return Err(CopyError::Config(format!(
                "Profile '{name}' must define either 'range' or 'start_cell' in source config"
            )));
        }
        (Some(range), None) => SourceLocator::Range(CellRange::parse(&range)?),
        (None, Some(start)) => SourceLocator::Scan {
            start: CellRef::parse(&start)?,
            max_rows: source.max_rows,
            max_cols: source.max_cols,
        },
    };

    Ok(FundProfile {
        name: name.to_string(),
        source: SourceConfig {
            sheet: source.sheet,
            locator,
            stop_at_blank_rows: source.stop_at_blank_rows,
        },
        target: TargetConfig {
            sheet: target.sheet,
            start_cell: CellRef::parse(&target.start_cell)?,
            clear_rows: target.clear_rows,
            clear_cols: target.clear_cols,
        },
    })
}
