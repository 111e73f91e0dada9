//! The extract-then-place pipeline.

use crate::config::{FundProfile, TargetConfig};
use crate::error::{CopyError, CopyResult};
use crate::excel::{RawWorkbook, TemplateWorkbook};
use crate::grid::Grid;
use crate::types::CellValue;
use std::path::Path;

/// Extract the trimmed exposure table for `profile` from the raw workbook.
///
/// This is the shared first half of the pipeline; the dry-run preview stops
/// here.
pub fn load_table(raw_path: &Path, profile: &FundProfile) -> CopyResult<Grid> {
    let mut raw = RawWorkbook::open(raw_path)?;
    raw.extract(&profile.source)
}

/// Copy the exposure table for `profile` from `raw_path` into a copy of
/// `template_path`, persisted as `output_path`.
///
/// The template file itself is never modified. The output is written only
/// after the whole table has been extracted and placed in memory, so a
/// failure anywhere in the pipeline leaves the output path untouched.
pub fn copy_exposure(
    raw_path: &Path,
    template_path: &Path,
    output_path: &Path,
    profile: &FundProfile,
) -> CopyResult<()> {
    let table = load_table(raw_path, profile)?;

    let mut template = TemplateWorkbook::open(template_path)?;
    place_table(&mut template, &profile.target, &table)?;

    template.save(output_path)
}

/// Clear the configured block, then write the grid.
///
/// The clear/write ordering lives here and nowhere else, so every caller
/// gets identical placement behavior. Clearing only happens when both
/// dimensions are positive; the write touches exactly the cells the grid
/// spans, empty values included, and nothing outside them.
pub fn place_table(
    template: &mut TemplateWorkbook,
    target: &TargetConfig,
    table: &Grid,
) -> CopyResult<()> {
    let sheet = template
        .sheet_mut(&target.sheet)
        .ok_or_else(|| CopyError::SheetNotFound {
            sheet: target.sheet.clone(),
            file: "template".to_string(),
        })?;
    let start = target.start_cell;

    if target.clear_rows > 0 && target.clear_cols > 0 {
        for r in 0..target.clear_rows {
            for c in 0..target.clear_cols {
                sheet.set(start.row + r, start.col + c, CellValue::Empty);
            }
        }
    }

    for (r, row) in table.rows().iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            sheet.set(start.row + r as u32, start.col + c as u32, value.clone());
        }
    }

    Ok(())
}
