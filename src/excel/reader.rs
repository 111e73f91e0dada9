//! Raw workbook reading and table extraction.

use crate::config::{SourceConfig, SourceLocator};
use crate::error::{CopyError, CopyResult};
use crate::grid::Grid;
use crate::types::{CellRange, CellRef, CellValue};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read-only view of the raw fund workbook. Opened values-only: formula
/// cells surface their last cached result, never the formula text.
pub struct RawWorkbook {
    workbook: Xlsx<BufReader<File>>,
}

impl RawWorkbook {
    pub fn open<P: AsRef<Path>>(path: P) -> CopyResult<Self> {
        let workbook: Xlsx<_> = open_workbook(path)?;
        Ok(Self { workbook })
    }

    /// Extract the exposure table described by `source`, trimmed of blank
    /// padding.
    ///
    /// Range mode reads the exact rectangle; scan mode reads a
    /// `max_rows x max_cols` block from the start cell. Cells beyond the
    /// sheet's populated area read as empty in both modes, so an oversized
    /// locator is harmless.
    pub fn extract(&mut self, source: &SourceConfig) -> CopyResult<Grid> {
        let range = self.worksheet(&source.sheet)?;

        let rows = match &source.locator {
            SourceLocator::Range(cells) => read_range(&range, cells),
            SourceLocator::Scan {
                start,
                max_rows,
                max_cols,
            } => read_block(&range, *start, *max_rows, *max_cols),
        };

        Ok(Grid::from_rows(rows).trimmed(source.stop_at_blank_rows))
    }

    fn worksheet(&mut self, sheet: &str) -> CopyResult<Range<Data>> {
        if !self.workbook.sheet_names().iter().any(|name| name == sheet) {
            return Err(CopyError::SheetNotFound {
                sheet: sheet.to_string(),
                file: "raw file".to_string(),
            });
        }
        Ok(self.workbook.worksheet_range(sheet)?)
    }
}

fn read_range(range: &Range<Data>, cells: &CellRange) -> Vec<Vec<CellValue>> {
    read_block(range, cells.start, cells.height(), cells.width())
}

/// Read a `rows x cols` block anchored at `start` (1-indexed), cell by cell.
fn read_block(range: &Range<Data>, start: CellRef, rows: u32, cols: u32) -> Vec<Vec<CellValue>> {
    let (row0, col0) = (start.row - 1, start.col - 1);

    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    range
                        .get_value((row0 + r, col0 + c))
                        .map(CellValue::from)
                        .unwrap_or(CellValue::Empty)
                })
                .collect()
        })
        .collect()
}
