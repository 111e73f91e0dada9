//! The in-memory exposure table and its trimming rules.
//!
//! A [`Grid`] is produced once by extraction, trimmed, handed to placement,
//! and discarded. Trimming is the only non-trivial logic in the whole
//! pipeline: drop the blank padding a raw fund file carries around the real
//! table, without touching anything inside it.

use crate::types::CellValue;

/// A rectangular block of cell values. After [`Grid::trimmed`] every row has
/// the same width and the grid never ends in blank rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Apply blank-row truncation followed by blank-column trimming.
    ///
    /// Rows are scanned top to bottom. Fully blank rows (every cell absent or
    /// whitespace-only text) are tolerated in runs of up to
    /// `blank_row_tolerance`; a run inside the table is kept once a non-blank
    /// row follows it. The first run longer than the tolerance ends the scan:
    /// that run and everything below it is discarded, even later non-blank
    /// rows. Fund files routinely put footnotes a screenful below the table,
    /// and those must not be copied.
    ///
    /// Columns are then cut to the last one holding a value anywhere in the
    /// kept rows. A grid with no values at all trims to an empty grid.
    pub fn trimmed(self, blank_row_tolerance: usize) -> Grid {
        let rows = strip_blank_rows(self.rows, blank_row_tolerance);
        Grid {
            rows: trim_blank_cols(rows),
        }
    }
}

fn strip_blank_rows(
    rows: Vec<Vec<CellValue>>,
    allowed_consecutive: usize,
) -> Vec<Vec<CellValue>> {
    let mut kept: Vec<Vec<CellValue>> = Vec::new();
    let mut blank_run: Vec<Vec<CellValue>> = Vec::new();

    for row in rows {
        if row.iter().all(CellValue::is_blank) {
            blank_run.push(row);
            if blank_run.len() > allowed_consecutive {
                // Clearly past the real table; anything further down is
                // discarded by policy, real data included.
                break;
            }
        } else {
            kept.append(&mut blank_run);
            kept.push(row);
        }
    }

    // A tolerated run at the very end never met another data row, so it is
    // trailing padding, not table interior.
    kept
}

fn trim_blank_cols(mut rows: Vec<Vec<CellValue>>) -> Vec<Vec<CellValue>> {
    let width = rows
        .iter()
        .flat_map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| cell.has_value())
                .map(|(idx, _)| idx + 1)
        })
        .max()
        .unwrap_or(0);

    if width == 0 {
        return Vec::new();
    }

    for row in &mut rows {
        row.resize(width, CellValue::Empty);
    }
    rows
}
