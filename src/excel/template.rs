//! In-memory value model of the template workbook.

use crate::error::CopyResult;
use crate::types::CellValue;
use calamine::{open_workbook, Reader, Xlsx};
use rust_xlsxwriter::{Workbook, Worksheet};
use std::path::Path;

/// A value-only copy of the template workbook, mutable in memory.
///
/// Loaded via calamine and persisted via rust_xlsxwriter, so only cell
/// values survive the round trip; formatting, formulas and workbook metadata
/// are not carried over. Sheet order is preserved.
pub struct TemplateWorkbook {
    sheets: Vec<SheetBuffer>,
}

impl TemplateWorkbook {
    pub fn open<P: AsRef<Path>>(path: P) -> CopyResult<Self> {
        let mut workbook: Xlsx<_> = open_workbook(path)?;

        let mut sheets = Vec::new();
        for name in workbook.sheet_names().to_vec() {
            let range = workbook.worksheet_range(&name)?;
            let mut sheet = SheetBuffer::new(name);

            // calamine ranges are anchored at the first used cell; shift
            // back to absolute sheet coordinates.
            let (row0, col0) = range.start().unwrap_or((0, 0));
            for (r, c, value) in range.cells() {
                let cell = CellValue::from(value);
                if cell != CellValue::Empty {
                    sheet.set(row0 + r as u32 + 1, col0 + c as u32 + 1, cell);
                }
            }
            sheets.push(sheet);
        }

        Ok(Self { sheets })
    }

    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut SheetBuffer> {
        self.sheets.iter_mut().find(|sheet| sheet.name == name)
    }

    /// Persist every sheet to `path`. Empty cells are simply not written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> CopyResult<()> {
        let mut workbook = Workbook::new();

        for sheet in &self.sheets {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(&sheet.name)?;

            for (r, row) in sheet.cells.iter().enumerate() {
                for (c, value) in row.iter().enumerate() {
                    write_cell(worksheet, r as u32, c as u16, value)?;
                }
            }
        }

        workbook.save(path.as_ref())?;
        Ok(())
    }
}

/// One sheet's cells, row-major, grown on demand.
pub struct SheetBuffer {
    name: String,
    cells: Vec<Vec<CellValue>>,
}

impl SheetBuffer {
    fn new(name: String) -> Self {
        Self {
            name,
            cells: Vec::new(),
        }
    }

    /// Set a cell at 1-indexed coordinates, growing the buffer as needed.
    /// Setting `Empty` blanks the cell.
    pub fn set(&mut self, row: u32, col: u32, value: CellValue) {
        let (r, c) = ((row - 1) as usize, (col - 1) as usize);
        if self.cells.len() <= r {
            self.cells.resize_with(r + 1, Vec::new);
        }
        let cells_row = &mut self.cells[r];
        if cells_row.len() <= c {
            cells_row.resize(c + 1, CellValue::Empty);
        }
        cells_row[c] = value;
    }
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, value: &CellValue) -> CopyResult<()> {
    match value {
        CellValue::Empty => {}
        CellValue::Text(s) => {
            worksheet.write_string(row, col, s)?;
        }
        CellValue::Number(n) => {
            worksheet.write_number(row, col, *n)?;
        }
        CellValue::Bool(b) => {
            worksheet.write_boolean(row, col, *b)?;
        }
    }
    Ok(())
}
