use crate::error::{CopyError, CopyResult};
use calamine::Data;
use std::fmt;

//==============================================================================
// Cell values
//==============================================================================

/// A single cell value as read from, or written to, a workbook.
///
/// Formulas are never represented: raw files are opened values-only, so a
/// formula cell surfaces as its last cached result.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl CellValue {
    /// Blank for row-scanning purposes: absent, or text that is empty or
    /// whitespace only.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// True when the cell carries a value. Whitespace-only text still counts
    /// as a value; only absent cells and the empty string do not.
    pub fn has_value(&self) -> bool {
        match self {
            CellValue::Empty => false,
            CellValue::Text(s) => !s.is_empty(),
            _ => true,
        }
    }
}

impl From<&Data> for CellValue {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            // Serial date number, same as the cached value in the file
            Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
            Data::DateTimeIso(s) => CellValue::Text(s.clone()),
            Data::DurationIso(s) => CellValue::Text(s.clone()),
            // Error cells (#DIV/0! etc.) carry no usable value
            Data::Error(_) => CellValue::Empty,
        }
    }
}

//==============================================================================
// Coordinates
//==============================================================================

// .xlsx sheet bounds: row 1_048_576, column XFD
const MAX_ROW: u32 = 1_048_576;
const MAX_COL: u32 = 16_384;

/// A 1-indexed (row, column) coordinate, parsed from an A1-style reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: u32,
    pub col: u32,
}

impl CellRef {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Parse an A1-style reference like `B2` or `AA10`.
    pub fn parse(reference: &str) -> CopyResult<Self> {
        let trimmed = reference.trim();
        let letters_len = trimmed
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .count();
        let (letters, digits) = trimmed.split_at(letters_len);

        if letters.is_empty()
            || letters.len() > 3
            || digits.is_empty()
            || !digits.chars().all(|c| c.is_ascii_digit())
        {
            return Err(CopyError::CellRef(reference.to_string()));
        }

        let col = letters.chars().fold(0u32, |acc, c| {
            acc * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1)
        });
        let row: u32 = digits
            .parse()
            .map_err(|_| CopyError::CellRef(reference.to_string()))?;

        if row == 0 || row > MAX_ROW || col > MAX_COL {
            return Err(CopyError::CellRef(reference.to_string()));
        }

        Ok(Self { row, col })
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_letters(self.col), self.row)
    }
}

/// Convert a 1-indexed column number to letters (1 → A, 26 → Z, 27 → AA).
fn column_letters(col: u32) -> String {
    let mut result = String::new();
    let mut num = col - 1;

    loop {
        let remainder = num % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if num < 26 {
            break;
        }
        num = num / 26 - 1;
    }

    result
}

/// A rectangular range between two opposite corner references, normalized so
/// `start` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start: CellRef,
    pub end: CellRef,
}

impl CellRange {
    /// Parse a reference like `A1:C30`. The corners may be given in any order.
    pub fn parse(reference: &str) -> CopyResult<Self> {
        let (first, second) = reference
            .split_once(':')
            .ok_or_else(|| CopyError::CellRef(reference.to_string()))?;
        let a = CellRef::parse(first)?;
        let b = CellRef::parse(second)?;

        Ok(Self {
            start: CellRef::new(a.row.min(b.row), a.col.min(b.col)),
            end: CellRef::new(a.row.max(b.row), a.col.max(b.col)),
        })
    }

    pub fn height(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    pub fn width(&self) -> u32 {
        self.end.col - self.start.col + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_ref() {
        assert_eq!(CellRef::parse("A1").unwrap(), CellRef::new(1, 1));
        assert_eq!(CellRef::parse("B2").unwrap(), CellRef::new(2, 2));
        assert_eq!(CellRef::parse("Z10").unwrap(), CellRef::new(10, 26));
    }

    #[test]
    fn test_parse_multi_letter_columns() {
        assert_eq!(CellRef::parse("AA1").unwrap(), CellRef::new(1, 27));
        assert_eq!(CellRef::parse("AZ3").unwrap(), CellRef::new(3, 52));
        assert_eq!(CellRef::parse("XFD1").unwrap(), CellRef::new(1, 16_384));
    }

    #[test]
    fn test_parse_lowercase_and_whitespace() {
        assert_eq!(CellRef::parse("b2").unwrap(), CellRef::new(2, 2));
        assert_eq!(CellRef::parse("  C3 ").unwrap(), CellRef::new(3, 3));
    }

    #[test]
    fn test_parse_rejects_malformed_refs() {
        for bad in ["", "12", "AB", "A0", "A1B", "1A", "A-1", "ZZZZ1", "XFE1"] {
            assert!(CellRef::parse(bad).is_err(), "expected failure for {bad:?}");
        }
    }

    #[test]
    fn test_display_round_trip() {
        for reference in ["A1", "Z99", "AA10", "AB7", "BA1", "XFD1048576"] {
            let parsed = CellRef::parse(reference).unwrap();
            assert_eq!(parsed.to_string(), reference);
        }
    }

    #[test]
    fn test_range_parse_and_dimensions() {
        let range = CellRange::parse("A1:C3").unwrap();
        assert_eq!(range.start, CellRef::new(1, 1));
        assert_eq!(range.end, CellRef::new(3, 3));
        assert_eq!(range.height(), 3);
        assert_eq!(range.width(), 3);
    }

    #[test]
    fn test_range_normalizes_corners() {
        let range = CellRange::parse("C3:A1").unwrap();
        assert_eq!(range.start, CellRef::new(1, 1));
        assert_eq!(range.end, CellRef::new(3, 3));
    }

    #[test]
    fn test_range_rejects_single_cell() {
        assert!(CellRange::parse("A1").is_err());
        assert!(CellRange::parse("A1:").is_err());
        assert!(CellRange::parse(":B2").is_err());
    }

    #[test]
    fn test_cell_value_blankness() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("".to_string()).is_blank());
        assert!(CellValue::Text("   ".to_string()).is_blank());
        assert!(!CellValue::Text("x".to_string()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
        assert!(!CellValue::Bool(false).is_blank());
    }

    #[test]
    fn test_cell_value_has_value() {
        // Whitespace-only text is blank for row scanning but still a value
        // for column trimming.
        assert!(CellValue::Text("   ".to_string()).has_value());
        assert!(!CellValue::Text("".to_string()).has_value());
        assert!(!CellValue::Empty.has_value());
        assert!(CellValue::Number(0.0).has_value());
    }

    #[test]
    fn test_from_calamine_data() {
        assert_eq!(CellValue::from(&Data::Empty), CellValue::Empty);
        assert_eq!(CellValue::from(&Data::Int(3)), CellValue::Number(3.0));
        assert_eq!(CellValue::from(&Data::Float(1.5)), CellValue::Number(1.5));
        assert_eq!(CellValue::from(&Data::Bool(true)), CellValue::Bool(true));
        assert_eq!(
            CellValue::from(&Data::String("net".to_string())),
            CellValue::Text("net".to_string())
        );
    }
}
