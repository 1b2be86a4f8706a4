//! Workbook: ordered worksheets plus defined names

use crate::error::{Error, Result};
use crate::named_range::{NamedRange, NamedRangeCollection};
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// Characters a sheet name may not contain
const FORBIDDEN_SHEET_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// An in-memory spreadsheet document
///
/// Sheets keep their insertion order; their names are unique ignoring case.
#[derive(Debug)]
pub struct Workbook {
    worksheets: Vec<Worksheet>,
    named_ranges: NamedRangeCollection,
}

impl Workbook {
    /// A workbook with a single sheet named "Sheet1"
    pub fn new() -> Self {
        Self {
            worksheets: vec![Worksheet::new("Sheet1")],
            named_ranges: NamedRangeCollection::new(),
        }
    }

    /// A workbook with no sheets
    pub fn empty() -> Self {
        Self {
            worksheets: Vec::new(),
            named_ranges: NamedRangeCollection::new(),
        }
    }

    /// Number of sheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// True when there are no sheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Sheet at `index`
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Sheet at `index`, mutably
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Sheet named exactly `name`
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.sheet_index(name).and_then(|i| self.worksheets.get(i))
    }

    /// Position of the sheet named exactly `name`
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// All sheets in order
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Append an empty sheet; returns its index
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.check_sheet_name(name, None)?;
        self.worksheets.push(Worksheet::new(name));
        Ok(self.worksheets.len() - 1)
    }

    /// Rename the sheet at `index`
    ///
    /// A sheet may take its own name in a different case.
    pub fn rename_worksheet(&mut self, index: usize, new_name: &str) -> Result<()> {
        self.check_index(index)?;
        self.check_sheet_name(new_name, Some(index))?;
        if let Some(ws) = self.worksheets.get_mut(index) {
            ws.set_name(new_name);
        }
        Ok(())
    }

    /// Add a defined name
    pub fn define_name(&mut self, range: NamedRange) -> Result<()> {
        self.named_ranges.define(range)
    }

    /// Defined names
    pub fn named_ranges(&self) -> &NamedRangeCollection {
        &self.named_ranges
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.worksheets.len() {
            Ok(())
        } else {
            Err(Error::SheetOutOfBounds(index, self.worksheets.len()))
        }
    }

    fn check_sheet_name(&self, name: &str, renaming: Option<usize>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "'{}' is longer than {} characters",
                name, MAX_SHEET_NAME_LEN
            )));
        }
        if let Some(c) = name.chars().find(|c| FORBIDDEN_SHEET_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "'{}' contains '{}'",
                name, c
            )));
        }

        let lower = name.to_lowercase();
        let taken = self
            .worksheets
            .iter()
            .enumerate()
            .any(|(i, ws)| Some(i) != renaming && ws.name().to_lowercase() == lower);
        if taken {
            return Err(Error::DuplicateSheetName(name.into()));
        }
        Ok(())
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(wb.worksheet(0).map(|ws| ws.name()), Some("Sheet1"));
        assert!(Workbook::empty().is_empty());
    }

    #[test]
    fn test_add_and_find() {
        let mut wb = Workbook::new();
        assert_eq!(wb.add_worksheet_with_name("Data").unwrap(), 1);
        assert_eq!(wb.sheet_index("Data"), Some(1));
        assert_eq!(wb.sheet_index("data"), None);
        assert!(wb.worksheet_by_name("Data").is_some());
    }

    #[test]
    fn test_sheet_name_rules() {
        let mut wb = Workbook::new();

        assert_eq!(
            wb.add_worksheet_with_name("SHEET1"),
            Err(Error::DuplicateSheetName("SHEET1".into()))
        );
        for bad in ["", "a:b", "a\\b", "a/b", "a?b", "a*b", "[a]"] {
            assert!(
                matches!(wb.add_worksheet_with_name(bad), Err(Error::InvalidSheetName(_))),
                "{:?} should be rejected",
                bad
            );
        }
        assert!(wb.add_worksheet_with_name(&"x".repeat(MAX_SHEET_NAME_LEN)).is_ok());
        assert!(wb
            .add_worksheet_with_name(&"y".repeat(MAX_SHEET_NAME_LEN + 1))
            .is_err());
    }

    #[test]
    fn test_rename() {
        let mut wb = Workbook::new();
        wb.add_worksheet_with_name("Data").unwrap();

        wb.rename_worksheet(0, "SHEET1").unwrap();
        assert_eq!(wb.worksheet(0).unwrap().name(), "SHEET1");

        assert!(wb.rename_worksheet(0, "data").is_err());
        assert_eq!(
            wb.rename_worksheet(5, "X"),
            Err(Error::SheetOutOfBounds(5, 2))
        );
    }

    #[test]
    fn test_define_name() {
        let mut wb = Workbook::new();
        wb.define_name(NamedRange::new("Rate", "'Sheet1'!$B$1"))
            .unwrap();

        assert!(wb.named_ranges().get("RATE").is_some());
        assert!(wb.define_name(NamedRange::new("rate", "0")).is_err());
        assert!(wb.define_name(NamedRange::new("B1", "0")).is_err());
        assert_eq!(wb.named_ranges().len(), 1);
    }
}
