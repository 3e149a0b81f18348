use std::path::{Path, PathBuf};

use umya_spreadsheet::{reader::xlsx, Spreadsheet, Worksheet};

use crate::utils::app_error::AppError;

/// Column holding the raw addresses. Output columns follow it directly.
pub const SOURCE_COLUMN: u32 = 0;

pub const OUTPUT_HEADERS: [&str; 5] = ["Address", "City", "State", "Country", "Zip"];

/// Row and column access for the batch driver, 0-based with row 0 holding
/// the headers.
pub trait SheetRows {
    /// Index of the last row, or 0 when the sheet has no data rows.
    fn last_row(&self) -> u32;

    /// Raw address text of `row`; empty when the cell is blank or missing.
    fn source_address(&self, row: u32) -> String;

    fn write_cell(&mut self, row: u32, col: u32, value: &str);
}

// umya coordinates are (column, row), both 1-based.
impl SheetRows for Worksheet {
    fn last_row(&self) -> u32 {
        self.get_highest_row().saturating_sub(1)
    }

    fn source_address(&self, row: u32) -> String {
        self.get_value((SOURCE_COLUMN + 1, row + 1))
    }

    fn write_cell(&mut self, row: u32, col: u32, value: &str) {
        self.get_cell_mut((col + 1, row + 1)).set_value_string(value);
    }
}

/// An xlsx workbook opened from disk and saved back to the same path.
pub struct AddressSheet {
    book: Spreadsheet,
    path: PathBuf,
}

impl AddressSheet {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let book = xlsx::read(&path).map_err(|source| AppError::Open {
            path: path.clone(),
            source,
        })?;

        Ok(Self { book, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn first_sheet_mut(&mut self) -> Result<&mut Worksheet, AppError> {
        let path = &self.path;
        self.book
            .get_sheet_mut(&0)
            .ok_or_else(|| AppError::NoSheet(path.clone()))
    }

    /// Overwrites the file the workbook was opened from.
    pub fn save(&self) -> Result<(), AppError> {
        umya_spreadsheet::writer::xlsx::write(&self.book, &self.path).map_err(|source| {
            AppError::Save {
                path: self.path.clone(),
                source,
            }
        })
    }
}
