//! Remote tabular store: one sheet per entity kind, header row first,
//! full-collection overwrite as the only write primitive.

use thiserror::Error;

pub mod codec;
pub mod csv;
pub mod lock;
pub mod schema;

#[cfg(feature = "test-mocks")]
pub mod mock;

/// A sheet snapshot: the header row plus every data row below it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sheet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Transport contract for the tabular store. Both operations are
/// whole-sheet; there is no per-row addressing.
pub trait SheetStore {
    /// Reads a sheet, or `None` when no sheet with that name exists.
    fn read(&self, name: &str) -> Result<Option<Sheet>, SheetError>;

    /// Clears all data rows of an existing sheet and writes the given
    /// rows below the header. A missing sheet is a silent no-op, and an
    /// empty `rows` leaves the sheet with zero data rows.
    fn overwrite(&mut self, name: &str, rows: &[Vec<String>]) -> Result<(), SheetError>;

    /// Creates any missing sheets with their declared header rows.
    fn ensure_sheets(&mut self, schemas: &[&'static schema::SheetSchema]) -> Result<(), SheetError>;
}

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Row mapping error: {0}")]
    Decode(String),

    #[error("Could not acquire the sheet lock within {0:?}")]
    LockTimeout(std::time::Duration),
}
