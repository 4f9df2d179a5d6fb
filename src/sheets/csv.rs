//! CSV-backed sheet store: one `<Sheet>.csv` per entity kind under a
//! single directory, header record first.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::sheets::schema::SheetSchema;
use crate::sheets::{Sheet, SheetError, SheetStore};

pub struct CsvSheetStore {
    dir: PathBuf,
}

impl CsvSheetStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn sheet_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.csv"))
    }

    fn write_sheet(&self, name: &str, headers: &[String], rows: &[Vec<String>]) -> Result<(), SheetError> {
        let path = self.sheet_path(name);
        let tmp = path.with_extension("csv.tmp");
        {
            let mut writer = csv::Writer::from_path(&tmp)?;
            writer.write_record(headers)?;
            for row in rows {
                writer.write_record(row)?;
            }
            writer.flush().map_err(SheetError::Io)?;
        }
        fs::rename(&tmp, &path).map_err(SheetError::Io)
    }
}

impl SheetStore for CsvSheetStore {
    fn read(&self, name: &str) -> Result<Option<Sheet>, SheetError> {
        let path = self.sheet_path(name);
        let mut reader = match csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
        {
            Ok(reader) => reader,
            Err(e) => {
                if let csv::ErrorKind::Io(io_err) = e.kind()
                    && io_err.kind() == io::ErrorKind::NotFound
                {
                    return Ok(None);
                }
                return Err(e.into());
            }
        };

        let mut records = reader.records();
        let headers = match records.next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => return Ok(Some(Sheet::default())),
        };
        let mut rows = Vec::new();
        for record in records {
            rows.push(record?.iter().map(str::to_string).collect());
        }
        Ok(Some(Sheet { headers, rows }))
    }

    fn overwrite(&mut self, name: &str, rows: &[Vec<String>]) -> Result<(), SheetError> {
        // A sheet nobody created is skipped, matching the remote
        // store's behavior of ignoring pushes to unknown sheets.
        let Some(sheet) = self.read(name)? else {
            log::debug!("Sheet {name} does not exist, skipping overwrite");
            return Ok(());
        };
        self.write_sheet(name, &sheet.headers, rows)
    }

    fn ensure_sheets(&mut self, schemas: &[&'static SheetSchema]) -> Result<(), SheetError> {
        fs::create_dir_all(&self.dir).map_err(SheetError::Io)?;
        for schema in schemas {
            if !self.sheet_path(schema.name).exists() {
                self.write_sheet(schema.name, &schema.headers(), &[])?;
            }
        }
        Ok(())
    }
}
