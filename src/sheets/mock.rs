//! Mock sheet store for isolating the sync service in tests.

use mockall::mock;

use crate::sheets::schema::SheetSchema;
use crate::sheets::{Sheet, SheetError, SheetStore};

mock! {
    pub SheetStore {}

    impl SheetStore for SheetStore {
        fn read(&self, name: &str) -> Result<Option<Sheet>, SheetError>;
        fn overwrite(&mut self, name: &str, rows: &[Vec<String>]) -> Result<(), SheetError>;
        fn ensure_sheets(&mut self, schemas: &[&'static SheetSchema]) -> Result<(), SheetError>;
    }
}
