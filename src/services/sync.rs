//! Full-collection synchronization with the tabular store.
//!
//! Two operations only, both whole-collection: `pull_all` reconstructs
//! the aggregate from the sheets, `sync_data` overwrites each sheet
//! named in the payload. Last writer wins; there is no per-record
//! versioning.

use log::warn;

use crate::domain::app_data::AppData;
use crate::dto::api::SyncPayload;
use crate::services::ServiceResult;
use crate::sheets::codec::{decode_rows, encode_rows};
use crate::sheets::schema::SheetRecord;
use crate::sheets::SheetStore;

/// Reads every synced sheet into a fresh aggregate. Missing sheets
/// yield empty collections; suits are never carried by the store.
pub fn pull_all<S>(sheets: &S) -> ServiceResult<AppData>
where
    S: SheetStore + ?Sized,
{
    Ok(AppData {
        guests: pull_collection(sheets)?,
        events: pull_collection(sheets)?,
        vendors: pull_collection(sheets)?,
        tasks: pull_collection(sheets)?,
        gifts: pull_collection(sheets)?,
        suits: Vec::new(),
    })
}

/// Overwrites each sheet present in the payload: clear all data rows,
/// then write one row per record in header order. An empty collection
/// leaves the sheet with zero data rows. Calling this twice with the
/// same payload is idempotent.
pub fn sync_data<S>(sheets: &mut S, payload: &SyncPayload) -> ServiceResult<()>
where
    S: SheetStore + ?Sized,
{
    if let Some(guests) = &payload.guests {
        push_collection(sheets, guests)?;
    }
    if let Some(events) = &payload.events {
        push_collection(sheets, events)?;
    }
    if let Some(vendors) = &payload.vendors {
        push_collection(sheets, vendors)?;
    }
    if let Some(tasks) = &payload.tasks {
        push_collection(sheets, tasks)?;
    }
    if let Some(gifts) = &payload.gifts {
        push_collection(sheets, gifts)?;
    }
    Ok(())
}

fn pull_collection<T, S>(sheets: &S) -> ServiceResult<Vec<T>>
where
    T: SheetRecord,
    S: SheetStore + ?Sized,
{
    let name = T::SCHEMA.name;
    let Some(sheet) = sheets.read(name)? else {
        return Ok(Vec::new());
    };
    match decode_rows(&sheet.headers, &sheet.rows) {
        Ok(items) => Ok(items),
        Err(e) => {
            // Malformed rows degrade to an empty collection instead of
            // failing the whole pull.
            warn!("Sheet {name} contains malformed rows, returning empty: {e}");
            Ok(Vec::new())
        }
    }
}

fn push_collection<T, S>(sheets: &mut S, items: &[T]) -> ServiceResult<()>
where
    T: SheetRecord,
    S: SheetStore + ?Sized,
{
    let name = T::SCHEMA.name;
    // Map against the sheet's actual header row, not the declared one,
    // so a reordered sheet still gets coherent rows.
    let Some(sheet) = sheets.read(name)? else {
        warn!("Sheet {name} does not exist, skipping push");
        return Ok(());
    };
    let rows = encode_rows(&sheet.headers, items)?;
    sheets.overwrite(name, &rows)?;
    Ok(())
}
