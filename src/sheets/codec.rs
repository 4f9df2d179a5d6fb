//! Generic row codec parameterized by the declared sheet schema.
//!
//! Records travel through `serde_json::Value` so one encode/decode pair
//! covers every entity kind; the schema supplies the per-column
//! coercions (textual booleans, JSON-encoded lists, numbers).

use log::warn;
use serde_json::{Map, Value};

use crate::sheets::SheetError;
use crate::sheets::schema::{ColumnKind, SheetRecord};

/// Encodes one row per record, one cell per header in header order.
/// Missing or null fields become empty cells; arrays and objects are
/// serialized to JSON strings.
pub fn encode_rows<T: SheetRecord>(
    headers: &[String],
    items: &[T],
) -> Result<Vec<Vec<String>>, SheetError> {
    items
        .iter()
        .map(|item| {
            let value =
                serde_json::to_value(item).map_err(|e| SheetError::Decode(e.to_string()))?;
            let Value::Object(fields) = value else {
                return Err(SheetError::Decode("record is not a JSON object".into()));
            };
            headers.iter().map(|h| encode_cell(fields.get(h))).collect()
        })
        .collect()
}

fn encode_cell(value: Option<&Value>) -> Result<String, SheetError> {
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(composite) => {
            serde_json::to_string(composite).map_err(|e| SheetError::Decode(e.to_string()))?
        }
    })
}

/// Decodes data rows by zipping each row positionally against the
/// sheet's header row, coercing cells by their declared column kind.
/// Empty cells are omitted so the record's field defaults apply.
pub fn decode_rows<T: SheetRecord>(
    headers: &[String],
    rows: &[Vec<String>],
) -> Result<Vec<T>, SheetError> {
    rows.iter().map(|row| decode_row(headers, row)).collect()
}

fn decode_row<T: SheetRecord>(headers: &[String], row: &[String]) -> Result<T, SheetError> {
    let mut fields = Map::new();
    for (i, header) in headers.iter().enumerate() {
        let cell = row.get(i).map(String::as_str).unwrap_or("");
        if cell.is_empty() {
            continue;
        }
        let kind = T::SCHEMA.kind_of(header).unwrap_or(ColumnKind::Text);
        fields.insert(header.clone(), decode_cell(header, kind, cell)?);
    }
    serde_json::from_value(Value::Object(fields)).map_err(|e| SheetError::Decode(e.to_string()))
}

fn decode_cell(header: &str, kind: ColumnKind, cell: &str) -> Result<Value, SheetError> {
    Ok(match kind {
        ColumnKind::Text => Value::String(cell.to_string()),
        ColumnKind::Number => {
            let n: f64 = cell.trim().parse().map_err(|_| {
                SheetError::Decode(format!("column {header}: not a number: {cell:?}"))
            })?;
            serde_json::Number::from_f64(n)
                .map(Value::Number)
                .ok_or_else(|| {
                    SheetError::Decode(format!("column {header}: non-finite number"))
                })?
        }
        ColumnKind::Bool => Value::Bool(matches!(cell, "TRUE" | "True" | "true")),
        ColumnKind::JsonList if cell.starts_with('[') => match serde_json::from_str(cell) {
            Ok(list) => list,
            Err(e) => {
                warn!("column {header}: unparsable list {cell:?}: {e}");
                Value::Array(vec![])
            }
        },
        ColumnKind::JsonList => {
            warn!("column {header}: expected a JSON list, got {cell:?}");
            Value::Array(vec![])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::guest::{Gender, Guest, Rsvp};
    use crate::domain::task::Task;
    use crate::sheets::schema::{GUESTS, TASKS};

    fn guest() -> Guest {
        Guest {
            id: "1".into(),
            name: "A".into(),
            village: "V".into(),
            phone: "p".into(),
            rsvp: Rsvp::Pending,
            gender: Gender::Male,
            events: vec![],
        }
    }

    #[test]
    fn guest_row_round_trips_with_events_as_list() {
        let headers = GUESTS.headers();
        let rows = encode_rows(&headers, &[guest()]).unwrap();
        assert_eq!(rows[0][6], "[]");

        let decoded: Vec<Guest> = decode_rows(&headers, &rows).unwrap();
        assert_eq!(decoded, vec![guest()]);
        assert!(decoded[0].events.is_empty());
    }

    #[test]
    fn completed_coerces_from_sheet_booleans() {
        let headers = TASKS.headers();
        let row = vec![
            "t1".into(),
            "Dholak".into(),
            "Low".into(),
            "Cousins".into(),
            "TRUE".into(),
        ];
        let tasks: Vec<Task> = decode_rows(&headers, &[row]).unwrap();
        assert!(tasks[0].completed);

        let encoded = encode_rows(&headers, &tasks).unwrap();
        assert_eq!(encoded[0][4], "TRUE");
    }

    #[test]
    fn empty_cells_fall_back_to_field_defaults() {
        let headers = TASKS.headers();
        let row = vec!["t2".into(), "Mithai".into(), String::new(), String::new()];
        let tasks: Vec<Task> = decode_rows(&headers, &[row]).unwrap();
        assert_eq!(tasks[0].assigned_to, "Unassigned");
        assert!(!tasks[0].completed);
    }

    #[test]
    fn bad_list_cell_degrades_to_empty() {
        let headers = GUESTS.headers();
        let mut rows = encode_rows(&headers, &[guest()]).unwrap();
        rows[0][6] = "not-a-list".into();
        let decoded: Vec<Guest> = decode_rows(&headers, &rows).unwrap();
        assert!(decoded[0].events.is_empty());
    }

    #[test]
    fn malformed_number_is_a_decode_error() {
        let headers = crate::sheets::schema::VENDORS.headers();
        let row = vec![
            "1".into(),
            "Spice".into(),
            "Catering".into(),
            "abc".into(),
            "0".into(),
            "c".into(),
        ];
        let res: Result<Vec<crate::domain::vendor::Vendor>, _> = decode_rows(&headers, &[row]);
        assert!(res.is_err());
    }
}
