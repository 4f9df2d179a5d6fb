//! Declared per-kind sheet schemas: ordered field lists with an explicit
//! codec kind per column. The header order is the wire contract.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::event::WeddingEvent;
use crate::domain::gift::GiftLog;
use crate::domain::guest::Guest;
use crate::domain::suit::Suit;
use crate::domain::task::Task;
use crate::domain::vendor::Vendor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Number,
    /// Boolean stored as textual TRUE/FALSE in the sheet.
    Bool,
    /// JSON-encoded list stored as a string cell.
    JsonList,
}

#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub header: &'static str,
    pub kind: ColumnKind,
}

const fn text(header: &'static str) -> Column {
    Column {
        header,
        kind: ColumnKind::Text,
    }
}

const fn number(header: &'static str) -> Column {
    Column {
        header,
        kind: ColumnKind::Number,
    }
}

#[derive(Clone, Copy, Debug)]
pub struct SheetSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl SheetSchema {
    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.header.to_string()).collect()
    }

    pub fn kind_of(&self, header: &str) -> Option<ColumnKind> {
        self.columns
            .iter()
            .find(|c| c.header == header)
            .map(|c| c.kind)
    }
}

pub const GUESTS: SheetSchema = SheetSchema {
    name: "Guests",
    columns: &[
        text("id"),
        text("name"),
        text("village"),
        text("phone"),
        text("rsvp"),
        text("gender"),
        Column {
            header: "events",
            kind: ColumnKind::JsonList,
        },
    ],
};

pub const EVENTS: SheetSchema = SheetSchema {
    name: "Events",
    columns: &[
        text("id"),
        text("name"),
        text("type"),
        text("date"),
        text("venue"),
        number("budget"),
    ],
};

pub const VENDORS: SheetSchema = SheetSchema {
    name: "Vendors",
    columns: &[
        text("id"),
        text("name"),
        text("serviceType"),
        number("cost"),
        number("paidAmount"),
        text("contact"),
    ],
};

pub const TASKS: SheetSchema = SheetSchema {
    name: "Tasks",
    columns: &[
        text("id"),
        text("name"),
        text("priority"),
        text("assignedTo"),
        Column {
            header: "completed",
            kind: ColumnKind::Bool,
        },
    ],
};

pub const GIFTS: SheetSchema = SheetSchema {
    name: "Gifts",
    columns: &[
        text("id"),
        text("guestName"),
        number("amount"),
        text("type"),
        text("event"),
        text("notes"),
    ],
};

/// Declared but not part of the sync contract: the wardrobe feature is
/// unbuilt, so the push path never writes this sheet.
pub const SUITS: SheetSchema = SheetSchema {
    name: "Suits",
    columns: &[
        text("id"),
        text("owner"),
        text("type"),
        text("tailor"),
        text("status"),
    ],
};

/// The five sheets covered by `GET_ALL`/`SYNC_DATA`.
pub const SYNCED: [&SheetSchema; 5] = [&GUESTS, &EVENTS, &VENDORS, &TASKS, &GIFTS];

pub const ALL: [&SheetSchema; 6] = [&GUESTS, &EVENTS, &VENDORS, &TASKS, &GIFTS, &SUITS];

/// Binds an entity type to its declared sheet schema.
pub trait SheetRecord: Serialize + DeserializeOwned {
    const SCHEMA: &'static SheetSchema;
}

impl SheetRecord for Guest {
    const SCHEMA: &'static SheetSchema = &GUESTS;
}

impl SheetRecord for WeddingEvent {
    const SCHEMA: &'static SheetSchema = &EVENTS;
}

impl SheetRecord for Vendor {
    const SCHEMA: &'static SheetSchema = &VENDORS;
}

impl SheetRecord for Task {
    const SCHEMA: &'static SheetSchema = &TASKS;
}

impl SheetRecord for GiftLog {
    const SCHEMA: &'static SheetSchema = &GIFTS;
}

impl SheetRecord for Suit {
    const SCHEMA: &'static SheetSchema = &SUITS;
}
