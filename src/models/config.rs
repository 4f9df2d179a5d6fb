//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Directory holding the tabular store, one CSV file per sheet.
    pub sheets_dir: String,
    /// Path of the local durable cache slot.
    pub data_file: String,
    /// Completion-service credential; assistant routes degrade to
    /// placeholder replies when unset.
    pub gemini_api_key: Option<String>,
}
