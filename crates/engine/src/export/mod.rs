//! Roster exports: CSV text and a `mailto:` draft.
//!
//! Both are pure transforms of the record list. Writing the CSV file is the
//! only I/O done here; launching the mail client is left to the caller.

use std::path::PathBuf;

use thiserror::Error;

pub mod csv;
pub mod mail;

pub use self::csv::{CSV_COLUMNS, CsvExport, csv_header};
pub use self::mail::{MailDraft, MailRecord};

#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export; carries the action the operator attempted.
    #[error("Adicione pelo menos um colaborador antes de {action}.")]
    EmptyRoster { action: &'static str },
    #[error("invalid export file name '{0}'")]
    InvalidFileName(String),
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize mail body: {0}")]
    Serialization(#[from] serde_json::Error),
}
