//! # Roster Engine
//!
//! The Roster Engine holds everything the compliance roster does apart from
//! drawing it: the collaborator draft edited by the form, validation, the
//! in-memory collection, the status view and the CSV/mail exports.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use roster_engine::{CollaboratorDraft, FixedClock, InMemoryRoster, RecordingNotifier, RosterPort, actions};
//! use roster_types::{DateField, Group, Sector, Unit};
//!
//! let clock = FixedClock::at_noon(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
//! let mut roster = InMemoryRoster::with_clock(clock);
//! let notifier = RecordingNotifier::default();
//!
//! let mut draft = CollaboratorDraft::new();
//! draft.set_full_name("Ana Silva");
//! draft.set_tax_id("12345678901");
//! for field in DateField::REQUIRED {
//!     draft.set_date(*field, NaiveDate::from_ymd_opt(2025, 6, 1));
//! }
//! draft.set_unit(Some(Unit::first()));
//! draft.set_group(Some(Group::first()));
//! draft.set_sector(Some(Sector::first()));
//!
//! let id = actions::submit(&mut draft, &mut roster, &notifier)?;
//! assert_eq!(roster.list()[0].id(), &id);
//! assert!(roster.export_csv()?.contents.contains("123.456.789-01"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - **`draft`**: the editable record and its reducer
//! - **`validation`**: draft to record, first failure wins
//! - **`roster`**: the collection owner behind [`RosterPort`]
//! - **`view`**: status tiers per date, computed on demand
//! - **`export`**: CSV text and the `mailto:` draft
//! - **`actions`**: operator actions wired to a [`Notifier`]

pub mod actions;
pub mod clock;
pub mod draft;
pub mod export;
pub mod notifier;
pub mod roster;
pub mod validation;
pub mod view;

#[cfg(test)]
mod testing;

pub use clock::{Clock, FixedClock, SystemClock};
pub use draft::{CollaboratorDraft, DraftEdit, EditOutcome, TextField};
pub use export::{CSV_COLUMNS, CsvExport, ExportError, MailDraft, MailRecord, csv_header};
pub use notifier::{Notification, Notifier, RecordingNotifier};
pub use roster::{InMemoryRoster, RosterPort};
pub use validation::{ValidationError, validate};
pub use view::{DateBadge, RosterRow, RosterView, TierSummary, roster_view};
