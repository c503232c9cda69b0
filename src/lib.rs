//! Validated coffee brew records over an in-memory ordered collection
//! mirrored to durable key-value storage.
//!
//! # Examples
//!
//! In-memory usage with [`core::store::BrewStore`]:
//! ```
//! use brewlog::{core::store::BrewStore, record::BrewDraft};
//!
//! let mut draft = BrewDraft::new();
//! draft.coffee_name = "Morning".to_string();
//! draft.dose = "18.0".to_string();
//! draft.water_amount = "300".to_string();
//! let record = draft.validate().expect("valid draft");
//!
//! let id = record.id;
//! let mut store = BrewStore::new();
//! store.add(record);
//! assert_eq!(store.get(id).map(|r| r.dose), Some(18.0));
//! ```
//!
//! Durable usage with [`logbook::Logbook`] over SQLite:
//! ```
//! use brewlog::{
//!     logbook::{Logbook, LogbookConfig},
//!     persist::sqlite::SqliteKv,
//! };
//!
//! let kv = SqliteKv::open_in_memory().expect("open kv");
//! let mut logbook = Logbook::open(Box::new(kv), LogbookConfig::default());
//!
//! let mut draft = logbook.new_draft();
//! draft.coffee_name = "Kenya AA".to_string();
//! draft.dose = "15.0".to_string();
//! draft.water_amount = "250".to_string();
//! logbook.add(draft.validate().expect("valid draft"));
//!
//! assert_eq!(logbook.len(), 1);
//! assert_eq!(logbook.coffee_names(), ["Kenya AA"]);
//! ```

/// In-memory store and index helpers.
pub mod core;
/// Synchronous logbook facade and configuration.
pub mod logbook;
/// Persistence seam, blob codec, and SQLite key-value backend.
pub mod persist;
/// Brew session records, drafts, and validation.
pub mod record;
/// Brew-time `MM:SS` codec.
pub mod timefmt;
/// Shared identifier alias and tag enums.
pub mod types;
