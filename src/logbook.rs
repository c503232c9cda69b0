//! Synchronous facade coupling the in-memory store to durable storage.
//!
//! Every successful mutation serializes the entire collection and
//! overwrites the single persisted blob inline, on the caller's thread.
//! Persistence failures are logged and never surface to the caller; the
//! in-memory collection stays authoritative.

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::{
    core::store::{BrewStore, StoreError},
    persist::{KvStore, blob},
    record::{BrewDraft, BrewRecord, DEFAULT_GRINDER},
    types::{BrewMethod, RecordId, RoastLevel, Temperature, TemperatureUnit},
};

/// Policy knobs for logbook startup and record defaults.
#[derive(Debug, Clone)]
pub struct LogbookConfig {
    /// Seed the collection with sample records when no persisted data
    /// exists. Off by default; first run starts empty.
    pub seed_samples: bool,
    /// Grinder name applied to new drafts and seeded samples.
    pub default_grinder: String,
}

impl Default for LogbookConfig {
    fn default() -> Self {
        Self {
            seed_samples: false,
            default_grinder: DEFAULT_GRINDER.to_string(),
        }
    }
}

/// Owner of the brew collection and its persistence.
pub struct Logbook {
    store: BrewStore,
    kv: Box<dyn KvStore>,
    config: LogbookConfig,
}

impl Logbook {
    /// Loads the persisted collection, recovering from absent or corrupt
    /// data. Never fails: corruption is discarded with a warning and the
    /// logbook starts empty.
    pub fn open(mut kv: Box<dyn KvStore>, config: LogbookConfig) -> Self {
        let mut fresh = false;
        let store = match kv.read(blob::BLOB_KEY) {
            Ok(Some(bytes)) => match blob::decode(&bytes) {
                Ok(records) => {
                    info!(count = records.len(), "loaded persisted brew logs");
                    BrewStore::from_records(records)
                }
                Err(err) => {
                    warn!(error = ?err, "failed to decode persisted brew logs; discarding");
                    if let Err(err) = kv.delete(blob::BLOB_KEY) {
                        warn!(error = ?err, "failed to clear corrupt blob");
                    }
                    BrewStore::new()
                }
            },
            Ok(None) => {
                fresh = true;
                BrewStore::new()
            }
            Err(err) => {
                error!(error = ?err, "failed to read persisted brew logs; starting empty");
                BrewStore::new()
            }
        };

        let mut logbook = Self { store, kv, config };
        if fresh && logbook.config.seed_samples {
            for record in sample_records(&logbook.config) {
                logbook.store.add(record);
            }
            info!(count = logbook.store.len(), "seeded sample brew logs");
            logbook.persist();
        }
        logbook
    }

    /// Starts a draft for a new entry using the configured grinder.
    pub fn new_draft(&self) -> BrewDraft {
        let mut draft = BrewDraft::new();
        draft.grinder_type = self.config.default_grinder.clone();
        draft
    }

    /// Appends `record` and persists the collection.
    ///
    /// # Panics
    ///
    /// Panics if the record id already exists; see [`BrewStore::add`].
    pub fn add(&mut self, record: BrewRecord) {
        debug!(id = %record.id, name = %record.coffee_name, "add brew log");
        self.store.add(record);
        self.persist();
    }

    /// Replaces the record with the matching id and persists. An unknown
    /// id is reported and leaves both memory and storage untouched.
    pub fn update(&mut self, record: BrewRecord) -> Result<(), StoreError> {
        match self.store.update(record) {
            Ok(()) => {
                self.persist();
                Ok(())
            }
            Err(StoreError::NotFound(id)) => {
                warn!(id = %id, "no brew log with this id to update");
                Err(StoreError::NotFound(id))
            }
        }
    }

    /// Removes the entries at `indices` and persists when anything was
    /// removed. Out-of-range indices are skipped.
    pub fn delete_at(&mut self, indices: &[usize]) -> usize {
        let removed = self.store.remove_at(indices);
        if removed > 0 {
            debug!(count = removed, "deleted brew logs");
            self.persist();
        }
        removed
    }

    /// Removes the entries with the given ids and persists when anything
    /// was removed. Unknown ids are skipped.
    pub fn delete_by_id(&mut self, ids: &[RecordId]) -> usize {
        let removed = self.store.remove_by_id(ids);
        if removed > 0 {
            debug!(count = removed, "deleted brew logs");
            self.persist();
        }
        removed
    }

    pub fn get(&self, id: RecordId) -> Option<&BrewRecord> {
        self.store.get(id)
    }

    /// All records in insertion order, for list rendering.
    pub fn records(&self) -> Vec<&BrewRecord> {
        self.store.records()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Distinct coffee names in first-appearance order, for autocomplete.
    pub fn coffee_names(&self) -> Vec<String> {
        self.store.coffee_names()
    }

    // The stored blob is only ever replaced whole. When encoding or the
    // write fails, memory stays ahead of a stale-but-valid blob.
    fn persist(&mut self) {
        let bytes = match blob::encode(&self.store.snapshot()) {
            Ok(bytes) => bytes,
            Err(err) => {
                error!(error = ?err, "failed to encode brew logs; keeping in-memory state");
                return;
            }
        };
        if let Err(err) = self.kv.write(blob::BLOB_KEY, &bytes) {
            error!(error = ?err, "failed to persist brew logs; keeping in-memory state");
        }
    }
}

fn sample_records(config: &LogbookConfig) -> Vec<BrewRecord> {
    vec![
        BrewRecord {
            id: RecordId::new_v4(),
            timestamp: Utc::now(),
            coffee_name: "Morning Delight".to_string(),
            dose: 18.5,
            grind_setting: "Medium-Fine".to_string(),
            water_amount: 300.0,
            method: BrewMethod::PourOver,
            roast_level: RoastLevel::Light,
            water_temperature: Some(Temperature {
                value: 96.0,
                unit: TemperatureUnit::Celsius,
            }),
            brew_time: Some(180.0),
            notes: Some("First attempt with new beans.".to_string()),
            rating: Some(4),
            grinder_type: config.default_grinder.clone(),
        },
        BrewRecord {
            id: RecordId::new_v4(),
            timestamp: Utc::now(),
            coffee_name: "Dark Roast".to_string(),
            dose: 20.0,
            grind_setting: "Coarse".to_string(),
            water_amount: 320.0,
            method: BrewMethod::FrenchPress,
            roast_level: RoastLevel::Dark,
            water_temperature: Some(Temperature {
                value: 92.0,
                unit: TemperatureUnit::Celsius,
            }),
            brew_time: Some(240.0),
            notes: Some("Strong and bold.".to_string()),
            rating: Some(5),
            grinder_type: config.default_grinder.clone(),
        },
    ]
}
