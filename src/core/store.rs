use hashbrown::{HashMap, HashSet};
use tracing::warn;

use crate::{core::indices::VecIndex, record::BrewRecord, types::RecordId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    NotFound(RecordId),
}

/// Ordered in-memory brew collection. The sole owner of the records;
/// readers get references or clones, never a mutable alias.
#[derive(Debug, Default)]
pub struct BrewStore {
    records: HashMap<RecordId, BrewRecord>,
    order: Vec<RecordId>,
    by_name: VecIndex<String>,
}

impl BrewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from decoded records, preserving their order.
    ///
    /// Disk contents are not caller input: a duplicate id is skipped
    /// with a warning instead of panicking.
    pub fn from_records(records: Vec<BrewRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            if store.records.contains_key(&record.id) {
                warn!(id = %record.id, "duplicate record id in loaded data; keeping first");
                continue;
            }
            store.insert_unchecked(record);
        }
        store
    }

    /// Appends `record` to the end of the collection.
    ///
    /// # Panics
    ///
    /// Panics if a record with the same id is already present. Ids are
    /// minted at draft creation; reusing one on add is a caller bug.
    pub fn add(&mut self, record: BrewRecord) {
        assert!(
            !self.records.contains_key(&record.id),
            "duplicate record id {} on add",
            record.id
        );
        self.insert_unchecked(record);
    }

    /// Replaces the record with the same id in place, preserving its
    /// position. An unknown id leaves the store untouched.
    pub fn update(&mut self, record: BrewRecord) -> Result<(), StoreError> {
        let id = record.id;
        let Some(existing) = self.records.get_mut(&id) else {
            return Err(StoreError::NotFound(id));
        };

        let old_name = std::mem::replace(existing, record).coffee_name;
        let new_name = existing.coffee_name.clone();
        if new_name != old_name {
            Self::remove_from_vec_index(self.by_name.entry(old_name).or_default(), id);
            self.by_name.entry(new_name).or_default().push(id);
        }
        Ok(())
    }

    /// Removes the entries at `indices`, skipping out-of-range values.
    /// Returns how many records were removed.
    pub fn remove_at(&mut self, indices: &[usize]) -> usize {
        let mut targets: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|idx| *idx < self.order.len())
            .collect();
        targets.sort_unstable();
        targets.dedup();

        // Back to front so earlier removals don't shift later targets.
        for idx in targets.iter().rev() {
            let id = self.order.remove(*idx);
            if let Some(record) = self.records.remove(&id) {
                Self::remove_from_vec_index(self.by_name.entry(record.coffee_name).or_default(), id);
            }
        }
        targets.len()
    }

    /// Removes the entries with the given ids, skipping unknown ones.
    /// Returns how many records were removed.
    pub fn remove_by_id(&mut self, ids: &[RecordId]) -> usize {
        let mut removed = 0;
        for id in ids {
            let Some(record) = self.records.remove(id) else {
                continue;
            };
            if let Some(pos) = self.order.iter().position(|x| x == id) {
                self.order.remove(pos);
            }
            Self::remove_from_vec_index(self.by_name.entry(record.coffee_name).or_default(), *id);
            removed += 1;
        }
        removed
    }

    pub fn get(&self, id: RecordId) -> Option<&BrewRecord> {
        self.records.get(&id)
    }

    /// All records in insertion order.
    pub fn records(&self) -> Vec<&BrewRecord> {
        self.order
            .iter()
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    /// Cloned records in insertion order.
    pub fn snapshot(&self) -> Vec<BrewRecord> {
        self.records().into_iter().cloned().collect()
    }

    pub fn ordered_ids(&self) -> &[RecordId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Records whose coffee name matches exactly, in insertion order.
    pub fn by_name(&self, name: &str) -> Vec<&BrewRecord> {
        self.by_name
            .get(name)
            .into_iter()
            .flat_map(|ids| ids.iter())
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    /// Distinct coffee names in first-appearance order, for autocomplete.
    pub fn coffee_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for record in self.records() {
            if seen.insert(record.coffee_name.as_str()) {
                names.push(record.coffee_name.clone());
            }
        }
        names
    }

    fn insert_unchecked(&mut self, record: BrewRecord) {
        let id = record.id;
        self.by_name
            .entry(record.coffee_name.clone())
            .or_default()
            .push(id);
        self.order.push(id);
        self.records.insert(id, record);
    }

    fn remove_from_vec_index(v: &mut Vec<RecordId>, id: RecordId) {
        if let Some(pos) = v.iter().position(|x| *x == id) {
            v.remove(pos);
        }
    }
}
