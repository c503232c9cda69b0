use hashbrown::HashMap;

use crate::types::RecordId;

pub type VecIndex<K> = HashMap<K, Vec<RecordId>>;
