use std::collections::{BTreeSet, HashSet};

use proptest::prelude::*;

use brewlog::{
    core::store::BrewStore,
    persist::blob,
    record::{BrewDraft, BrewRecord},
    timefmt,
    types::RecordId,
};

#[derive(Debug, Clone)]
enum Action {
    Add { name_idx: u8, dose_tenths: u16 },
    Rename { target: u8, name_idx: u8 },
    DeleteById { target: u8 },
    DeleteAt { index: u8 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u8..12, 100u16..5000)
            .prop_map(|(name_idx, dose_tenths)| Action::Add { name_idx, dose_tenths }),
        (0u8..32, 0u8..12).prop_map(|(target, name_idx)| Action::Rename { target, name_idx }),
        (0u8..32).prop_map(|target| Action::DeleteById { target }),
        (0u8..40).prop_map(|index| Action::DeleteAt { index }),
    ]
}

fn record_for(name_idx: u8, dose_tenths: u16) -> BrewRecord {
    let mut draft = BrewDraft::new();
    draft.coffee_name = format!("Roast {name_idx}");
    draft.dose = format!("{:.1}", f64::from(dose_tenths) / 10.0);
    draft.water_amount = "250".to_string();
    draft.validate().expect("valid draft")
}

fn full_scan_by_name(store: &BrewStore, name: &str) -> Vec<RecordId> {
    store
        .records()
        .into_iter()
        .filter(|r| r.coffee_name == name)
        .map(|r| r.id)
        .collect()
}

fn indexed_by_name(store: &BrewStore, name: &str) -> Vec<RecordId> {
    store.by_name(name).into_iter().map(|r| r.id).collect()
}

proptest! {
    #[test]
    fn mm_ss_round_trip(m in 0u32..10_000, s in 0u32..60) {
        let total = m * 60 + s;
        prop_assert_eq!(timefmt::parse_mm_ss(&format!("{m}:{s}")), Ok(total));

        let rendered = timefmt::format_mm_ss(f64::from(total));
        prop_assert_eq!(timefmt::parse_mm_ss(&rendered), Ok(total));
        let (_, seconds) = rendered.split_once(':').expect("colon");
        prop_assert_eq!(seconds.len(), 2);
    }

    #[test]
    fn out_of_range_seconds_are_rejected(m in 0u32..1000, s in 60u32..10_000) {
        let parsed = timefmt::parse_mm_ss(&format!("{}:{}", m, s));
        prop_assert!(parsed.is_err());
    }

    #[test]
    fn arbitrary_text_never_panics_the_parser(input in ".*") {
        let _ = timefmt::parse_mm_ss(&input);
    }

    #[test]
    fn random_sequences_preserve_order_and_indices(
        actions in prop::collection::vec(action_strategy(), 1..120)
    ) {
        let mut store = BrewStore::new();
        let mut names = BTreeSet::<String>::new();

        for action in actions {
            match action {
                Action::Add { name_idx, dose_tenths } => {
                    names.insert(format!("Roast {name_idx}"));
                    store.add(record_for(name_idx, dose_tenths));
                }
                Action::Rename { target, name_idx } => {
                    let ids = store.ordered_ids().to_vec();
                    if ids.is_empty() {
                        continue;
                    }
                    let id = ids[usize::from(target) % ids.len()];
                    let mut renamed = store.get(id).expect("listed id present").clone();
                    renamed.coffee_name = format!("Roast {name_idx}");
                    names.insert(renamed.coffee_name.clone());
                    store.update(renamed).expect("update listed id");
                }
                Action::DeleteById { target } => {
                    let ids = store.ordered_ids().to_vec();
                    if ids.is_empty() {
                        continue;
                    }
                    let id = ids[usize::from(target) % ids.len()];
                    prop_assert_eq!(store.remove_by_id(&[id]), 1);
                }
                Action::DeleteAt { index } => {
                    let len = store.len();
                    let removed = store.remove_at(&[usize::from(index)]);
                    prop_assert_eq!(removed, usize::from(usize::from(index) < len));
                }
            }

            let ids = store.ordered_ids();
            let unique: HashSet<_> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
            prop_assert_eq!(store.records().len(), store.len());

            for name in &names {
                prop_assert_eq!(indexed_by_name(&store, name), full_scan_by_name(&store, name));
            }
        }
    }

    #[test]
    fn blob_codec_round_trips_random_stores(
        seeds in prop::collection::vec((0u8..12, 100u16..5000), 0..20)
    ) {
        let mut store = BrewStore::new();
        for (name_idx, dose_tenths) in seeds {
            store.add(record_for(name_idx, dose_tenths));
        }

        let snapshot = store.snapshot();
        let bytes = blob::encode(&snapshot).expect("encode");
        let decoded = blob::decode(&bytes).expect("decode");
        prop_assert_eq!(decoded, snapshot);
    }
}
