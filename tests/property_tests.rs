//! Property checks over random intent sequences
mod common;

use common::ids;
use proptest::prelude::*;
use std::collections::HashSet;
use todo_session::{TaskId, TaskStore, completed_view, pending_view};

#[derive(Debug, Clone)]
enum Intent {
    Add(String),
    Toggle(u64),
    Delete(u64),
}

fn intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        3 => "[ a-z|\\\\]{0,8}".prop_map(Intent::Add),
        2 => (1u64..12).prop_map(Intent::Toggle),
        1 => (1u64..12).prop_map(Intent::Delete),
    ]
}

fn apply(intents: &[Intent]) -> TaskStore {
    let mut store = TaskStore::new();
    for intent in intents {
        match intent {
            Intent::Add(text) => {
                let _ = store.add(text);
            }
            Intent::Toggle(id) => {
                store.toggle(TaskId(*id));
            }
            Intent::Delete(id) => {
                store.delete(TaskId(*id));
            }
        }
    }
    store
}

proptest! {
    #[test]
    fn views_partition_snapshot(intents in prop::collection::vec(intent(), 0..40)) {
        let store = apply(&intents);
        let pending: HashSet<u64> = ids(pending_view(store.snapshot())).into_iter().collect();
        let completed: HashSet<u64> = ids(completed_view(store.snapshot())).into_iter().collect();
        let all: HashSet<u64> = ids(store.snapshot()).into_iter().collect();

        prop_assert!(pending.is_disjoint(&completed));
        prop_assert_eq!(pending.union(&completed).copied().collect::<HashSet<_>>(), all);
        prop_assert_eq!(
            pending_view(store.snapshot()).len() + completed_view(store.snapshot()).len(),
            store.len()
        );
    }

    #[test]
    fn ids_stay_unique(intents in prop::collection::vec(intent(), 0..40)) {
        let store = apply(&intents);
        let all = ids(store.snapshot());
        let unique: HashSet<u64> = all.iter().copied().collect();
        prop_assert_eq!(unique.len(), all.len());
    }

    #[test]
    fn serialize_round_trips(intents in prop::collection::vec(intent(), 0..40)) {
        let store = apply(&intents);
        let restored = TaskStore::deserialize(&store.serialize()).unwrap();
        prop_assert_eq!(restored.snapshot(), store.snapshot());
    }
}
