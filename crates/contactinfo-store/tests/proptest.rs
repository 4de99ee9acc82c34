//! Property-based tests for filter chains using proptest.

use std::collections::BTreeSet;

use contactinfo_store::{Condition, FieldStore, Filter, MemoryStore, RecordId};
use proptest::prelude::*;

const ALIASES: [&str; 3] = ["a", "b", "c"];

// Each item gets one value per alias, drawn from a tiny alphabet so that
// conditions collide often.
fn store_strategy() -> impl Strategy<Value = MemoryStore> {
    prop::collection::vec(prop::array::uniform3("[xy]"), 0..20).prop_map(|items| {
        let mut store = MemoryStore::new();
        for (field_id, alias) in ALIASES.iter().enumerate() {
            store = store.field(field_id as u64, *alias, alias.to_uppercase());
        }
        for (item, values) in items.into_iter().enumerate() {
            for (field_id, value) in values.into_iter().enumerate() {
                store = store.value(RecordId(item as i64), field_id as u64, value);
            }
        }
        store
    })
}

fn conditions_strategy() -> impl Strategy<Value = Vec<Condition>> {
    prop::collection::vec((0..3usize, "[xy]"), 1..4).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(alias, value)| Condition::new(ALIASES[alias], value))
            .collect()
    })
}

fn run(store: &MemoryStore, conditions: &[Condition]) -> Vec<RecordId> {
    let filter = Filter::chain(conditions.to_vec()).unwrap();
    store.run_filtered_query(&filter).unwrap()
}

proptest! {
    /// Reordering the chain never changes the final set.
    #[test]
    fn chain_is_commutative(store in store_strategy(), conditions in conditions_strategy()) {
        let forward = run(&store, &conditions);
        let mut reversed = conditions.clone();
        reversed.reverse();
        prop_assert_eq!(forward, run(&store, &reversed));
    }

    /// The chain equals the intersection of the single-condition results.
    #[test]
    fn chain_is_intersection(store in store_strategy(), conditions in conditions_strategy()) {
        let expected = conditions
            .iter()
            .map(|c| run(&store, std::slice::from_ref(c)).into_iter().collect::<BTreeSet<_>>())
            .reduce(|acc, ids| acc.intersection(&ids).copied().collect())
            .unwrap_or_default();

        prop_assert_eq!(run(&store, &conditions), expected.into_iter().collect::<Vec<_>>());
    }

    /// Adding a condition never grows the result.
    #[test]
    fn narrowing_never_grows(store in store_strategy(), conditions in conditions_strategy()) {
        let full = run(&store, &conditions).len();
        let prefix = run(&store, &conditions[..1]).len();
        prop_assert!(full <= prefix);
    }

    /// Results are distinct and ascending.
    #[test]
    fn results_are_sorted_and_distinct(store in store_strategy(), conditions in conditions_strategy()) {
        let ids = run(&store, &conditions);
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    /// A LIKE pattern without wildcards matches its own text in any case.
    #[test]
    fn like_matches_literal_ignoring_case(text in "[a-zA-Z0-9 .()+*?]{0,16}") {
        let matcher = contactinfo_store::Op::Like.matcher(&text).unwrap();
        prop_assert!(matcher.is_match(&text.to_uppercase()));
        prop_assert!(matcher.is_match(&text.to_lowercase()));
    }
}
