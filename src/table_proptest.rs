#![cfg(test)]

// Property tests for Table kept inside the crate so they can inspect slot
// layout through crate-private accessors.

use crate::config::{Ownership, TableBuilder, MAX_LOAD_FACTOR};
use crate::hash::{hash_string, probe_distance};
use crate::slot::SlotStatus;
use crate::table::Table;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    InsertBorrowed(usize, i32),
    InsertOwned(usize, i32),
    Remove(usize),
    Get(usize),
    Resize(usize),
    Compact,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,6}", 1..=24).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            3 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::InsertBorrowed(i, v)),
            2 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::InsertOwned(i, v)),
            3 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Get),
            1 => (1usize..64).prop_map(OpI::Resize),
            1 => Just(OpI::Compact),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..120).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Hash functions of decreasing quality; the narrow ones force long probe
// chains and Robin Hood swaps.
fn pick_hash(which: u8) -> fn(&str) -> u32 {
    match which % 3 {
        0 => hash_string,
        1 => |s| hash_string(s) & 7,
        _ => |_| 0,
    }
}

/// Every live entry is reachable from its home bucket without crossing an
/// empty slot.
fn assert_reachable(t: &Table<'_, str, i32>) -> Result<(), TestCaseError> {
    let cap = t.capacity();
    for i in 0..cap {
        if let Some(h) = t.slot_hash(i) {
            let d = probe_distance(h, i, cap);
            for step in 0..d {
                let j = (i + cap - d + step) % cap;
                prop_assert_ne!(
                    t.slot_status(j),
                    Some(SlotStatus::Empty),
                    "empty slot {} splits the probe chain of slot {}",
                    j,
                    i
                );
            }
        }
    }
    for (k, _) in t.iter() {
        prop_assert!(t.contains_key(k), "live key {:?} not reachable", k);
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - insert returns the previous value exactly when the model had one.
// - get/remove agree with the model for present and absent keys.
// - len parity; live load never exceeds MAX_LOAD_FACTOR.
// - resize/compact preserve the entry set and clear all tombstones.
// - iteration yields each live entry exactly once.
proptest! {
    #![proptest_config(ProptestConfig { cases: 96, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(
        (pool, ops) in arb_scenario(),
        cap in 1usize..20,
        grow in prop_oneof![Just(1.5f64), Just(2.0f64), 1.01f64..3.0],
        which_hash in any::<u8>(),
        borrowed in any::<bool>(),
    ) {
        let ownership = if borrowed { Ownership::Borrowed } else { Ownership::Owned };
        let mut sut: Table<'_, str, i32> = TableBuilder::default()
            .capacity(cap)
            .grow_factor(grow)
            .hash_fn(pick_hash(which_hash))
            .ownership(ownership)
            .build()
            .unwrap();
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let prev = sut.insert(&pool[i], v).unwrap();
                    prop_assert_eq!(prev, model.insert(pool[i].clone(), v));
                }
                OpI::InsertBorrowed(i, v) => {
                    let prev = sut.insert_borrowed(&pool[i], v).unwrap();
                    prop_assert_eq!(prev, model.insert(pool[i].clone(), v));
                }
                OpI::InsertOwned(i, v) => {
                    let prev = sut.insert_owned(pool[i].clone(), v).unwrap();
                    prop_assert_eq!(prev, model.insert(pool[i].clone(), v));
                }
                OpI::Remove(i) => {
                    prop_assert_eq!(sut.remove(&pool[i]), model.remove(&pool[i]));
                    prop_assert_eq!(sut.get(&pool[i]), None);
                }
                OpI::Get(i) => {
                    prop_assert_eq!(sut.get(&pool[i]), model.get(&pool[i]));
                }
                OpI::Resize(n) => {
                    sut.resize(n).unwrap();
                    prop_assert_eq!(sut.tombstones(), 0);
                    prop_assert!(sut.capacity() >= n);
                }
                OpI::Compact => {
                    let cap_before = sut.capacity();
                    sut.compact().unwrap();
                    prop_assert_eq!(sut.tombstones(), 0);
                    prop_assert_eq!(sut.capacity(), cap_before);
                }
                OpI::Iterate => {
                    let seen: BTreeMap<&str, i32> = sut.iter().map(|(k, v)| (k, *v)).collect();
                    prop_assert_eq!(seen.len(), sut.len());
                    let expected: BTreeMap<&str, i32> =
                        model.iter().map(|(k, v)| (k.as_str(), *v)).collect();
                    prop_assert_eq!(seen, expected);
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert!(sut.len() as f64 <= sut.capacity() as f64 * MAX_LOAD_FACTOR);
            let statuses = (0..sut.capacity()).filter_map(|i| sut.slot_status(i));
            let (live, dead) = statuses.fold((0, 0), |(l, d), s| match s {
                SlotStatus::Occupied => (l + 1, d),
                SlotStatus::Tombstone => (l, d + 1),
                SlotStatus::Empty => (l, d),
            });
            prop_assert_eq!(live, sut.len());
            prop_assert_eq!(dead, sut.tombstones());
        }

        assert_reachable(&sut)?;
        for (k, v) in &model {
            prop_assert_eq!(sut.get(k), Some(v));
        }
    }
}

// Property: after a rebuild, displacement grows by at most one from each
// occupied slot to the next occupied slot (Robin Hood ordering).
proptest! {
    #[test]
    fn prop_rebuild_displacement_steps(keys in proptest::collection::btree_set("[a-z]{1,8}", 1..60)) {
        let mut t: Table<'_, str, i32> = TableBuilder::default()
            .capacity(8)
            .hash_fn(|s| hash_string(s) & 15)
            .build()
            .unwrap();
        for (i, k) in keys.iter().enumerate() {
            t.insert_owned(k.clone(), i as i32).unwrap();
        }
        t.compact().unwrap();

        let cap = t.capacity();
        let dist = |i: usize| -> Option<usize> {
            t.slot_hash(i).map(|h| probe_distance(h, i, cap))
        };
        for i in 0..cap {
            if let (Some(a), Some(b)) = (dist(i), dist((i + 1) % cap)) {
                prop_assert!(b <= a + 1, "displacement jumped from {} to {} at slot {}", a, b, i);
            }
        }
    }
}
