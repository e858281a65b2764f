//! Location and allocator property tests
//!
//! - Every allocated location has bit 31 and bit 0 of its low field clear
//! - Allocation order equals location order
//! - Stored bytes come back unchanged for arbitrary insert/delete sequences
//! - Ids at or past 2^53 are FATAL

use heapstore::storage::{
    HeapRecordStore, HeapStoreConfig, Location, LocationAllocator, RecordStore,
    StorageErrorCode, MAX_LOCATION_ID,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Generates a record payload of 0-127 random bytes.
fn arb_payload() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(any::<u8>(), 0..128)
}

/// Insert a payload, or delete the n-th live record (modulo live count).
#[derive(Debug, Clone)]
enum Op {
    Insert(Vec<u8>),
    Delete(usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_payload().prop_map(Op::Insert),
        1 => any::<usize>().prop_map(Op::Delete),
    ]
}

proptest! {
    /// Packing never sets a reserved bit anywhere in the id range.
    #[test]
    fn prop_packed_locations_keep_reserved_bits_clear(id in 0..MAX_LOCATION_ID) {
        let loc = LocationAllocator::pack(id).unwrap();
        prop_assert!(loc.low() >= 0);
        prop_assert_eq!(loc.low() & 1, 0);
        prop_assert!(loc.high() >= 0);
        prop_assert_eq!(Location::new(loc.high(), loc.low()), Ok(loc));
    }

    /// Packing is strictly monotonic, so allocation order is location order.
    #[test]
    fn prop_packing_preserves_order(a in 0..MAX_LOCATION_ID, b in 0..MAX_LOCATION_ID) {
        let la = LocationAllocator::pack(a).unwrap();
        let lb = LocationAllocator::pack(b).unwrap();
        prop_assert_eq!(a.cmp(&b), la.cmp(&lb));
    }

    /// Ids past the range are always rejected.
    #[test]
    fn prop_ids_past_range_rejected(id in MAX_LOCATION_ID..=u64::MAX) {
        let err = LocationAllocator::pack(id).unwrap_err();
        prop_assert_eq!(err.code(), StorageErrorCode::AeroLocationExhausted);
    }

    /// The 8-byte form decodes to the same location.
    #[test]
    fn prop_encoding_preserves_location(id in 0..MAX_LOCATION_ID) {
        let loc = LocationAllocator::pack(id).unwrap();
        prop_assert_eq!(Location::from_bytes(&loc.to_bytes()), Ok(loc));
    }

    /// Random insert/delete sequences: live records read back byte-for-byte,
    /// and no location is ever issued twice.
    #[test]
    fn prop_store_matches_model(ops in proptest::collection::vec(arb_op(), 1..200)) {
        let mut store = HeapRecordStore::new();
        let mut model: BTreeMap<Location, Vec<u8>> = BTreeMap::new();
        let mut last: Option<Location> = None;

        for op in ops {
            match op {
                Op::Insert(payload) => {
                    let loc = store.insert_record(&payload, false).unwrap();
                    prop_assert!(last.map_or(true, |prev| prev < loc));
                    last = Some(loc);
                    model.insert(loc, payload);
                }
                Op::Delete(n) => {
                    if model.is_empty() {
                        continue;
                    }
                    let loc = *model.keys().nth(n % model.len()).unwrap();
                    store.delete_record(loc);
                    model.remove(&loc);
                    prop_assert!(!store.contains(loc));
                }
            }
        }

        prop_assert_eq!(store.num_records(), model.len());
        prop_assert_eq!(store.data_size(), model.values().map(Vec::len).sum::<usize>());
        for (loc, payload) in &model {
            let view = store.fetch(*loc);
            prop_assert_eq!(view.size(), payload.len());
            prop_assert_eq!(view.data(), payload.as_slice());
        }
    }
}

#[test]
fn test_store_allocates_up_to_last_id() {
    let allocator = LocationAllocator::starting_at(MAX_LOCATION_ID - 2);
    let mut store = HeapRecordStore::with_allocator(HeapStoreConfig::default(), allocator);

    let a = store.insert_record(b"penultimate", false).unwrap();
    let b = store.insert_record(b"last", false).unwrap();
    assert!(a < b);
    assert_eq!(b, LocationAllocator::pack(MAX_LOCATION_ID - 1).unwrap());
    assert_eq!(store.fetch(b).data(), b"last");
}

#[test]
#[should_panic(expected = "AERO_LOCATION_EXHAUSTED")]
fn test_store_insert_past_range_is_fatal() {
    let allocator = LocationAllocator::starting_at(MAX_LOCATION_ID - 1);
    let mut store = HeapRecordStore::with_allocator(HeapStoreConfig::default(), allocator);

    store.insert_record(b"last", false).unwrap();
    let _ = store.insert_record(b"one too many", false);
}
