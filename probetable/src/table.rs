use std::fmt;

use log::{debug, trace, warn};

use crate::error::{self, TableError};
use crate::iter::Iter;
use crate::slot::{Keyed, Slot};
use crate::stats::{CollisionStats, Histogram, Listing};

/// Number of slots used when no capacity is given
pub const DEFAULT_CAPACITY: usize = 100;

/// How `insert` decides that a key is already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Only the home slot is compared against the new key. A duplicate that
    /// was pushed further down the probe chain goes unnoticed and the table
    /// ends up holding the key twice.
    HomeSlot,
    /// The whole probe chain, from the home slot up to the first empty slot,
    /// is scanned before inserting.
    #[default]
    ProbeChain,
}

/// Construction parameters for a `ProbeTable`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableConfig {
    pub capacity: usize,
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            duplicate_policy: DuplicatePolicy::default(),
        }
    }
}

impl TableConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }
}

/// Fixed-capacity open address hash table with linear probing.
///
/// Records are stored by value and looked up through the string returned by
/// [`Keyed::key`]. The home slot of a key is computed by the hash function
/// given at construction time; collisions are resolved by scanning forward
/// one slot at a time, wrapping at the end of the table.
///
/// The table never grows and records are never removed, so an empty slot
/// always ends a probe chain. Every slot also carries a probe counter that
/// records how many insert probe steps landed on it, for diagnostics only.
pub struct ProbeTable<R, H> {
    slots: Box<[Slot<R>]>,
    probes: Box<[u32]>,
    size: usize,
    policy: DuplicatePolicy,
    hash_fn: H,
}

impl<R, H> ProbeTable<R, H> {
    /// Returns the number of records in the table
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the table holds no records
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns true if every slot is occupied
    pub fn is_full(&self) -> bool {
        self.size == self.capacity()
    }

    /// Returns the fixed number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the load factor of the table (size / capacity)
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Returns the record held at `index`, if any
    pub fn get_slot(&self, index: usize) -> Option<&R> {
        self.slots.get(index).and_then(Slot::record)
    }

    /// Occupied slots in slot order
    pub fn iter(&self) -> Iter<'_, R> {
        Iter::new(&self.slots, self.size)
    }

    /// Collects every occupied slot as `(index, record)`, in slot order
    pub fn dump_all(&self) -> Vec<(usize, &R)> {
        self.iter().collect()
    }

    /// Display adapter printing one `index record` line per occupied slot
    pub fn listing(&self) -> Listing<'_, R> {
        Listing::new(&self.slots, self.size)
    }

    pub fn probe_counts(&self) -> &[u32] {
        &self.probes
    }

    pub fn collision_stats(&self) -> CollisionStats {
        CollisionStats::from_probe_counts(self.size, &self.probes)
    }

    /// Display adapter drawing the probe counters as a histogram
    pub fn histogram(&self) -> Histogram<'_> {
        Histogram::new(&self.probes)
    }
}

impl<R, H> ProbeTable<R, H>
where
    R: Keyed,
    H: Fn(&str) -> usize,
{
    /// Creates an empty table with `DEFAULT_CAPACITY` slots
    pub fn new(hash_fn: H) -> Self {
        Self::with_config(TableConfig::default(), hash_fn)
    }

    /// Creates an empty table with `capacity` slots
    pub fn with_capacity(capacity: usize, hash_fn: H) -> Self {
        Self::with_config(TableConfig::default().with_capacity(capacity), hash_fn)
    }

    /// Creates an empty table from `config`.
    ///
    /// # Panics
    /// If `config.capacity` is zero.
    pub fn with_config(config: TableConfig, hash_fn: H) -> Self {
        assert!(config.capacity > 0, "capacity must be positive");

        let slots = (0..config.capacity).map(|_| Slot::default()).collect();
        let probes = vec![0; config.capacity].into_boxed_slice();

        Self {
            slots,
            probes,
            size: 0,
            policy: config.duplicate_policy,
            hash_fn,
        }
    }

    /// Home slot of `key`. Out of range hash values are folded back into
    /// the table.
    pub fn home_slot(&self, key: &str) -> usize {
        (self.hash_fn)(key) % self.capacity()
    }

    /// Find the slot index for a key
    /// if the key is found, returns Ok(index),
    /// if the key is not found returns Err with the first empty slot index,
    /// or Err(capacity) when the probe wrapped around the whole table
    fn find_slot(&self, key: &str) -> Result<usize, usize> {
        let capacity = self.capacity();
        let mut index = self.home_slot(key);

        // Linear probing
        for _ in 0..capacity {
            match &self.slots[index] {
                Slot::Empty => return Err(index),
                Slot::Occupied(record) if record.key() == key => return Ok(index),
                Slot::Occupied(_) => {
                    trace!("probe for {key:?} passed occupied slot {index}");
                    index = (index + 1) % capacity;
                }
            }
        }

        Err(capacity)
    }

    fn next_vacant(&self, home: usize) -> Option<usize> {
        let capacity = self.capacity();
        (0..capacity)
            .map(|step| (home + step) % capacity)
            .find(|&index| self.slots[index].is_empty())
    }

    fn duplicate(&self, key: &str, slot: usize) -> TableError {
        warn!("rejecting {key:?}: already stored at slot {slot}");
        TableError::DuplicateKey {
            key: key.to_owned(),
            slot,
        }
    }

    fn full(&self, key: &str) -> TableError {
        warn!("rejecting {key:?}: all {} slots occupied", self.capacity());
        TableError::TableFull {
            capacity: self.capacity(),
        }
    }

    /// Insert a record, returning the slot it was stored in.
    ///
    /// Every probe step taken to reach the first empty slot increments the
    /// probe counter of the slot it lands on. A rejected insert leaves the
    /// table untouched and drops `record`.
    pub fn insert(&mut self, record: R) -> error::Result<usize> {
        if self.is_full() {
            return Err(self.full(record.key()));
        }

        let home = self.home_slot(record.key());
        let slot = match self.policy {
            DuplicatePolicy::ProbeChain => match self.find_slot(record.key()) {
                Ok(existing) => return Err(self.duplicate(record.key(), existing)),
                Err(vacant) => vacant,
            },
            DuplicatePolicy::HomeSlot => {
                let same_key = self.slots[home]
                    .record()
                    .is_some_and(|stored| stored.key() == record.key());
                if same_key {
                    return Err(self.duplicate(record.key(), home));
                }
                self.next_vacant(home).unwrap_or(self.capacity())
            }
        };

        // Size and slots disagree, there is no empty slot to land on
        if slot == self.capacity() {
            return Err(self.full(record.key()));
        }

        let capacity = self.capacity();
        let mut index = home;
        while index != slot {
            index = (index + 1) % capacity;
            self.probes[index] += 1;
        }

        debug!("inserted {:?} at slot {slot} (home slot {home})", record.key());
        self.slots[slot] = Slot::Occupied(record);
        self.size += 1;

        Ok(slot)
    }

    /// Slot index holding `key`
    pub fn position(&self, key: &str) -> error::Result<usize> {
        if self.is_empty() {
            return Err(TableError::EmptyTable);
        }

        match self.find_slot(key) {
            Ok(slot) => {
                debug!("found {key:?} at slot {slot}");
                Ok(slot)
            }
            Err(_) => Err(TableError::NotFound {
                key: key.to_owned(),
            }),
        }
    }

    /// Get the record stored under `key`
    pub fn search(&self, key: &str) -> error::Result<&R> {
        let slot = self.position(key)?;
        self.slots[slot].record().ok_or_else(|| TableError::NotFound {
            key: key.to_owned(),
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_ok()
    }
}

impl<R, H> fmt::Debug for ProbeTable<R, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeTable")
            .field("capacity", &self.capacity())
            .field("size", &self.size)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl<'a, R, H> IntoIterator for &'a ProbeTable<R, H> {
    type Item = (usize, &'a R);
    type IntoIter = Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn first_digit(key: &str) -> usize {
        (key.as_bytes()[0] - b'0') as usize
    }

    fn always_two(_: &str) -> usize {
        2
    }

    fn byte_sum(key: &str) -> usize {
        key.bytes().map(usize::from).sum()
    }

    // Basic functionality tests
    #[test]
    fn test_new_table_is_empty() {
        let table: ProbeTable<String, _> = ProbeTable::new(byte_sum);

        assert_eq!(table.capacity(), DEFAULT_CAPACITY);
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
        assert!(!table.is_full());
        assert!(table.probe_counts().iter().all(|&p| p == 0));
        assert!(table.dump_all().is_empty());
        assert_eq!(table.duplicate_policy(), DuplicatePolicy::ProbeChain);
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity_panics() {
        let _table: ProbeTable<String, _> = ProbeTable::with_capacity(0, byte_sum);
    }

    #[test]
    fn test_fill_to_capacity() {
        let mut table = ProbeTable::with_capacity(5, first_digit);

        for key in ["0x", "1x", "2x", "3x", "4x"] {
            assert!(table.insert(key.to_string()).is_ok());
        }
        assert_eq!(table.len(), 5);
        assert!(table.is_full());

        let result = table.insert("5x".to_string());
        assert_eq!(result, Err(TableError::TableFull { capacity: 5 }));
        assert_eq!(table.len(), 5);
    }

    #[test]
    fn test_full_table_rejects_stored_key_as_full() {
        for policy in [DuplicatePolicy::HomeSlot, DuplicatePolicy::ProbeChain] {
            let config = TableConfig::default()
                .with_capacity(2)
                .with_duplicate_policy(policy);
            let mut table = ProbeTable::with_config(config, always_two);
            table.insert("a".to_string()).unwrap();
            table.insert("b".to_string()).unwrap();

            for key in ["a", "b"] {
                assert_eq!(
                    table.insert(key.to_string()),
                    Err(TableError::TableFull { capacity: 2 }),
                    "{policy:?} {key}"
                );
            }
            assert_eq!(table.len(), 2);
            assert_eq!(table.probe_counts(), &[0, 1]);
        }
    }

    #[test]
    fn test_linear_probing_on_collision() {
        let mut table = ProbeTable::with_capacity(5, always_two);

        assert_eq!(table.insert("a".to_string()), Ok(2));
        assert_eq!(table.insert("b".to_string()), Ok(3));
        assert_eq!(table.insert("c".to_string()), Ok(4));

        assert_eq!(table.search("b"), Ok(&"b".to_string()));
        assert_eq!(table.position("b"), Ok(3));
        assert_eq!(table.position("c"), Ok(4));
        assert_eq!(table.probe_counts(), &[0, 0, 0, 2, 1]);
    }

    #[test]
    fn test_probe_wraps_around() {
        let mut table = ProbeTable::with_capacity(3, always_two);

        assert_eq!(table.insert("a".to_string()), Ok(2));
        assert_eq!(table.insert("b".to_string()), Ok(0));
        assert_eq!(table.insert("c".to_string()), Ok(1));

        assert_eq!(table.search("c"), Ok(&"c".to_string()));
        assert_eq!(table.probe_counts(), &[2, 1, 0]);
    }

    #[test]
    fn test_search_empty_table() {
        let table: ProbeTable<String, _> = ProbeTable::with_capacity(5, byte_sum);
        assert_eq!(table.search("anything"), Err(TableError::EmptyTable));
        assert!(!table.contains_key("anything"));
    }

    #[test]
    fn test_search_home_slot_empty() {
        let mut table = ProbeTable::with_capacity(5, first_digit);
        table.insert("1k".to_string()).unwrap();

        assert_eq!(
            table.search("3k"),
            Err(TableError::NotFound {
                key: "3k".to_string()
            })
        );
    }

    #[test]
    fn test_search_collision_then_empty() {
        let mut table = ProbeTable::with_capacity(5, |_: &str| 1);
        table.insert("k1".to_string()).unwrap();

        assert_eq!(
            table.search("k2"),
            Err(TableError::NotFound {
                key: "k2".to_string()
            })
        );
    }

    #[test]
    fn test_search_full_table_miss() {
        let mut table = ProbeTable::with_capacity(4, always_two);
        for key in ["a", "b", "c", "d"] {
            table.insert(key.to_string()).unwrap();
        }

        assert_eq!(
            table.search("z"),
            Err(TableError::NotFound {
                key: "z".to_string()
            })
        );
    }

    #[test]
    fn test_out_of_range_hash_is_folded() {
        let mut table = ProbeTable::with_capacity(5, |_: &str| 12);
        assert_eq!(table.home_slot("x"), 2);
        assert_eq!(table.insert("x".to_string()), Ok(2));
        assert!(table.contains_key("x"));
    }

    #[test]
    fn test_duplicate_at_home_slot() {
        for policy in [DuplicatePolicy::HomeSlot, DuplicatePolicy::ProbeChain] {
            let config = TableConfig::default()
                .with_capacity(5)
                .with_duplicate_policy(policy);
            let mut table = ProbeTable::with_config(config, first_digit);

            table.insert("2a".to_string()).unwrap();
            let result = table.insert("2a".to_string());

            assert_eq!(
                result,
                Err(TableError::DuplicateKey {
                    key: "2a".to_string(),
                    slot: 2
                })
            );
            assert_eq!(table.len(), 1);
        }
    }

    #[test]
    fn test_probe_chain_rejects_displaced_duplicate() {
        let mut table = ProbeTable::with_capacity(5, always_two);
        table.insert("a".to_string()).unwrap();
        table.insert("b".to_string()).unwrap();

        let before = table.probe_counts().to_vec();
        let result = table.insert("b".to_string());

        assert_eq!(
            result,
            Err(TableError::DuplicateKey {
                key: "b".to_string(),
                slot: 3
            })
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.probe_counts(), before.as_slice());
    }

    #[test]
    fn test_home_slot_policy_accepts_displaced_duplicate() {
        let config = TableConfig::default()
            .with_capacity(5)
            .with_duplicate_policy(DuplicatePolicy::HomeSlot);
        let mut table = ProbeTable::with_config(config, always_two);
        table.insert("a".to_string()).unwrap();
        table.insert("b".to_string()).unwrap();

        assert_eq!(table.insert("b".to_string()), Ok(4));
        assert_eq!(table.len(), 3);

        let copies = table.iter().filter(|(_, key)| key.as_str() == "b").count();
        assert_eq!(copies, 2);
        // lookups stop at the first copy on the chain
        assert_eq!(table.position("b"), Ok(3));
    }

    #[test]
    fn test_dump_all_in_slot_order() {
        let mut table = ProbeTable::with_capacity(10, first_digit);
        for key in ["7z", "2y", "5x", "2w"] {
            table.insert(key.to_string()).unwrap();
        }

        let slots: Vec<_> = table
            .dump_all()
            .into_iter()
            .map(|(index, key)| (index, key.clone()))
            .collect();
        assert_eq!(
            slots,
            vec![
                (2, "2y".to_string()),
                (3, "2w".to_string()),
                (5, "5x".to_string()),
                (7, "7z".to_string()),
            ]
        );

        let from_ref: Vec<_> = (&table).into_iter().map(|(index, _)| index).collect();
        assert_eq!(from_ref, vec![2, 3, 5, 7]);
        assert_eq!(table.listing().to_string(), "2 2y\n3 2w\n5 5x\n7 7z\n");
    }

    #[test]
    fn test_get_slot() {
        let mut table = ProbeTable::with_capacity(5, first_digit);
        table.insert("3q".to_string()).unwrap();

        assert_eq!(table.get_slot(3), Some(&"3q".to_string()));
        assert_eq!(table.get_slot(0), None);
        assert_eq!(table.get_slot(99), None);
    }

    #[test]
    fn test_collision_stats() {
        let mut table = ProbeTable::with_capacity(6, always_two);
        for key in ["a", "b", "c", "d"] {
            table.insert(key.to_string()).unwrap();
        }

        // steps landed on slot 3 three times, slot 4 twice, slot 5 once
        let stats = table.collision_stats();
        assert_eq!(stats.records, 4);
        assert_eq!(stats.empty_cells, 3);
        assert_eq!(stats.single_probe, 1);
        assert_eq!(stats.multi_probe.len(), 2);
        assert_eq!(stats.slots(), table.capacity());
        assert_eq!(stats.total_probes(), 6);

        let histogram = table.histogram().to_string();
        assert!(histogram.contains("At slot[3]: ***\n"));
        assert!(histogram.contains("At slot[0]: \n"));
    }

    #[test]
    fn test_load_factor() {
        let mut table = ProbeTable::with_capacity(4, first_digit);
        table.insert("0a".to_string()).unwrap();
        assert_eq!(table.load_factor(), 0.25);
    }

    #[test]
    fn test_boxed_records() {
        let mut table: ProbeTable<Box<String>, _> = ProbeTable::with_capacity(8, byte_sum);
        table.insert(Box::new("boxed".to_string())).unwrap();
        assert_eq!(table.search("boxed").map(|b| b.as_str()), Ok("boxed"));
    }

    fn check_prop(keys: HashSet<String>, capacity: usize) {
        let mut table = ProbeTable::with_capacity(capacity, byte_sum);
        let mut inserted = Vec::new();

        for key in keys {
            match table.insert(key.clone()) {
                Ok(_) => inserted.push(key),
                Err(err) => {
                    assert_eq!(err, TableError::TableFull { capacity });
                    assert_eq!(inserted.len(), capacity);
                }
            }
        }

        assert_eq!(table.len(), inserted.len());
        assert_eq!(table.is_empty(), inserted.is_empty());
        assert_eq!(table.collision_stats().slots(), capacity);

        for key in &inserted {
            assert_eq!(table.search(key), Ok(key), "key: {key:?}");
        }
    }

    #[test]
    fn it_finds_every_inserted_key() {
        let keys = proptest::collection::hash_set("[0-9a-z-]{1,12}", 0..150);

        proptest!(|(keys in keys, capacity in 1usize..120)| {
            check_prop(keys, capacity);
        });
    }

    #[test]
    fn it_rejects_inserts_when_full() {
        proptest!(|(capacity in 1usize..40, key in "[a-z]{1,8}")| {
            let mut table = ProbeTable::with_capacity(capacity, byte_sum);
            for i in 0..capacity {
                table.insert(format!("filler-{i}")).unwrap();
            }
            prop_assert_eq!(table.insert(key), Err(TableError::TableFull { capacity }));
            prop_assert_eq!(table.len(), capacity);
        });
    }

    #[test]
    fn it_rejects_stored_keys_when_full() {
        let policies = prop_oneof![
            Just(DuplicatePolicy::HomeSlot),
            Just(DuplicatePolicy::ProbeChain)
        ];

        proptest!(|(capacity in 1usize..40, pick in any::<usize>(), policy in policies)| {
            let config = TableConfig::default()
                .with_capacity(capacity)
                .with_duplicate_policy(policy);
            let mut table = ProbeTable::with_config(config, byte_sum);
            for i in 0..capacity {
                table.insert(format!("filler-{i}")).unwrap();
            }

            let stored = format!("filler-{}", pick % capacity);
            prop_assert_eq!(table.insert(stored), Err(TableError::TableFull { capacity }));
            prop_assert_eq!(table.len(), capacity);
        });
    }

    #[test]
    fn it_finds_every_key_under_constant_hash() {
        let keys = proptest::collection::hash_set("[a-z]{1,6}", 1..30);

        proptest!(|(keys in keys)| {
            let mut table = ProbeTable::with_capacity(30, always_two);
            for key in &keys {
                table.insert(key.clone()).unwrap();
            }
            for key in &keys {
                prop_assert_eq!(table.search(key), Ok(key));
            }
            prop_assert_eq!(table.collision_stats().slots(), 30);
        });
    }
}
