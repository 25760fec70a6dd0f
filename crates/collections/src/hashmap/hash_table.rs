use std::borrow::Borrow;

use log::{debug, trace};

use super::ProbeKey;

pub const DEFAULT_CAPACITY: usize = 10;

/// Smallest table that can still grow on its first insert
pub const MIN_CAPACITY: usize = 2;

/// Width, in bits, of the window the probing hash keeps once it starts truncating
const INDEX_BITS: usize = 8;

/// Probes past `2 * capacity + PROBE_SLACK` attempts walk the table linearly
const PROBE_SLACK: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K, V> {
    Empty,
    /// Tombstone left by a removal, probing continues past it
    Deleted,
    Occupied(K, V),
}

impl<K, V> Slot<K, V> {
    fn is_free(&self) -> bool {
        matches!(self, Slot::Empty | Slot::Deleted)
    }
}

/// Open addressing map with tombstones
///
/// The table doubles once half of its slots are occupied and halves
/// when fewer than a quarter are, rehashing every live entry each time.
///
/// Use `std::collections::HashMap` for anything real, the probing hash here
/// is deliberately simple and far from uniform.
#[derive(Debug)]
pub struct HashTable<K, V> {
    pub(crate) slots: Vec<Slot<K, V>>,
    pub(crate) occupied: usize,
}

#[derive(Debug)]
pub struct Iter<'a, K, V> {
    slots: std::slice::Iter<'a, Slot<K, V>>,
}

impl<K: ProbeKey + Eq, V> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<K: ProbeKey + Eq, V> HashTable<K, V> {
    /// Creates a new `HashTable` with `cap` many slots
    ///
    /// # Note
    ///
    /// Capacities below [`MIN_CAPACITY`] are raised to it
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            slots: Self::empty_slots(cap.max(MIN_CAPACITY)),
            occupied: 0,
        }
    }

    /// Returns the number of live entries
    pub fn len(&self) -> usize {
        self.occupied
    }

    /// Shorthand for `self.len() == 0`
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f32 {
        self.occupied as f32 / self.capacity() as f32
    }

    /// Raw view of the backing slots, tombstones included
    pub fn slots(&self) -> &[Slot<K, V>] {
        &self.slots
    }

    /// Insert a key-value pair into the table,
    /// returning the previous value (if there was any)
    pub fn add(&mut self, key: K, value: V) -> Option<V> {
        if let Some(Slot::Occupied(_, old)) = self.probe(&key).map(|i| &mut self.slots[i]) {
            return Some(std::mem::replace(old, value));
        }

        self.insert_without_resize(key, value);
        self.resize(false);
        None
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ProbeKey + Eq + ?Sized,
    {
        match self.probe(key).map(|i| &self.slots[i]) {
            Some(Slot::Occupied(_, value)) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ProbeKey + Eq + ?Sized,
    {
        match self.probe(key).map(|i| &mut self.slots[i]) {
            Some(Slot::Occupied(_, value)) => Some(value),
            _ => None,
        }
    }

    pub fn exists<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ProbeKey + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes `key`, leaving a tombstone in its slot
    ///
    /// Removing a key that is not there does nothing.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ProbeKey + Eq + ?Sized,
    {
        let i = self.probe(key)?;
        match std::mem::replace(&mut self.slots[i], Slot::Deleted) {
            Slot::Occupied(_, value) => {
                self.occupied -= 1;
                self.resize(true);
                Some(value)
            }
            other => {
                // probe only stops on a match or an empty slot
                self.slots[i] = other;
                None
            }
        }
    }

    // [adapters]

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    // [private]

    fn empty_slots(cap: usize) -> Vec<Slot<K, V>> {
        (0..cap).map(|_| Slot::Empty).collect()
    }

    fn probe_limit(&self) -> usize {
        2 * self.capacity() + PROBE_SLACK
    }

    /// Slot visited on the `position`-th attempt (1-based) for `ordinal`
    ///
    /// The first attempts follow [`probe_hash`], which can cycle without ever
    /// reaching some slots, so past [`Self::probe_limit`] the walk goes
    /// linearly from the last hashed slot and is bound to cover the table.
    fn slot_for(&self, ordinal: u64, position: usize) -> usize {
        let limit = self.probe_limit();
        if position <= limit {
            probe_hash(ordinal, position, self.capacity())
        } else {
            (probe_hash(ordinal, limit, self.capacity()) + position - limit) % self.capacity()
        }
    }

    /// Every slot index `key` may live in, in probing order
    fn probe_sequence(&self, ordinal: u64) -> impl Iterator<Item = usize> + '_ {
        (1..=self.probe_limit() + self.capacity()).map(move |pos| self.slot_for(ordinal, pos))
    }

    /// Index of the slot holding `key`, or of the empty slot that ends its chain
    ///
    /// Returns `None` only when the whole table is tombstones and other keys.
    fn probe<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ProbeKey + Eq + ?Sized,
    {
        self.probe_sequence(key.ordinal())
            .find(|&i| match &self.slots[i] {
                Slot::Empty => true,
                Slot::Deleted => false,
                Slot::Occupied(k, _) => <K as Borrow<Q>>::borrow(k) == key,
            })
    }

    /// Places an entry in the first free slot of its probe sequence
    /// without checking the load afterwards
    fn insert_without_resize(&mut self, key: K, value: V) {
        let free = self
            .probe_sequence(key.ordinal())
            .find(|&i| self.slots[i].is_free());

        match free {
            Some(i) => {
                self.slots[i] = Slot::Occupied(key, value);
                self.occupied += 1;
            }
            None => {
                // the load check keeps a free slot around, this is a safety net
                trace!(target: "hash_table", "no free slot in {} slots, growing", self.capacity());
                self.rehash(self.capacity() * 2);
                self.insert_without_resize(key, value);
            }
        }
    }

    /// Doubles the table once half of it is occupied,
    /// halves it when `shrink` is set and less than a quarter is
    fn resize(&mut self, shrink: bool) {
        if let Some(cap) = self.next_capacity(shrink) {
            self.rehash(cap);
        }
    }

    fn next_capacity(&self, shrink: bool) -> Option<usize> {
        let cap = self.capacity();
        if self.occupied == cap / 2 {
            Some(cap * 2)
        } else if shrink && self.occupied < cap / 4 {
            Some((cap / 2).max(MIN_CAPACITY))
        } else {
            None
        }
    }

    /// Moves every live entry into a fresh table of `cap` slots,
    /// tombstones are dropped along the way
    ///
    /// # Panics
    ///
    /// This will not allocate more than `isize::MAX`
    /// and will panic if it ever tries to
    fn rehash(&mut self, cap: usize) {
        let old = std::mem::replace(&mut self.slots, Self::empty_slots(cap));
        let old_cap = old.len();
        self.occupied = 0;

        for slot in old {
            if let Slot::Occupied(key, value) = slot {
                self.insert_without_resize(key, value);
            }
        }

        debug!(
            target: "hash_table",
            "resized {} -> {} slots, {} entries rehashed",
            old_cap,
            cap,
            self.occupied
        );
    }
}

/// Probe dependent hash of `ordinal` into `0..capacity`
///
/// The first attempt reduces the binary form of `ordinal` directly.
/// Once `position - 1` reaches the bit length of `ordinal`, the binary form of
/// `ordinal * position * 2` is appended and the window widens to 16 bits.
/// Later attempts drop the lowest `position - 1` bits and keep the trailing
/// window. A window truncated to nothing reads as 0.
pub(crate) fn probe_hash(ordinal: u64, position: usize, capacity: usize) -> usize {
    let mut bits = format!("{ordinal:b}");
    let mut index_bits = INDEX_BITS;

    if position.saturating_sub(1) >= bits.len() {
        let widened = u128::from(ordinal)
            .saturating_mul(position as u128)
            .saturating_mul(2);
        bits.push_str(&format!("{widened:b}"));
        index_bits *= 2;
    }

    let window = if bits.len() > index_bits && position > 1 {
        let end = bits.len().saturating_sub(position - 1);
        &bits[end.saturating_sub(index_bits)..end]
    } else {
        bits.as_str()
    };

    // `window` only ever holds `0`s and `1`s, the empty window is the one error
    let value = u128::from_str_radix(window, 2).unwrap_or(0);
    (value % capacity as u128) as usize
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.find_map(|slot| match slot {
            Slot::Occupied(k, v) => Some((k, v)),
            _ => None,
        })
    }
}

impl<'a, K: ProbeKey + Eq, V> IntoIterator for &'a HashTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
