mod hash_table;

use crate::macros::impl_probe_key;

pub use hash_table::{DEFAULT_CAPACITY, HashTable, Iter, MIN_CAPACITY, Slot};

/// Keys the [`HashTable`] knows how to probe for
///
/// Strings reduce to the sum of their code points, unsigned integers
/// to their own value.
pub trait ProbeKey {
    fn ordinal(&self) -> u64;
}

impl ProbeKey for str {
    fn ordinal(&self) -> u64 {
        self.chars().map(u64::from).sum()
    }
}

impl ProbeKey for String {
    fn ordinal(&self) -> u64 {
        self.as_str().ordinal()
    }
}

impl<T: ProbeKey + ?Sized> ProbeKey for &T {
    fn ordinal(&self) -> u64 {
        (**self).ordinal()
    }
}

impl_probe_key!(u8, u16, u32, u64, usize);
