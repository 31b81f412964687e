//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// Position of a word in the vocabulary.
///
/// This is the embedding row and output id used by the trainer.
pub type WordIndex = usize;

/// Dense hierarchical-softmax class id.
pub type ClassIndex = usize;

/// The reserved end-of-sentence token.
pub const END_OF_SENTENCE: &str = "</s>";

/// The reserved start-of-sentence token.
///
/// It is never part of the learnable vocabulary.
pub const START_OF_SENTENCE: &str = "<s>";

/// A type that can be used as a word count.
pub trait CountType:
    'static
    + PrimInt
    + Unsigned
    + FromPrimitive
    + ToPrimitive
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> CountType for T where
    T: 'static
        + PrimInt
        + Unsigned
        + FromPrimitive
        + ToPrimitive
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type VocabHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> VocabHashMap<K, V> {
            VocabHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type VocabHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type VocabHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> VocabHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type VocabHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type VocabHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> VocabHashMap<K, V> {
            VocabHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type VocabHashSet<V> = std::collections::HashSet<V>;
    }
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_count_types() {
        struct IsCount<T: CountType>(PhantomData<T>);

        let _: IsCount<u16>;
        let _: IsCount<u32>;
        let _: IsCount<u64>;
        let _: IsCount<usize>;
    }

    #[test]
    fn test_hash_map_with_capacity() {
        let mut map: VocabHashMap<String, usize> = hash_map_with_capacity(4);
        map.insert("the".to_string(), 1);
        assert_eq!(map.get("the"), Some(&1));

        let set: VocabHashSet<usize> = [1, 2, 2].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
