//! Deterministic term hashing
//!
//! Every term type derives `Hash` together with `Eq`, so equal values always
//! feed identical bytes to the hasher. `TermHash` turns that into a plain
//! `u64` using `FxHasher`, which has no per-process random state: the same
//! term hashes to the same code in every run.

use super::term::RdfTerm;
use rustc_hash::{FxHashMap, FxHashSet, FxHasher};
use std::hash::{Hash, Hasher};

/// Set of terms keyed by RDF term equality
pub type TermSet = FxHashSet<RdfTerm>;

/// Map keyed by RDF term equality
pub type TermMap<V> = FxHashMap<RdfTerm, V>;

/// Integer hash code consistent with the value's equality
pub trait TermHash {
    fn hash_code(&self) -> u64;
}

impl<T: Hash + ?Sized> TermHash for T {
    fn hash_code(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }
}
