//! Container nodes: sequences, sets, and keyed mappings.
//!
//! A container is non-null iff any element is; an empty container never
//! is. Mappings contribute their values only — keys are never inspected.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::error::Result;
use crate::inspect::{Inspect, any_non_null};

impl<T: Inspect> Inspect for [T] {
    fn deep_non_null(&self) -> Result<bool> {
        any_non_null(self)
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn deep_non_null(&self) -> Result<bool> {
        any_non_null(self)
    }
}

impl<T: Inspect> Inspect for Vec<T> {
    fn deep_non_null(&self) -> Result<bool> {
        any_non_null(self)
    }
}

impl<T: Inspect> Inspect for VecDeque<T> {
    fn deep_non_null(&self) -> Result<bool> {
        any_non_null(self)
    }
}

impl<T: Inspect> Inspect for HashSet<T> {
    fn deep_non_null(&self) -> Result<bool> {
        any_non_null(self)
    }
}

impl<T: Inspect> Inspect for BTreeSet<T> {
    fn deep_non_null(&self) -> Result<bool> {
        any_non_null(self)
    }
}

impl<K, V: Inspect> Inspect for HashMap<K, V> {
    fn deep_non_null(&self) -> Result<bool> {
        any_non_null(self.values())
    }
}

impl<K, V: Inspect> Inspect for BTreeMap<K, V> {
    fn deep_non_null(&self) -> Result<bool> {
        any_non_null(self.values())
    }
}
