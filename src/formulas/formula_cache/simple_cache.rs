use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{PoisonError, RwLock};

use dashmap::DashMap;

use crate::formulas::formula_cache::CACHE_INITIAL_CAPACITY;
use crate::formulas::FormulaType;

use super::formula_encoding::FormulaEncoding;

/// Interning cache for one kind of formula node.
///
/// Every distinct element is stored once. Inserting an element that is already
/// present returns the encoding handed out the first time, which makes
/// structural equality of formulas an equality of encodings.
pub struct SimpleCache<T: Hash + Eq + Clone + Debug> {
    ty: FormulaType,
    vec: RwLock<Vec<T>>,
    reverse_map: DashMap<T, FormulaEncoding>,
}

impl<T: Hash + Eq + Clone + Debug> SimpleCache<T> {
    pub fn new(ty: FormulaType) -> Self {
        Self { ty, vec: RwLock::new(Vec::with_capacity(CACHE_INITIAL_CAPACITY)), reverse_map: DashMap::with_capacity(CACHE_INITIAL_CAPACITY) }
    }

    /// Returns the element stored for `index`, or `None` if `index` was not
    /// handed out by this cache.
    pub fn get(&self, index: FormulaEncoding) -> Option<T> {
        debug_assert_eq!(index.formula_type(), self.ty, "encoding does not belong to this cache");
        self.vec.read().unwrap_or_else(PoisonError::into_inner).get(index.slot()).cloned()
    }

    pub fn get_or_insert(&self, element: T) -> FormulaEncoding {
        // first a fast check whether the element is already there.
        if let Some(v) = self.reverse_map.get(&element) {
            return *v;
        }

        // The entry guard keeps concurrent inserts of the same element from
        // pushing it twice.
        *self.reverse_map.entry(element.clone()).or_insert_with(|| {
            let mut vec = self.vec.write().unwrap_or_else(PoisonError::into_inner);
            vec.push(element);
            FormulaEncoding::encode((vec.len() - 1) as u64, self.ty)
        })
    }

    pub fn lookup<Q>(&self, element: &Q) -> Option<FormulaEncoding>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.reverse_map.get(element).map(|v| *v)
    }

    pub fn len(&self) -> usize {
        self.vec.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
