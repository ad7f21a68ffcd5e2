//! Reducer composition
//!
//! [`combine_reducers`] builds one root reducer out of independent slice
//! reducers, one per key of the composed [`CombinedState`]. Each slice
//! reducer only ever sees its own slice.

use crate::error::StoreError;
use crate::store::Reducer;
use std::any::Any;
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

/// A value that can live in a slice of a [`CombinedState`]
pub trait SliceValue: Any + fmt::Debug {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Rc<Self>) -> Rc<dyn Any>;
    fn eq_slice(&self, other: &dyn SliceValue) -> bool;
}

impl<T: Any + fmt::Debug + PartialEq> SliceValue for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }

    fn eq_slice(&self, other: &dyn SliceValue) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

type SliceRef = Rc<dyn SliceValue>;

fn slice_addr(slice: &SliceRef) -> *const () {
    Rc::as_ptr(slice) as *const ()
}

/// State composed of named slices
///
/// Equality compares slices by value; `Rc::ptr_eq` on two combined states
/// tells whether anything changed at all.
#[derive(Clone, Default)]
pub struct CombinedState {
    slices: Vec<(String, SliceRef)>,
}

impl CombinedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a slice, replacing an existing one with the same key
    pub fn with_slice<T: SliceValue>(mut self, key: impl Into<String>, value: T) -> Self {
        let key = key.into();
        let value: SliceRef = Rc::new(value);
        match self.slices.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.slices.push((key, value)),
        }
        self
    }

    /// Typed access to one slice
    pub fn get<T: SliceValue>(&self, key: &str) -> Option<Rc<T>> {
        let slice = Rc::clone(self.raw(key)?);
        slice.into_any().downcast::<T>().ok()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slices.iter().map(|(key, _)| key.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    fn raw(&self, key: &str) -> Option<&SliceRef> {
        self.slices
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, slice)| slice)
    }
}

impl PartialEq for CombinedState {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.slices.iter().all(|(key, slice)| {
                other
                    .raw(key)
                    .is_some_and(|theirs| slice.eq_slice(&**theirs))
            })
    }
}

impl fmt::Debug for CombinedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slices.iter().map(|(key, slice)| (key, slice)))
            .finish()
    }
}

type ErasedReducer<A> = Box<dyn Fn(Option<SliceRef>, &A) -> Result<SliceRef, StoreError>>;

/// Ordered mapping of slice key to slice reducer
pub struct ReducerMap<A> {
    entries: Vec<(String, ErasedReducer<A>)>,
}

impl<A> Default for ReducerMap<A> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<A: 'static> ReducerMap<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the reducer owning slice `key`
    pub fn slice<T, F>(mut self, key: impl Into<String>, reducer: F) -> Self
    where
        T: SliceValue,
        F: Fn(Option<Rc<T>>, &A) -> Rc<T> + 'static,
    {
        let key = key.into();
        let slice_key = key.clone();

        let erased: ErasedReducer<A> = Box::new(move |previous: Option<SliceRef>, action: &A| {
            let typed = match previous {
                Some(slice) => Some(slice.into_any().downcast::<T>().map_err(|_| {
                    StoreError::SliceTypeMismatch {
                        key: slice_key.clone(),
                    }
                })?),
                None => None,
            };
            let next: SliceRef = reducer(typed, action);
            Ok(next)
        });

        self.entries.push((key, erased));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Root reducer built by [`combine_reducers`]
pub struct CombinedReducer<A> {
    entries: Vec<(String, ErasedReducer<A>)>,
}

impl<A> CombinedReducer<A> {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    fn owns(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }
}

/// Combine slice reducers into one root reducer.
///
/// Fails with [`StoreError::EmptyReducerMap`] for an empty map and
/// [`StoreError::DuplicateSliceKey`] when a key is registered twice.
pub fn combine_reducers<A: 'static>(map: ReducerMap<A>) -> Result<CombinedReducer<A>, StoreError> {
    if map.is_empty() {
        return Err(StoreError::EmptyReducerMap);
    }

    let mut seen = HashSet::new();
    for (key, _) in &map.entries {
        if !seen.insert(key.as_str()) {
            return Err(StoreError::DuplicateSliceKey(key.clone()));
        }
    }

    Ok(CombinedReducer {
        entries: map.entries,
    })
}

impl<A> Reducer<CombinedState, A> for CombinedReducer<A> {
    fn reduce(
        &self,
        state: Option<Rc<CombinedState>>,
        action: &A,
    ) -> Result<Rc<CombinedState>, StoreError> {
        let mut changed = match &state {
            Some(previous) => {
                for key in previous.keys().filter(|key| !self.owns(key)) {
                    log::warn!("Dropping state key `{}` without a reducer", key);
                }
                previous.len() != self.entries.len()
            }
            None => true,
        };

        let mut slices = Vec::with_capacity(self.entries.len());
        for (key, reducer) in &self.entries {
            let previous = state.as_ref().and_then(|s| s.raw(key)).cloned();
            let previous_addr = previous.as_ref().map(slice_addr);

            let next = reducer(previous, action)?;
            if previous_addr != Some(slice_addr(&next)) {
                changed = true;
            }
            slices.push((key.clone(), next));
        }

        match state {
            Some(previous) if !changed => Ok(previous),
            _ => Ok(Rc::new(CombinedState { slices })),
        }
    }
}
