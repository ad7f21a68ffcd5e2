//! Errors raised by the store and the reducer combinator.

use thiserror::Error;

/// Store error
///
/// Configuration errors (`EmptyReducerMap`, `DuplicateSliceKey`,
/// `SliceTypeMismatch`) surface when the store is built. The others are
/// returned by `dispatch` before any state is committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// `combine_reducers` was handed a map without any slice.
    #[error("reducer map is empty")]
    EmptyReducerMap,

    /// The same key was registered twice.
    #[error("duplicate slice key `{0}`")]
    DuplicateSliceKey(String),

    /// A slice holds a value of another type than its reducer produces.
    #[error("slice `{key}` does not hold the type its reducer expects")]
    SliceTypeMismatch { key: String },

    /// The action carries no `type` discriminator.
    #[error("action has no `type`")]
    InvalidAction,

    /// `dispatch` was called from inside a reducer.
    #[error("reducers may not dispatch actions")]
    DispatchWhileReducing,
}
