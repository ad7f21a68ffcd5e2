//! Minimal unidirectional state container
//!
//! This crate provides:
//! - [`Store`]: holds one immutable state tree, reduces dispatched actions
//!   into the next state and notifies subscribers
//! - [`combine_reducers`]: builds a root reducer from per-key slice reducers
//! - [`Connector`]: explicit binding layer mapping state and dispatch into
//!   component inputs
//! - [`ActionRecord`]: the loosely typed `{ type, payload }` action shape

pub mod action;
pub mod combine;
pub mod connect;
pub mod error;
pub mod store;

pub use action::{Action, ActionRecord, INIT_ACTION_TYPE};
pub use combine::{combine_reducers, CombinedReducer, CombinedState, ReducerMap, SliceValue};
pub use connect::{Connected, Connector, Dispatch};
pub use error::StoreError;
pub use store::{create_store, Reducer, Store, Unsubscribe};
