//! Binding layer
//!
//! A [`Connector`] pairs two pure mapping functions:
//! - `map_state`: state -> derived inputs (props) of a component
//! - `map_dispatch`: dispatcher -> derived actions (callbacks) of a component
//!
//! The rendering layer asks the resulting [`Connected`] for props and
//! actions itself, nothing is injected behind its back. Both mapping
//! functions can be exercised without a store, see [`Connector::state_props`]
//! and [`Connector::dispatch_props`].

use crate::action::Action;
use crate::error::StoreError;
use crate::store::{Store, Unsubscribe};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Anything actions can be dispatched to
pub trait Dispatch<A> {
    fn dispatch(&self, action: A) -> Result<A, StoreError>;
}

impl<S: 'static, A: Action + 'static> Dispatch<A> for Store<S, A> {
    fn dispatch(&self, action: A) -> Result<A, StoreError> {
        Store::dispatch(self, action)
    }
}

type MapState<S, P> = Box<dyn Fn(&S) -> P>;
type MapDispatch<A, D> = Box<dyn Fn(Rc<dyn Dispatch<A>>) -> D>;

/// Pair of mapping functions for one component
pub struct Connector<S, A, P, D> {
    map_state: MapState<S, P>,
    map_dispatch: MapDispatch<A, D>,
}

impl<S, A, P, D> Connector<S, A, P, D> {
    pub fn new<MS, MD>(map_state: MS, map_dispatch: MD) -> Self
    where
        MS: Fn(&S) -> P + 'static,
        MD: Fn(Rc<dyn Dispatch<A>>) -> D + 'static,
    {
        Self {
            map_state: Box::new(map_state),
            map_dispatch: Box::new(map_dispatch),
        }
    }

    /// Apply `map_state` to a state value
    pub fn state_props(&self, state: &S) -> P {
        (self.map_state)(state)
    }

    /// Apply `map_dispatch` to a dispatcher
    pub fn dispatch_props(&self, dispatch: Rc<dyn Dispatch<A>>) -> D {
        (self.map_dispatch)(dispatch)
    }
}

impl<S, A, P> Connector<S, A, P, ()> {
    /// Connector for a component that only reads state
    pub fn state_only<MS>(map_state: MS) -> Self
    where
        MS: Fn(&S) -> P + 'static,
    {
        Self::new(map_state, |_| ())
    }
}

impl<S: 'static, A: Action + 'static, P, D> Connector<S, A, P, D> {
    /// Bind the connector to a store
    pub fn connect(self, store: &Store<S, A>) -> Connected<S, A, P, D> {
        let dispatcher: Rc<dyn Dispatch<A>> = Rc::new(store.clone());
        let actions = (self.map_dispatch)(dispatcher);

        let changed = Rc::new(Cell::new(true));
        let flag = Rc::clone(&changed);
        let subscription = store.subscribe(move || flag.set(true));

        Connected {
            store: store.clone(),
            map_state: self.map_state,
            actions,
            cache: RefCell::new(None),
            changed,
            subscription,
        }
    }
}

/// A connector bound to a store
///
/// Props are derived lazily and memoized on the state pointer: as long as
/// the store hands back the same `Rc`, `map_state` is not called again.
pub struct Connected<S, A, P, D> {
    store: Store<S, A>,
    map_state: MapState<S, P>,
    actions: D,
    cache: RefCell<Option<(Rc<S>, Rc<P>)>>,
    changed: Rc<Cell<bool>>,
    subscription: Unsubscribe,
}

impl<S: 'static, A: Action + 'static, P, D> Connected<S, A, P, D> {
    /// Props derived from the current state
    pub fn props(&self) -> Rc<P> {
        let state = self.store.state();
        if let Some((seen, props)) = self.cache.borrow().as_ref() {
            if Rc::ptr_eq(seen, &state) {
                return Rc::clone(props);
            }
        }

        let props = Rc::new((self.map_state)(&state));
        *self.cache.borrow_mut() = Some((state, Rc::clone(&props)));
        props
    }

    /// Derived actions
    pub fn actions(&self) -> &D {
        &self.actions
    }

    /// Whether the store notified since the last call
    pub fn take_changed(&self) -> bool {
        self.changed.replace(false)
    }

    /// Stop listening to the store
    pub fn disconnect(&self) {
        self.subscription.unsubscribe();
    }
}

impl<S, A, P, D> Drop for Connected<S, A, P, D> {
    fn drop(&mut self) {
        self.subscription.unsubscribe();
    }
}
