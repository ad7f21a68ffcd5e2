use crate::action::Action;
use crate::error::StoreError;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Reducer - pure function that produces the next state from the current
/// state and an action.
///
/// `None` means "no state yet": the reducer returns its default. Actions the
/// reducer does not handle hand the input back unchanged.
///
/// Plain functions `Fn(Option<Rc<S>>, &A) -> Rc<S>` are reducers. The
/// fallible form exists for reducers that validate their input shape, like
/// the combined reducer.
pub trait Reducer<S, A> {
    fn reduce(&self, state: Option<Rc<S>>, action: &A) -> Result<Rc<S>, StoreError>;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(Option<Rc<S>>, &A) -> Rc<S>,
{
    fn reduce(&self, state: Option<Rc<S>>, action: &A) -> Result<Rc<S>, StoreError> {
        Ok(self(state, action))
    }
}

struct Subscription {
    id: u64,
    active: Cell<bool>,
    callback: Box<dyn Fn()>,
}

type Registry = RefCell<Vec<Rc<Subscription>>>;

struct Inner<S, A> {
    reducer: Box<dyn Reducer<S, A>>,
    state: RefCell<Rc<S>>,
    listeners: Rc<Registry>,
    next_listener_id: Cell<u64>,
    reducing: Cell<bool>,
}

/// Store - holds one state tree and runs the dispatch loop
///
/// The store is the only writer of its state:
/// - `dispatch` reduces an action into the next state and commits it
/// - subscribers are notified after every commit and re-read `state()`
/// - state is never mutated in place, each commit swaps the `Rc`
///
/// `Store` is a single-threaded handle. Clones share the same store, so a
/// subscriber may capture one and dispatch again from inside a notification.
/// Nested dispatches complete (commit and their own notification cycle)
/// before the outer notification loop resumes.
pub struct Store<S, A> {
    inner: Rc<Inner<S, A>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S: 'static, A: Action + 'static> Store<S, A> {
    /// Create a store, reducing the init sentinel over `preloaded`
    pub fn new<R>(reducer: R, preloaded: Option<S>) -> Result<Self, StoreError>
    where
        R: Reducer<S, A> + 'static,
    {
        let state = reducer.reduce(preloaded.map(Rc::new), &A::init())?;
        log::debug!("Store created");

        Ok(Self {
            inner: Rc::new(Inner {
                reducer: Box::new(reducer),
                state: RefCell::new(state),
                listeners: Rc::new(RefCell::new(Vec::new())),
                next_listener_id: Cell::new(0),
                reducing: Cell::new(false),
            }),
        })
    }

    /// Get the current state
    pub fn state(&self) -> Rc<S> {
        Rc::clone(&self.inner.state.borrow())
    }

    /// Reduce `action` into the next state, commit it, notify subscribers.
    ///
    /// Malformed actions and dispatches from inside a reducer are rejected
    /// before anything changes. A panicking reducer leaves the committed
    /// state as it was.
    pub fn dispatch(&self, action: A) -> Result<A, StoreError> {
        let Some(kind) = action.action_type() else {
            log::warn!("Rejecting action without type: {:?}", action);
            return Err(StoreError::InvalidAction);
        };

        if self.inner.reducing.get() {
            log::error!("Dispatch of {} from inside a reducer", kind);
            return Err(StoreError::DispatchWhileReducing);
        }

        log::debug!("Action: {:?}", action);

        let current = self.state();
        let next = {
            self.inner.reducing.set(true);
            let _reducing = scopeguard::guard((), |_| self.inner.reducing.set(false));
            self.inner.reducer.reduce(Some(current), &action)?
        };

        *self.inner.state.borrow_mut() = next;
        self.notify();

        Ok(action)
    }

    /// Register a listener, called after every committed dispatch
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: Fn() + 'static,
    {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);

        self.inner.listeners.borrow_mut().push(Rc::new(Subscription {
            id,
            active: Cell::new(true),
            callback: Box::new(listener),
        }));
        log::trace!("Subscribed listener {}", id);

        Unsubscribe {
            registry: Rc::downgrade(&self.inner.listeners),
            id,
        }
    }

    /// Number of registered listeners
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn notify(&self) {
        // Listeners added while notifying wait for the next cycle, removed
        // ones are skipped.
        let snapshot: Vec<Rc<Subscription>> = self.inner.listeners.borrow().clone();
        for listener in snapshot {
            if listener.active.get() {
                (listener.callback)();
            }
        }
    }
}

impl<S: fmt::Debug, A> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.inner.state.borrow())
            .field("listeners", &self.inner.listeners.borrow().len())
            .finish()
    }
}

/// Create a store (see [`Store::new`])
pub fn create_store<S, A, R>(reducer: R, preloaded: Option<S>) -> Result<Store<S, A>, StoreError>
where
    S: 'static,
    A: Action + 'static,
    R: Reducer<S, A> + 'static,
{
    Store::new(reducer, preloaded)
}

/// Handle returned by [`Store::subscribe`]
///
/// Calling [`Unsubscribe::unsubscribe`] removes exactly the listener it was
/// created for. Calling it again, or after the store is gone, does nothing.
/// Dropping the handle keeps the listener registered.
#[derive(Debug)]
pub struct Unsubscribe {
    registry: Weak<Registry>,
    id: u64,
}

impl Unsubscribe {
    pub fn unsubscribe(&self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };

        let mut listeners = registry.borrow_mut();
        if let Some(position) = listeners.iter().position(|l| l.id == self.id) {
            let removed = listeners.remove(position);
            removed.active.set(false);
            log::trace!("Unsubscribed listener {}", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionRecord;
    use std::panic::{catch_unwind, AssertUnwindSafe};

    fn counter(state: Option<Rc<i64>>, action: &ActionRecord) -> Rc<i64> {
        let state = state.unwrap_or_default();
        match action.action_type() {
            Some("INCREMENT") => Rc::new(*state + 1),
            Some("DECREMENT") => Rc::new(*state - 1),
            Some("EXPLODE") => panic!("reducer fault"),
            _ => state,
        }
    }

    fn counter_store() -> Store<i64, ActionRecord> {
        Store::new(counter, None).unwrap()
    }

    fn call_log() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[test]
    fn test_init_populates_default() {
        let store = counter_store();
        assert_eq!(*store.state(), 0);
    }

    #[test]
    fn test_preloaded_state_is_kept() {
        let store: Store<i64, ActionRecord> = create_store(counter, Some(41)).unwrap();
        assert_eq!(*store.state(), 41);

        store.dispatch(ActionRecord::new("INCREMENT")).unwrap();
        assert_eq!(*store.state(), 42);
    }

    #[test]
    fn test_dispatch_returns_action() {
        let store = counter_store();
        let action = ActionRecord::new("INCREMENT").with_payload(7);
        let returned = store.dispatch(action.clone()).unwrap();
        assert_eq!(returned, action);
    }

    #[test]
    fn test_unknown_action_keeps_state_pointer() {
        let store = counter_store();
        let before = store.state();
        store.dispatch(ActionRecord::new("__UNKNOWN__")).unwrap();
        assert!(Rc::ptr_eq(&before, &store.state()));
    }

    #[test]
    fn test_malformed_action_rejected_without_notification() {
        let store = counter_store();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let _sub = store.subscribe(move || seen.set(seen.get() + 1));

        let result = store.dispatch(ActionRecord {
            kind: None,
            payload: Some(1.into()),
        });

        assert_eq!(result, Err(StoreError::InvalidAction));
        assert_eq!(*store.state(), 0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_subscribers_called_once_each() {
        let store = counter_store();
        let log = call_log();

        let l1 = Rc::clone(&log);
        let _s1 = store.subscribe(move || l1.borrow_mut().push("s1"));
        let l2 = Rc::clone(&log);
        let s2 = store.subscribe(move || l2.borrow_mut().push("s2"));
        let l3 = Rc::clone(&log);
        let _s3 = store.subscribe(move || l3.borrow_mut().push("s3"));

        store.dispatch(ActionRecord::new("INCREMENT")).unwrap();
        assert_eq!(*log.borrow(), vec!["s1", "s2", "s3"]);

        log.borrow_mut().clear();
        s2.unsubscribe();
        store.dispatch(ActionRecord::new("INCREMENT")).unwrap();
        assert_eq!(*log.borrow(), vec!["s1", "s3"]);
    }

    #[test]
    fn test_unsubscribe_is_idempotent() {
        let store = counter_store();
        let log = call_log();

        let l1 = Rc::clone(&log);
        let s1 = store.subscribe(move || l1.borrow_mut().push("s1"));
        let l2 = Rc::clone(&log);
        let _s2 = store.subscribe(move || l2.borrow_mut().push("s2"));

        s1.unsubscribe();
        s1.unsubscribe();
        assert_eq!(store.subscriber_count(), 1);

        store.dispatch(ActionRecord::new("INCREMENT")).unwrap();
        assert_eq!(*log.borrow(), vec!["s2"]);
    }

    #[test]
    fn test_unsubscribe_after_store_dropped() {
        let store = counter_store();
        let sub = store.subscribe(|| {});
        drop(store);
        sub.unsubscribe();
    }

    #[test]
    fn test_listener_removed_during_notification_is_skipped() {
        let store = counter_store();
        let log = call_log();
        let victim: Rc<RefCell<Option<Unsubscribe>>> = Rc::new(RefCell::new(None));

        let remover = Rc::clone(&victim);
        let l1 = Rc::clone(&log);
        let _s1 = store.subscribe(move || {
            l1.borrow_mut().push("s1");
            if let Some(sub) = remover.borrow().as_ref() {
                sub.unsubscribe();
            }
        });
        let l2 = Rc::clone(&log);
        *victim.borrow_mut() = Some(store.subscribe(move || l2.borrow_mut().push("s2")));

        store.dispatch(ActionRecord::new("INCREMENT")).unwrap();
        assert_eq!(*log.borrow(), vec!["s1"]);
    }

    #[test]
    fn test_listener_added_during_notification_waits_for_next_cycle() {
        let store = counter_store();
        let log = call_log();

        let handle = store.clone();
        let l1 = Rc::clone(&log);
        let added = Rc::new(Cell::new(false));
        let _s1 = store.subscribe(move || {
            l1.borrow_mut().push("s1");
            if !added.replace(true) {
                let late = Rc::clone(&l1);
                let _ = handle.subscribe(move || late.borrow_mut().push("late"));
            }
        });

        store.dispatch(ActionRecord::new("INCREMENT")).unwrap();
        assert_eq!(*log.borrow(), vec!["s1"]);

        store.dispatch(ActionRecord::new("INCREMENT")).unwrap();
        assert_eq!(*log.borrow(), vec!["s1", "s1", "late"]);
    }

    #[test]
    fn test_reentrant_dispatch_completes_before_outer_loop_resumes() {
        let store = counter_store();
        let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

        let handle = store.clone();
        let l1 = Rc::clone(&log);
        let _s1 = store.subscribe(move || {
            let value = *handle.state();
            l1.borrow_mut().push(format!("s1 saw {}", value));
            if value == 1 {
                handle.dispatch(ActionRecord::new("INCREMENT")).unwrap();
            }
        });
        let reader = store.clone();
        let l2 = Rc::clone(&log);
        let _s2 = store.subscribe(move || {
            l2.borrow_mut().push(format!("s2 saw {}", reader.state()));
        });

        store.dispatch(ActionRecord::new("INCREMENT")).unwrap();

        assert_eq!(*store.state(), 2);
        assert_eq!(
            *log.borrow(),
            vec!["s1 saw 1", "s1 saw 2", "s2 saw 2", "s2 saw 2"]
        );
    }

    #[test]
    fn test_dispatch_from_reducer_is_rejected() {
        let slot: Rc<RefCell<Option<Store<i64, ActionRecord>>>> = Rc::new(RefCell::new(None));
        let observed: Rc<RefCell<Option<Result<ActionRecord, StoreError>>>> =
            Rc::new(RefCell::new(None));

        let inner_slot = Rc::clone(&slot);
        let inner_observed = Rc::clone(&observed);
        let reducer = move |state: Option<Rc<i64>>, action: &ActionRecord| -> Rc<i64> {
            if action.action_type() == Some("NESTED") {
                if let Some(store) = inner_slot.borrow().as_ref() {
                    *inner_observed.borrow_mut() =
                        Some(store.dispatch(ActionRecord::new("INCREMENT")));
                }
            }
            counter(state, action)
        };

        let store: Store<i64, ActionRecord> = Store::new(reducer, None).unwrap();
        *slot.borrow_mut() = Some(store.clone());

        store.dispatch(ActionRecord::new("NESTED")).unwrap();
        assert_eq!(
            *observed.borrow(),
            Some(Err(StoreError::DispatchWhileReducing))
        );
        assert_eq!(*store.state(), 0);

        // The flag is cleared once the outer reduce returns
        store.dispatch(ActionRecord::new("INCREMENT")).unwrap();
        assert_eq!(*store.state(), 1);

        slot.borrow_mut().take();
    }

    #[test]
    fn test_reducer_panic_leaves_state_committed() {
        let store = counter_store();
        store.dispatch(ActionRecord::new("INCREMENT")).unwrap();

        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let _sub = store.subscribe(move || seen.set(seen.get() + 1));

        let result = catch_unwind(AssertUnwindSafe(|| {
            store.dispatch(ActionRecord::new("EXPLODE"))
        }));
        assert!(result.is_err());
        assert_eq!(*store.state(), 1);
        assert_eq!(calls.get(), 0);

        // Still usable afterwards
        store.dispatch(ActionRecord::new("DECREMENT")).unwrap();
        assert_eq!(*store.state(), 0);
        assert_eq!(calls.get(), 1);
    }
}
