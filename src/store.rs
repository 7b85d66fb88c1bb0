//! Owned state container for the donation slice.
//!
//! The store is created by the caller and handed to whoever needs it
//! (orchestrator, view). Transitions are applied one at a time under a
//! write lock; readers get a clone or run a selector under a read lock.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::debug;

use crate::donate::{DonateAction, DonateReducer, DonateState};
use crate::mvi::{Action, Reducer};

#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<DonateState>>,
    version: Arc<watch::Sender<u64>>,
}

impl Store {
    pub fn new(initial: DonateState) -> Self {
        let (tx, _rx) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(initial)),
            version: Arc::new(tx),
        }
    }

    /// Applies one transition and notifies subscribers.
    pub fn dispatch(&self, action: DonateAction) {
        debug!(action = action.name(), "dispatch");
        {
            let mut guard = self.inner.write();
            let current = std::mem::take(&mut *guard);
            *guard = DonateReducer::reduce(current, action);
        }
        self.version.send_modify(|v| *v += 1);
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> DonateState {
        self.inner.read().clone()
    }

    /// Runs a selector against the current state.
    pub fn select<T>(&self, selector: impl FnOnce(&DonateState) -> T) -> T {
        selector(&*self.inner.read())
    }

    /// Receiver that changes after every dispatched action.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    /// Number of actions dispatched so far.
    pub fn version(&self) -> u64 {
        *self.version.borrow()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DonateState::default())
    }
}
