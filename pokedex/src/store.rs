use crate::state::{State, Update};

use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

/// The shared Pokémon cache.
///
/// Every change goes through [`Store::dispatch`], which swaps the current
/// snapshot for a freshly reduced one. Snapshots are never mutated in place.
#[derive(Clone)]
pub struct Store {
    sender: Arc<watch::Sender<Arc<State>>>,
}

impl Store {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(Arc::new(State::default()));

        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn snapshot(&self) -> Arc<State> {
        self.sender.borrow().clone()
    }

    /// Listens for new snapshots. Receivers only ever observe the latest one.
    pub fn subscribe(&self) -> watch::Receiver<Arc<State>> {
        self.sender.subscribe()
    }

    pub fn dispatch(&self, update: Update) {
        log::debug!("{update:?}");

        self.sender.send_modify(|state| {
            *state = Arc::new(state.reduce(update));
        });
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.sender.borrow();

        f.debug_struct("Store")
            .field("entities", &state.entities.len())
            .field("list_status", &state.list_status)
            .field("detail_status", &state.detail_status)
            .finish()
    }
}
