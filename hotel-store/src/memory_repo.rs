use hotel_core::repository::{ReservationStore, StoreError};
use hotel_core::Reservation;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// In-memory snapshot for development and testing.
///
/// Clones share the same snapshot, so a caller can hand one clone to the
/// booking manager and inspect what it saved through another.
#[derive(Clone, Default)]
pub struct MemoryStore {
    snapshot: Rc<RefCell<Vec<Reservation>>>,
    saves: Rc<Cell<usize>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(reservations: Vec<Reservation>) -> Self {
        let store = Self::new();
        *store.snapshot.borrow_mut() = reservations;
        store
    }

    pub fn snapshot(&self) -> Vec<Reservation> {
        self.snapshot.borrow().clone()
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Make subsequent saves fail, as a full disk would
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl ReservationStore for MemoryStore {
    fn load(&self) -> Result<Vec<Reservation>, StoreError> {
        Ok(self.snapshot())
    }

    fn save(&self, reservations: &[Reservation]) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Unavailable("writes disabled".to_string()));
        }
        *self.snapshot.borrow_mut() = reservations.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
