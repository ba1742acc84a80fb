//! Scoped suppression of the record-name update hook
//!
//! Renaming a record writes the store and reloads the catalog; the reload
//! sets record names again, which would fire the hook again. Reloads run
//! under a [`SuppressGuard`] and the hook does nothing while one is alive.

use std::cell::Cell;
use std::rc::Rc;

/// Shared switch checked by the name-update hook
#[derive(Debug, Clone, Default)]
pub struct UpdateSuppressor {
    flag: Rc<Cell<bool>>,
}

impl UpdateSuppressor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_suppressed(&self) -> bool {
        self.flag.get()
    }

    /// Suppress updates until the returned guard is dropped
    pub fn suppress(&self) -> SuppressGuard {
        let previous = self.flag.replace(true);
        SuppressGuard {
            flag: Rc::clone(&self.flag),
            previous,
        }
    }
}

/// Restores the previous suppression state on drop, including on unwind
#[derive(Debug)]
pub struct SuppressGuard {
    flag: Rc<Cell<bool>>,
    previous: bool,
}

impl Drop for SuppressGuard {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}
