//! Minimal reactive cells for an immediate-mode UI.
//!
//! egui redraws every frame, so instead of subscriptions the derived values
//! are pulled: each consumer asks the [`Memo`] for its value with the current
//! [`Input`] revision, and the memo recomputes only when that revision moved.
//! Every consumer in the same frame therefore shares one `Rc` result.

use std::rc::Rc;

/// Monotonic change counter of an [`Input`].
pub type Revision = u64;

// ---------------------------------------------------------------------------
// Input – a value written by the UI
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Input<T> {
    value: T,
    revision: Revision,
}

impl<T: PartialEq> Input<T> {
    pub fn new(value: T) -> Self {
        Input { value, revision: 0 }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Replace the value. Returns `true` (and bumps the revision) only if it differs.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.revision += 1;
        true
    }
}

impl<T: PartialEq + Clone> Input<T> {
    /// Mutate in place. The revision moves only when the value actually changed.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.value.clone();
        f(&mut next);
        self.set(next)
    }
}

// ---------------------------------------------------------------------------
// Memo – a derived value cached per input revision
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Memo<T> {
    cached: Option<(Revision, Rc<T>)>,
    recomputations: usize,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Memo {
            cached: None,
            recomputations: 0,
        }
    }
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `revision`, running `compute` only on a miss.
    pub fn get(&mut self, revision: Revision, compute: impl FnOnce() -> T) -> Rc<T> {
        if let Some((rev, value)) = &self.cached {
            if *rev == revision {
                return Rc::clone(value);
            }
        }
        let value = Rc::new(compute());
        self.recomputations += 1;
        self.cached = Some((revision, Rc::clone(&value)));
        value
    }

    /// Drop the cached value so the next [`Memo::get`] recomputes.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
