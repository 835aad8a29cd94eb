//! Cross-thread delivery of key transitions
//!
//! An input thread posts transitions through a [`KeySender`]; the simulation
//! thread drains the [`KeyEventQueue`] once per tick, before the integrator
//! reads the input state. Events are applied in arrival order.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

/// A single key transition as reported by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, pressed: bool) -> Self {
        Self {
            key: key.into(),
            pressed,
        }
    }
}

/// FIFO of pending key transitions, drained by the simulation thread
#[derive(Debug, Clone, Default)]
pub struct KeyEventQueue {
    pending: Arc<Mutex<VecDeque<KeyEvent>>>,
}

impl KeyEventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle for producers on other threads
    pub fn sender(&self) -> KeySender {
        KeySender {
            pending: Arc::clone(&self.pending),
        }
    }

    /// Queue a transition from the owning thread
    pub fn push(&self, key: impl Into<String>, pressed: bool) {
        self.pending.lock().push_back(KeyEvent::new(key, pressed));
    }

    /// Take every pending event in arrival order
    pub fn drain(&self) -> VecDeque<KeyEvent> {
        std::mem::take(&mut *self.pending.lock())
    }

    pub fn len(&self) -> usize {
        self.pending.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.lock().is_empty()
    }
}

/// Producer side of a [`KeyEventQueue`]
#[derive(Debug, Clone)]
pub struct KeySender {
    pending: Arc<Mutex<VecDeque<KeyEvent>>>,
}

impl KeySender {
    /// Post a transition
    pub fn send(&self, key: impl Into<String>, pressed: bool) {
        self.pending.lock().push_back(KeyEvent::new(key, pressed));
    }
}
