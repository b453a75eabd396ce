use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Single-flight gate over the persistence writes of one session. At most
/// one draft save or submission holds the permit at a time; a second
/// trigger while a write is in flight is refused instead of queued.
#[derive(Debug, Clone, Default)]
pub struct WriteGate {
    inner: Arc<Mutex<()>>,
}

/// Held for the duration of one write. Dropping it reopens the gate.
#[derive(Debug)]
pub struct WritePermit {
    _guard: OwnedMutexGuard<()>,
}

impl WriteGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the permit, or returns `None` when a write already holds it.
    pub fn acquire(&self) -> Option<WritePermit> {
        self.inner
            .clone()
            .try_lock_owned()
            .ok()
            .map(|guard| WritePermit { _guard: guard })
    }
}
