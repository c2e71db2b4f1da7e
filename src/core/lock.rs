// Monitor wrapper that recovers from poisoned guards instead of propagating them.

use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

pub struct Lock {
    inner: Mutex<()>,
}

impl Lock {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(()),
        }
    }

    /// Block until the monitor is held; a poisoned monitor is re-entered.
    pub fn enter(&self) -> LockGuard<'_> {
        LockGuard {
            _guard: self.inner.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    pub fn try_enter(&self) -> Option<LockGuard<'_>> {
        match self.inner.try_lock() {
            Ok(guard) => Some(LockGuard { _guard: guard }),
            Err(TryLockError::Poisoned(poisoned)) => Some(LockGuard {
                _guard: poisoned.into_inner(),
            }),
            Err(TryLockError::WouldBlock) => None,
        }
    }
}

impl Default for Lock {
    fn default() -> Self {
        Self::new()
    }
}

pub struct LockGuard<'a> {
    _guard: MutexGuard<'a, ()>,
}

#[cfg(test)]
mod tests {
    use super::Lock;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn try_enter_observes_contention() {
        let lock = Lock::new();
        let held = lock.enter();
        assert!(lock.try_enter().is_none());
        drop(held);
        assert!(lock.try_enter().is_some());
    }

    #[test]
    fn enter_serializes_threads() {
        let lock = Arc::new(Lock::new());
        let counter = Arc::new(AtomicU64::new(0));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let lock = Arc::clone(&lock);
            let counter = Arc::clone(&counter);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    let _guard = lock.enter();
                    let seen = counter.load(Ordering::SeqCst);
                    counter.store(seen + 1, Ordering::SeqCst);
                }
            }));
        }
        for handle in handles {
            handle.join().expect("join");
        }
        assert_eq!(counter.load(Ordering::SeqCst), 800);
    }

    #[test]
    fn poisoned_monitor_is_reentered() {
        let lock = Arc::new(Lock::new());
        let poisoner = Arc::clone(&lock);
        let result = std::thread::spawn(move || {
            let _guard = poisoner.enter();
            panic!("poison the monitor");
        })
        .join();
        assert!(result.is_err());
        let _guard = lock.enter();
        assert!(lock.try_enter().is_none());
    }
}
