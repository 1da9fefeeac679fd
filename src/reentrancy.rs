//! Debug-only reentrancy check.
//!
//! The table calls user code (`K: Eq`/`Hash`) while probing, so a buggy key
//! impl could call back into the same map mid-mutation. In debug builds a
//! second entry while a guard is live panics; release builds compile the
//! check away entirely.

use core::cell::Cell;
use core::marker::PhantomData;

/// Per-map entry flag. Guard public entry points with
/// `let _g = self.reentry.lock();`.
#[derive(Debug, Default)]
pub(crate) struct ReentryFlag {
    #[cfg(debug_assertions)]
    entered: Cell<bool>,
    // The container is single-threaded; stay !Send + !Sync.
    _single_thread: PhantomData<*mut ()>,
}

impl ReentryFlag {
    pub(crate) const fn new() -> Self {
        Self {
            #[cfg(debug_assertions)]
            entered: Cell::new(false),
            _single_thread: PhantomData,
        }
    }

    #[inline]
    pub(crate) fn lock(&self) -> ReentryGuard<'_> {
        #[cfg(debug_assertions)]
        {
            assert!(
                !self.entered.replace(true),
                "reentrant call into fixed-hashmap detected"
            );
            ReentryGuard { flag: self }
        }

        #[cfg(not(debug_assertions))]
        {
            ReentryGuard { _flag: PhantomData }
        }
    }
}

/// RAII guard; clears the flag on drop.
pub(crate) struct ReentryGuard<'a> {
    #[cfg(debug_assertions)]
    flag: &'a ReentryFlag,
    #[cfg(not(debug_assertions))]
    _flag: PhantomData<&'a ()>,
}

impl Drop for ReentryGuard<'_> {
    fn drop(&mut self) {
        #[cfg(debug_assertions)]
        self.flag.entered.set(false);
    }
}
