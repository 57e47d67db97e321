//! A lock-free atomic boolean flag.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::sync::{AtomicBool, Ordering};

/// A boolean value that may be updated atomically.
///
/// The cell is only reachable through the operations below; every read
/// observes the result of some completed write, and every operation is
/// atomic with respect to all others. No operation blocks.
///
/// All operations except [`lazy_set`](Self::lazy_set) are sequentially
/// consistent: every thread observes writes to the flag in the same total
/// order. `lazy_set` is a release-ordered store for callers that only need
/// the store ordered after their own earlier writes.
///
/// The flag is shared by reference; wrap it in an [`Arc`](std::sync::Arc)
/// (or borrow it across a scope) to share it between threads.
#[repr(transparent)]
pub struct AtomicFlag {
    value: AtomicBool,
}

impl AtomicFlag {
    /// Creates a new flag holding `value`.
    #[cfg(not(feature = "loom"))]
    #[inline(always)]
    pub const fn new(value: bool) -> Self {
        Self {
            value: AtomicBool::new(value),
        }
    }

    /// Creates a new flag holding `value`.
    ///
    /// Not `const` under loom: loom's atomics carry model-checking state.
    #[cfg(feature = "loom")]
    pub fn new(value: bool) -> Self {
        Self {
            value: AtomicBool::new(value),
        }
    }

    /// Returns the current value.
    #[inline(always)]
    pub fn get(&self) -> bool {
        self.value.load(Ordering::SeqCst)
    }

    /// Unconditionally stores `value`.
    #[inline(always)]
    pub fn set(&self, value: bool) {
        self.value.store(value, Ordering::SeqCst);
    }

    /// Stores `value` with release ordering only.
    ///
    /// The store cannot be reordered before this thread's earlier writes,
    /// but does not by itself force other threads' pending writes to become
    /// visible here. Use [`set`](Self::set) when the store must participate
    /// in the flag's total order.
    #[inline(always)]
    pub fn lazy_set(&self, value: bool) {
        self.value.store(value, Ordering::Release);
    }

    /// Stores `update` if the current value equals `expect`.
    ///
    /// Returns `true` if the value was replaced, `false` if the current
    /// value did not match (leaving it unchanged). This is a strong
    /// compare-and-swap: it never fails spuriously, so callers do not need
    /// a retry loop.
    #[inline(always)]
    pub fn compare_and_set(&self, expect: bool, update: bool) -> bool {
        self.value
            .compare_exchange(expect, update, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Stores `update` if the current value equals `expect` (weak version).
    ///
    /// Same contract as [`compare_and_set`](Self::compare_and_set), except
    /// the operation may spuriously return `false` even when the value
    /// matched `expect`. Callers needing a guaranteed outcome must retry in
    /// a loop. When it returns `true`, the effect is identical to the
    /// strong version.
    #[inline(always)]
    pub fn weak_compare_and_set(&self, expect: bool, update: bool) -> bool {
        self.value
            .compare_exchange_weak(expect, update, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Atomically replaces the value with `value`, returning the previous
    /// value.
    ///
    /// Built as a compare-and-swap retry loop, the canonical construction
    /// for read-modify-write operations on top of CAS. Lock-free: a retry
    /// only happens when another thread's operation succeeded in between.
    #[inline]
    pub fn get_and_set(&self, value: bool) -> bool {
        let mut prev = self.get();
        loop {
            match self.value.compare_exchange_weak(
                prev,
                value,
                Ordering::SeqCst,
                Ordering::SeqCst,
            ) {
                Ok(_) => return prev,
                Err(actual) => prev = actual,
            }
        }
    }
}

impl Default for AtomicFlag {
    /// Creates a flag holding `false`.
    #[inline]
    fn default() -> Self {
        Self::new(false)
    }
}

impl From<bool> for AtomicFlag {
    #[inline]
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicFlag")
            .field("value", &self.get())
            .finish()
    }
}

/// Renders exactly `"true"` or `"false"`, reflecting [`get`](AtomicFlag::get)
/// at call time.
impl fmt::Display for AtomicFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The serialized form is the boolean value itself, no wrapper.
impl Serialize for AtomicFlag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bool(self.get())
    }
}

impl<'de> Deserialize<'de> for AtomicFlag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        bool::deserialize(deserializer).map(Self::new)
    }
}
