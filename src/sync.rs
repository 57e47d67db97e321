//! Atomic imports, switchable between std and loom.
//!
//! Production builds use the hardware atomics from `core`. With the `loom`
//! feature enabled, the same code paths run under loom's model checker,
//! which explores every legal interleaving of the concurrent tests.

#[cfg(not(feature = "loom"))]
pub(crate) use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "loom")]
pub(crate) use loom::sync::atomic::{AtomicBool, Ordering};
