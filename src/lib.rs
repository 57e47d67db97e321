//! # `beacon` - Lock-Free Atomic Boolean Flag
//!
//! A single primitive: a boolean value supporting atomic read, write, and
//! compare-and-swap across concurrent threads, without locks. Correctness
//! rests entirely on the memory-ordering guarantees of the underlying
//! hardware atomics, which this crate pins down explicitly instead of
//! leaving to the caller.
//!
//! ## Guarantees
//!
//! - **Lock-free**: no operation blocks; the only iterating operation is
//!   [`AtomicFlag::get_and_set`], whose compare-and-swap retry loop makes
//!   progress whenever a competing operation succeeds.
//! - **Single total order**: [`get`](AtomicFlag::get), [`set`](AtomicFlag::set),
//!   and every compare-and-swap variant are sequentially consistent for the
//!   flag's cell, so all threads observe its writes in the same order.
//! - **Relaxed publication**: [`lazy_set`](AtomicFlag::lazy_set) is a
//!   release-ordered store for callers that only need the store ordered
//!   after their own earlier writes.
//! - **Strong and weak CAS**: [`compare_and_set`](AtomicFlag::compare_and_set)
//!   never fails spuriously; [`weak_compare_and_set`](AtomicFlag::weak_compare_and_set)
//!   may, in exchange for a cheaper primitive on some platforms.
//!
//! ## Model checking
//!
//! With the `loom` cargo feature enabled, the flag is backed by loom's
//! atomics instead of the hardware's, and the concurrent tests run under
//! loom's exhaustive interleaving exploration (`cargo test --features loom
//! --test loom`).
//!
//! ## Example
//!
//! ```rust
//! use beacon::AtomicFlag;
//!
//! let flag = AtomicFlag::new(false);
//!
//! assert!(flag.compare_and_set(false, true));
//! assert!(flag.get());
//!
//! // The expectation no longer holds, so the value stays put.
//! assert!(!flag.compare_and_set(false, true));
//! assert!(flag.get());
//!
//! assert!(flag.get_and_set(false));
//! assert!(!flag.get());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod flag;
mod sync;

pub use flag::AtomicFlag;

// Compile-time layout assertions: the flag must remain a thin wrapper over
// the platform atomic. Skipped under loom, whose atomics carry model state.
#[cfg(not(feature = "loom"))]
const _: () = {
    use core::mem;
    use core::sync::atomic::AtomicBool;

    assert!(mem::size_of::<AtomicFlag>() == mem::size_of::<AtomicBool>());
    assert!(mem::align_of::<AtomicFlag>() == mem::align_of::<AtomicBool>());
    assert!(mem::size_of::<AtomicFlag>() == 1);
};
