//! # reuse-pool
//!
//! Thread-safe, lock-free pool of reusable instances of a single type.
//! Recycles previously built items instead of constructing new ones on every
//! request, amortizing construction cost under allocate-use-discard churn.
//!
//! ## Features
//!
//! - Lock-free, unbounded idle store — `get` and `put` never block
//! - Deferred construction: a miss builds a fresh item from a stored factory
//! - Optional lifecycle hooks (`on_create` / `on_reuse` / `on_return`)
//!   selected at compile time, zero cost when absent
//! - Created / Reused / Returned notifications for external observers
//! - Atomic creation counter and idle-count snapshot for monitoring
//! - RAII checkout guard that returns items automatically
//!
//! ## Quick Start
//!
//! ```rust
//! use reuse_pool::Pool;
//!
//! let pool: Pool<Vec<u8>> = Pool::new(|| Vec::with_capacity(1024));
//!
//! let mut buf = pool.get().unwrap();
//! buf.extend_from_slice(b"request payload");
//! pool.put(buf);
//!
//! // The next get hands the same buffer back instead of allocating.
//! assert_eq!(pool.creation_count(), 1);
//! let buf = pool.get().unwrap();
//! assert_eq!(pool.creation_count(), 1);
//! # drop(buf);
//! ```
//!
//! ## Contract
//!
//! The pool enforces no maximum size, validates nothing on hand-out, and
//! assumes items are mutually substitutable. Returning the same checkout
//! twice, or an item the pool never issued, is undetected misuse.

mod errors;
mod events;
mod factory;
mod lifecycle;
mod pool;
mod stats;

pub use errors::{BoxError, PoolError, PoolResult};
pub use events::ObserverId;
pub use lifecycle::{HookPolicy, Lifecycle, NoHooks, WithHooks};
pub use pool::{LifecyclePool, Pool, Reusable};
pub use stats::PoolStats;
