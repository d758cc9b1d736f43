//! Error types for the pool

use thiserror::Error;

/// Boxed error produced by a fallible factory.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum PoolError {
    /// The factory failed to construct a new item on the miss path.
    ///
    /// The creation counter is not incremented and no `Created` notification
    /// fires for a failed construction.
    #[error("factory failed to construct a pool item")]
    Construction(#[source] BoxError),

    /// The pool has been disposed and no longer hands out items.
    #[error("pool has been disposed")]
    Disposed,
}

pub type PoolResult<T> = Result<T, PoolError>;
