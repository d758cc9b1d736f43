//! Stored construction recipe for pool items
//!
//! The factory is resolved once at pool construction and invoked on every
//! miss with the same captured arguments.

use crate::errors::{BoxError, PoolError, PoolResult};

type Make<T> = Box<dyn Fn() -> Result<T, BoxError> + Send + Sync>;

pub(crate) struct Factory<T> {
    make: Make<T>,
}

impl<T> Factory<T> {
    /// Wrap a factory that cannot fail.
    pub(crate) fn infallible<F>(f: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            make: Box::new(move || Ok(f())),
        }
    }

    /// Wrap a factory whose construction can fail.
    pub(crate) fn fallible<F>(f: F) -> Self
    where
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Self { make: Box::new(f) }
    }

    /// Recipe for types with a no-argument constructor.
    pub(crate) fn from_default() -> Self
    where
        T: Default + 'static,
    {
        Self::infallible(T::default)
    }

    pub(crate) fn invoke(&self) -> PoolResult<T> {
        (self.make)().map_err(PoolError::Construction)
    }
}

impl<T> std::fmt::Debug for Factory<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Factory").finish_non_exhaustive()
    }
}
