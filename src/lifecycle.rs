//! Lifecycle hooks for pooled items
//!
//! Items that want to react to pool transitions implement [`Lifecycle`] and
//! are pooled through a [`crate::LifecyclePool`]. Items without hooks go
//! through the plain [`crate::Pool`], where the hook dispatch compiles to
//! nothing.

/// Callbacks invoked by the pool at item state transitions.
///
/// All three methods default to no-ops so implementors only override the
/// transitions they care about.
///
/// # Examples
///
/// ```
/// use reuse_pool::{Lifecycle, LifecyclePool};
///
/// #[derive(Default)]
/// struct Buffer {
///     data: Vec<u8>,
/// }
///
/// impl Lifecycle for Buffer {
///     fn on_return(&mut self) {
///         // Scrub state before the buffer becomes reusable.
///         self.data.clear();
///     }
/// }
///
/// let pool: LifecyclePool<Buffer> = LifecyclePool::for_default();
/// let mut buf = pool.get().unwrap();
/// buf.data.extend_from_slice(b"scratch");
/// pool.put(buf);
///
/// let buf = pool.get().unwrap();
/// assert!(buf.data.is_empty());
/// ```
pub trait Lifecycle {
    /// Called once, right after the factory produced this item.
    fn on_create(&mut self) {}

    /// Called when the item is handed out again from the idle set.
    fn on_reuse(&mut self) {}

    /// Called when the item is given back, before it becomes reusable.
    fn on_return(&mut self) {}
}

/// Marker for pools whose items carry no lifecycle hooks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

/// Marker for pools that dispatch [`Lifecycle`] hooks on every transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct WithHooks;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::NoHooks {}
    impl Sealed for super::WithHooks {}
}

/// Compile-time hook dispatch strategy.
///
/// Implemented only by [`NoHooks`] and [`WithHooks`]; monomorphization makes
/// the plain variant cost nothing.
pub trait HookPolicy<T>: sealed::Sealed {
    fn created(item: &mut T);
    fn reused(item: &mut T);
    fn returned(item: &mut T);
}

impl<T> HookPolicy<T> for NoHooks {
    #[inline(always)]
    fn created(_: &mut T) {}
    #[inline(always)]
    fn reused(_: &mut T) {}
    #[inline(always)]
    fn returned(_: &mut T) {}
}

impl<T: Lifecycle> HookPolicy<T> for WithHooks {
    #[inline]
    fn created(item: &mut T) {
        item.on_create();
    }
    #[inline]
    fn reused(item: &mut T) {
        item.on_reuse();
    }
    #[inline]
    fn returned(item: &mut T) {
        item.on_return();
    }
}
