//! Core pool implementation

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crossbeam::queue::SegQueue;

use crate::errors::{BoxError, PoolError, PoolResult};
use crate::events::{ObserverId, PoolObservers};
use crate::factory::Factory;
use crate::lifecycle::{HookPolicy, NoHooks, WithHooks};
use crate::stats::PoolStats;

/// Thread-safe pool of reusable items, unbounded and lock-free.
///
/// `get` pops an idle item or builds a fresh one with the stored factory;
/// `put` makes an item reusable again. The pool never blocks, never caps its
/// size, and performs no validation on hand-out.
///
/// The `H` parameter selects hook dispatch at compile time: the default
/// [`NoHooks`] for plain item types, or [`WithHooks`] (via the
/// [`LifecyclePool`] alias) for types implementing
/// [`Lifecycle`](crate::Lifecycle).
///
/// # Examples
///
/// ```
/// use reuse_pool::Pool;
///
/// let pool: Pool<Vec<u8>> = Pool::new(|| Vec::with_capacity(1024));
///
/// let mut buf = pool.get().unwrap();
/// buf.extend_from_slice(b"scratch");
/// pool.put(buf);
///
/// assert_eq!(pool.count(), 1);
/// assert_eq!(pool.creation_count(), 1);
/// ```
pub struct Pool<T, H = NoHooks> {
    idle: SegQueue<T>,
    factory: Factory<T>,
    created: AtomicU64,
    observers: PoolObservers<T>,
    disposed: AtomicBool,
    _hooks: PhantomData<H>,
}

/// Pool variant that dispatches [`Lifecycle`](crate::Lifecycle) hooks on every
/// item transition.
pub type LifecyclePool<T> = Pool<T, WithHooks>;

impl<T, H: HookPolicy<T>> Pool<T, H> {
    /// Create a pool whose items are built by an infallible factory.
    ///
    /// The factory captures its arguments once; every miss invokes it with
    /// that same captured state.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::from_factory(Factory::infallible(factory))
    }

    /// Create a pool whose factory can fail; failures surface from [`get`]
    /// as [`PoolError::Construction`].
    ///
    /// [`get`]: Pool::get
    pub fn new_fallible<F>(factory: F) -> Self
    where
        F: Fn() -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Self::from_factory(Factory::fallible(factory))
    }

    /// Create a pool that builds items through their `Default` impl.
    pub fn for_default() -> Self
    where
        T: Default + 'static,
    {
        Self::from_factory(Factory::from_default())
    }

    fn from_factory(factory: Factory<T>) -> Self {
        Self {
            idle: SegQueue::new(),
            factory,
            created: AtomicU64::new(0),
            observers: PoolObservers::new(),
            disposed: AtomicBool::new(false),
            _hooks: PhantomData,
        }
    }

    /// Get an item, reusing an idle one when available.
    ///
    /// On a hit the item's `on_reuse` hook runs (hooked variant) and one
    /// `Reused` notification fires. On a miss the factory builds a fresh
    /// item, `on_create` runs, the creation counter increments, and one
    /// `Created` notification fires. Never blocks.
    ///
    /// # Errors
    ///
    /// [`PoolError::Construction`] when the miss path's factory fails, with
    /// no counter increment and no notification. [`PoolError::Disposed`]
    /// after [`dispose`](Pool::dispose).
    pub fn get(&self) -> PoolResult<T> {
        if self.disposed.load(Ordering::Relaxed) {
            return Err(PoolError::Disposed);
        }
        match self.idle.pop() {
            Some(mut item) => {
                H::reused(&mut item);
                self.observers.reused.emit(&item);
                Ok(item)
            }
            None => {
                let mut item = self.factory.invoke()?;
                H::created(&mut item);
                self.created.fetch_add(1, Ordering::Relaxed);
                self.observers.created.emit(&item);
                Ok(item)
            }
        }
    }

    /// Get an item wrapped in a guard that puts it back when dropped.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Pool::get).
    ///
    /// # Examples
    ///
    /// ```
    /// use reuse_pool::Pool;
    ///
    /// let pool: Pool<String> = Pool::new(String::new);
    /// {
    ///     let mut item = pool.checkout().unwrap();
    ///     item.push_str("hello");
    /// }
    /// assert_eq!(pool.count(), 1);
    /// ```
    pub fn checkout(&self) -> PoolResult<Reusable<'_, T, H>> {
        Ok(Reusable {
            item: Some(self.get()?),
            pool: self,
        })
    }

    /// Return an item to the pool, making it eligible for a future `get`.
    ///
    /// The item's `on_return` hook runs first (hooked variant), then one
    /// `Returned` notification fires, then the item enters the idle
    /// container. Returns `&self` for fluent chaining.
    ///
    /// The caller must not return the same checkout twice or return an item
    /// the pool never issued; neither is detected and both corrupt the idle
    /// set. After [`dispose`](Pool::dispose) the item is dropped instead and
    /// no notification fires.
    pub fn put(&self, mut item: T) -> &Self {
        if self.disposed.load(Ordering::Relaxed) {
            return self;
        }
        H::returned(&mut item);
        self.observers.returned.emit(&item);
        self.idle.push(item);
        self
    }

    /// Build `n` items up front and park them in the idle set.
    ///
    /// Each item counts as a creation and fires a `Created` notification;
    /// hooked items see `on_create` followed by `on_return` since they go
    /// straight to idle.
    ///
    /// # Errors
    ///
    /// Stops at the first factory failure; items built before it remain in
    /// the pool.
    pub fn prefill(&self, n: usize) -> PoolResult<&Self> {
        for _ in 0..n {
            if self.disposed.load(Ordering::Relaxed) {
                return Err(PoolError::Disposed);
            }
            let mut item = self.factory.invoke()?;
            H::created(&mut item);
            self.created.fetch_add(1, Ordering::Relaxed);
            self.observers.created.emit(&item);
            H::returned(&mut item);
            self.idle.push(item);
        }
        Ok(self)
    }

    /// Number of idle items right now.
    ///
    /// Purely a snapshot: concurrent `get`/`put` calls may have changed the
    /// true count by the time the caller reads it.
    pub fn count(&self) -> usize {
        self.idle.len()
    }

    /// Cumulative successful factory invocations since pool construction.
    ///
    /// Monitoring aid only; never used to bound the pool. Not reset by
    /// [`clear`](Pool::clear).
    pub fn creation_count(&self) -> u64 {
        self.created.load(Ordering::Relaxed)
    }

    /// Snapshot of the pool's monitoring counters.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            idle: self.idle.len(),
            created: self.created.load(Ordering::Relaxed),
        }
    }

    /// Drop every idle item without running lifecycle hooks.
    ///
    /// Checked-out items and the creation counter are unaffected. A `put`
    /// racing with `clear` may land before or after the drain; both outcomes
    /// are accepted.
    pub fn clear(&self) -> &Self {
        while self.idle.pop().is_some() {}
        self
    }

    /// Clear the pool, drop all observers, and refuse further hand-outs.
    ///
    /// Subsequent [`get`](Pool::get) calls report [`PoolError::Disposed`];
    /// subsequent `put` calls drop their item. Dispose only after other
    /// threads have stopped calling into the pool; concurrent in-flight
    /// operations may still observe pre-dispose behavior.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Relaxed);
        self.clear();
        self.observers.clear();
    }

    /// Whether [`dispose`](Pool::dispose) has been called.
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Relaxed)
    }

    /// Subscribe to `Created` notifications; the observer receives each
    /// freshly constructed item, synchronously on the constructing thread.
    pub fn on_created<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.observers
            .created
            .subscribe(&self.observers.next_id, observer)
    }

    /// Subscribe to `Reused` notifications, fired on every idle-set hit.
    pub fn on_reused<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.observers
            .reused
            .subscribe(&self.observers.next_id, observer)
    }

    /// Subscribe to `Returned` notifications, fired on every `put`.
    pub fn on_returned<F>(&self, observer: F) -> ObserverId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.observers
            .returned
            .subscribe(&self.observers.next_id, observer)
    }

    /// Remove a previously subscribed observer. Returns `false` when the id
    /// is unknown (already removed, or wiped by dispose).
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl<T, H> std::fmt::Debug for Pool<T, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pool")
            .field("idle", &self.idle.len())
            .field("created", &self.created.load(Ordering::Relaxed))
            .field("disposed", &self.disposed.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Guard over a checked-out item that returns it to the pool on drop.
pub struct Reusable<'a, T, H: HookPolicy<T>> {
    item: Option<T>,
    pool: &'a Pool<T, H>,
}

impl<T, H: HookPolicy<T>> Reusable<'_, T, H> {
    /// Detach the item from the pool; it will not be returned on drop.
    pub fn into_inner(mut self) -> T {
        self.item.take().expect("item already taken")
    }
}

impl<T, H: HookPolicy<T>> std::ops::Deref for Reusable<'_, T, H> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.item.as_ref().expect("item already taken")
    }
}

impl<T, H: HookPolicy<T>> std::ops::DerefMut for Reusable<'_, T, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.item.as_mut().expect("item already taken")
    }
}

impl<T, H: HookPolicy<T>> Drop for Reusable<'_, T, H> {
    fn drop(&mut self) {
        if let Some(item) = self.item.take() {
            self.pool.put(item);
        }
    }
}
