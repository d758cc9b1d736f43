//! Multi-thread stress tests for the pool.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;

use parking_lot::Mutex;
use reuse_pool::Pool;

const THREADS: usize = 8;
const CYCLES: usize = 2_000;
const SEED: usize = 4;

/// Item carrying a token unique for the lifetime of the pool.
struct Token {
    id: u64,
}

fn token_pool() -> Pool<Token> {
    let ids = AtomicU64::new(0);
    Pool::new(move || Token {
        id: ids.fetch_add(1, Ordering::Relaxed),
    })
}

/// N threads churn get/put cycles on a pre-seeded pool. No item may be lost,
/// duplicated, or held by two threads at once.
#[test]
fn churn_neither_loses_nor_duplicates_items() {
    let pool = Arc::new(token_pool());
    pool.prefill(SEED).unwrap();

    let seen = Arc::new(Mutex::new(HashSet::new()));
    let held = Arc::new(Mutex::new(HashSet::new()));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let pool = Arc::clone(&pool);
            let seen = Arc::clone(&seen);
            let held = Arc::clone(&held);
            thread::spawn(move || {
                for _ in 0..CYCLES {
                    let item = pool.get().unwrap();
                    assert!(
                        held.lock().insert(item.id),
                        "item {} handed out to two threads at once",
                        item.id
                    );
                    seen.lock().insert(item.id);
                    assert!(held.lock().remove(&item.id));
                    pool.put(item);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let created = pool.creation_count();
    let distinct = seen.lock().len() as u64;
    assert_eq!(
        distinct, created,
        "distinct tokens must equal seeded plus newly created items"
    );
    assert!(created >= SEED as u64);
    // Every item went back; none may have been lost in flight.
    assert_eq!(pool.count() as u64, created);
}

/// Notification totals stay consistent with the counters under contention:
/// every get is either a creation or a reuse, and every put notifies once.
#[test]
fn notification_totals_match_operation_totals() {
    let pool = Arc::new(token_pool());
    let created = Arc::new(AtomicUsize::new(0));
    let reused = Arc::new(AtomicUsize::new(0));
    let returned = Arc::new(AtomicUsize::new(0));

    let c = Arc::clone(&created);
    pool.on_created(move |_| {
        c.fetch_add(1, Ordering::Relaxed);
    });
    let r = Arc::clone(&reused);
    pool.on_reused(move |_| {
        r.fetch_add(1, Ordering::Relaxed);
    });
    let ret = Arc::clone(&returned);
    pool.on_returned(move |_| {
        ret.fetch_add(1, Ordering::Relaxed);
    });

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                for _ in 0..CYCLES {
                    let item = pool.get().unwrap();
                    pool.put(item);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let total_gets = THREADS * CYCLES;
    assert_eq!(
        created.load(Ordering::Relaxed) + reused.load(Ordering::Relaxed),
        total_gets
    );
    assert_eq!(returned.load(Ordering::Relaxed), total_gets);
    assert_eq!(created.load(Ordering::Relaxed) as u64, pool.creation_count());
}

/// Concurrent misses must not lose counter increments.
#[test]
fn creation_counter_is_exact_under_racing_misses() {
    let pool: Arc<Pool<Vec<u8>>> = Arc::new(Pool::new(Vec::new));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let pool = Arc::clone(&pool);
            // Hold every item so each get is a miss.
            thread::spawn(move || {
                let items: Vec<_> = (0..CYCLES).map(|_| pool.get().unwrap()).collect();
                items.len()
            })
        })
        .collect();

    let mut handed_out = 0;
    for handle in handles {
        handed_out += handle.join().unwrap();
    }

    assert_eq!(handed_out, THREADS * CYCLES);
    assert_eq!(pool.creation_count(), (THREADS * CYCLES) as u64);
    assert_eq!(pool.count(), 0);
}

/// A put racing a clear either lands before the drain or survives after it;
/// in both cases nothing is duplicated.
#[test]
fn clear_racing_put_never_duplicates() {
    for _ in 0..50 {
        let pool = Arc::new(token_pool());
        let item = pool.get().unwrap();

        let putter = {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                pool.put(item);
            })
        };
        let clearer = {
            let pool = Arc::clone(&pool);
            thread::spawn(move || {
                pool.clear();
            })
        };

        putter.join().unwrap();
        clearer.join().unwrap();

        assert!(pool.count() <= 1);
        assert_eq!(pool.creation_count(), 1);
    }
}
