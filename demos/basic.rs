//! Basic pool usage: miss, return, reuse.
//!
//! Run with: cargo run --example basic

use reuse_pool::Pool;

fn main() {
    let pool: Pool<String> = Pool::new(|| String::with_capacity(256));

    pool.on_created(|s| println!("created a buffer with capacity {}", s.capacity()));
    pool.on_reused(|s| println!("reused a buffer holding {:?}", s));
    pool.on_returned(|s| println!("returned a buffer holding {:?}", s));

    // Empty pool: the first get constructs.
    let mut greeting = pool.get().unwrap();
    greeting.push_str("hello");
    println!("idle: {}, created: {}", pool.count(), pool.creation_count());

    // Give it back and take it out again: no new construction.
    pool.put(greeting);
    let greeting = pool.get().unwrap();
    println!("got back: {greeting:?}");
    println!("idle: {}, created: {}", pool.count(), pool.creation_count());

    // The checkout guard returns automatically.
    {
        let mut scratch = pool.checkout().unwrap();
        scratch.push_str(" world");
    }
    println!("idle after guard drop: {}", pool.count());

    println!("stats: {:?}", pool.stats().export());
}
