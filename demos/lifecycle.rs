//! Lifecycle hooks: a connection-like item that resets itself on return.
//!
//! Run with: cargo run --example lifecycle

use reuse_pool::{Lifecycle, LifecyclePool};

struct Session {
    endpoint: String,
    pending: Vec<String>,
    generation: u32,
}

impl Lifecycle for Session {
    fn on_create(&mut self) {
        println!("[{}] session opened", self.endpoint);
    }

    fn on_reuse(&mut self) {
        self.generation += 1;
        println!("[{}] session handed out, generation {}", self.endpoint, self.generation);
    }

    fn on_return(&mut self) {
        // Drop unsent work so the next borrower starts clean.
        self.pending.clear();
        println!("[{}] session reset", self.endpoint);
    }
}

fn main() {
    // The factory captures its arguments once, at pool construction.
    let endpoint = String::from("db.internal:5432");
    let pool: LifecyclePool<Session> = LifecyclePool::new(move || Session {
        endpoint: endpoint.clone(),
        pending: Vec::new(),
        generation: 0,
    });

    let mut session = pool.get().unwrap();
    session.pending.push("INSERT ...".to_string());
    pool.put(session);

    let session = pool.get().unwrap();
    assert!(session.pending.is_empty());
    assert_eq!(session.generation, 1);
    pool.put(session);

    println!("creations: {}", pool.creation_count());
    pool.dispose();
    assert!(pool.get().is_err());
    println!("pool disposed");
}
