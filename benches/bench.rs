use criterion::{Criterion, black_box, criterion_group, criterion_main};
use reuse_pool::Pool;

const BUF_CAPACITY: usize = 64 * 1024;

fn churn(c: &mut Criterion) {
    c.bench_function("pool_get_put", |b| {
        let pool: Pool<Vec<u8>> = Pool::new(|| Vec::with_capacity(BUF_CAPACITY));
        b.iter(|| {
            let buf = black_box(pool.get().unwrap());
            black_box(buf.capacity());
            pool.put(buf);
        })
    });

    c.bench_function("pool_checkout_guard", |b| {
        let pool: Pool<Vec<u8>> = Pool::new(|| Vec::with_capacity(BUF_CAPACITY));
        b.iter(|| {
            let buf = black_box(pool.checkout().unwrap());
            black_box(buf.capacity())
        })
    });

    c.bench_function("fresh_allocation", |b| {
        b.iter(|| {
            let buf: Vec<u8> = black_box(Vec::with_capacity(BUF_CAPACITY));
            black_box(buf.capacity())
        })
    });
}

criterion_group!(benches, churn);
criterion_main!(benches);
