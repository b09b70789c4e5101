use avlmap::AvlMap;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug, Clone, Copy)]
struct BenchName {
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new("n_values", v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("remove");

    for n_values in [100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

/// Measure the time needed to remove every key from a map of `n_values`
/// randomly generated keys.
fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    let bench_name = BenchName { n_values };
    g.throughput(Throughput::Elements(n_values as _)); // Keys removed per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter_batched(
            || {
                let mut rand = Lfsr::default();
                let mut t = AvlMap::default();
                let mut keys = Vec::with_capacity(n_values);
                for _i in 0..n_values {
                    let key = rand.next();
                    keys.push(key);
                    t.insert(key, 42_usize);
                }
                (t, keys)
            },
            |(mut t, keys)| {
                for key in keys {
                    t.remove(&key);
                }
                t
            },
            criterion::BatchSize::PerIteration,
        );
    });
}
