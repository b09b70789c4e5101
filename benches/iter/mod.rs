use std::hint::black_box;

use avlmap::AvlMap;
use criterion::{measurement::Measurement, BenchmarkGroup, BenchmarkId, Criterion, Throughput};

use crate::Lfsr;

#[derive(Debug)]
struct BenchName {
    bench_name: &'static str,
    n_values: usize,
}

impl From<BenchName> for BenchmarkId {
    fn from(v: BenchName) -> Self {
        Self::new(format!("{}/n_values", v.bench_name), v.n_values)
    }
}

pub(super) fn bench(c: &mut Criterion) {
    let mut g = c.benchmark_group("iter");

    for n_values in [1, 100, 1_000, 10_000] {
        bench_param(&mut g, n_values)
    }
}

fn bench_param<M>(g: &mut BenchmarkGroup<'_, M>, n_values: usize)
where
    M: Measurement,
{
    // Generate the map.
    let mut rand = Lfsr::default();
    let mut t = AvlMap::default();

    for _i in 0..n_values {
        t.insert(rand.next(), 42_usize);
    }

    bench_ascending(n_values, g, &t);
    bench_descending(n_values, g, &t);
}

/// Walk the map front-to-back, successor by successor.
fn bench_ascending<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &AvlMap<u16, usize>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "ascending",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.iter() {
                black_box(v);
            }
        })
    });
}

/// Walk the map back-to-front, predecessor by predecessor.
fn bench_descending<M>(n_values: usize, g: &mut BenchmarkGroup<M>, t: &AvlMap<u16, usize>)
where
    M: Measurement,
{
    let bench_name = BenchName {
        n_values,
        bench_name: "descending",
    };

    g.throughput(Throughput::Elements(n_values as _));
    // Values per second
    g.bench_function(BenchmarkId::from(bench_name), |b| {
        b.iter(|| {
            for v in t.iter().rev() {
                black_box(v);
            }
        })
    });
}
