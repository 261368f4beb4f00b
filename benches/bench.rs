#![allow(clippy::all)] // Clippy will attempt to remove black_box() internals

use criterion::*;
use cubicspline::{Cubic, Interp1D, Lookup};
use samplegen::*;

enum Order {
    Sorted,
    Shuffled,
}

fn bench_build(c: &mut Criterion) {
    for ndims in [1, 3] {
        let mut group = c.benchmark_group(format!("Build_{ndims}-channel"));
        for nknots in [2, 3, 4, 100, 10_000].iter() {
            group.throughput(Throughput::Elements(*nknots as u64));
            group.bench_with_input(
                BenchmarkId::new("Cubic::new", nknots),
                nknots,
                |b, &nknots| {
                    let (x, y) = gen_samples(nknots, ndims);
                    b.iter(|| black_box(Cubic::new(&x, &y).unwrap()));
                },
            );
        }
        group.finish();
    }
}

macro_rules! bench_eval_specific {
    ($group:ident, $nknots:expr, $ndims:expr, $size:expr, $order:expr) => {
        let order_name = match $order {
            Order::Sorted => "Sorted Order",
            Order::Shuffled => "Shuffled Order",
        };

        // The cursor is only valid on ascending points
        if let Order::Sorted = $order {
            $group.bench_with_input(
                BenchmarkId::new(
                    format!("Cursor {}x{}ch, {}", $nknots, $ndims, order_name),
                    $size,
                ),
                $size,
                |b, &size| {
                    let (x, y) = gen_samples($nknots, $ndims);
                    let spline = Cubic::new(&x, &y).unwrap();
                    let obs = gen_obs(&x, size, false);
                    let mut out = vec![0.0; size * $ndims];

                    b.iter(|| black_box(spline.eval(&obs, &mut out).unwrap()));
                },
            );
        }

        $group.bench_with_input(
            BenchmarkId::new(
                format!("Bisect {}x{}ch, {}", $nknots, $ndims, order_name),
                $size,
            ),
            $size,
            |b, &size| {
                let (x, y) = gen_samples($nknots, $ndims);
                let spline = Cubic::new(&x, &y).unwrap();
                let obs = gen_obs(&x, size, matches!($order, Order::Shuffled));
                let mut out = vec![0.0; size * $ndims];

                b.iter(|| {
                    black_box(
                        spline
                            .eval_with(&obs, &mut out, Lookup::Bisect)
                            .unwrap(),
                    )
                });
            },
        );
    };
}

fn bench_eval(c: &mut Criterion) {
    for nknots in [10, 1000] {
        let mut group = c.benchmark_group(format!("Eval_Sorted_{nknots}-knots"));
        for size in [1, 100, 1_000_000].iter() {
            group.throughput(Throughput::Elements(*size as u64));
            bench_eval_specific!(group, nknots, 1, size, Order::Sorted);
            bench_eval_specific!(group, nknots, 3, size, Order::Sorted);
        }
        group.finish();
    }

    for nknots in [10, 1000] {
        let mut group = c.benchmark_group(format!("Eval_Shuffled_{nknots}-knots"));
        for size in [1, 100, 1_000_000].iter() {
            group.throughput(Throughput::Elements(*size as u64));
            bench_eval_specific!(group, nknots, 1, size, Order::Shuffled);
        }
        group.finish();
    }
}

criterion_group!(benches_build, bench_build);
criterion_group!(benches_eval, bench_eval);
criterion_main!(benches_build, benches_eval,);

mod samplegen {
    use cubicspline::utils::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    /// Repeatable generator so every run benches the same samples
    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    // Generate unevenly spaced, strictly increasing knots scaled to [0, 100]
    // and some fake values with `ndims` channels.
    pub fn gen_samples(nknots: usize, ndims: usize) -> (Vec<f64>, Vec<f64>) {
        let mut rng = rng();
        let mut acc = 0.0;
        let mut x: Vec<f64> = (0..nknots)
            .map(|_| {
                acc += rng.random_range(0.5..1.5);
                acc
            })
            .collect();
        let (lo, hi) = (x[0], x[nknots - 1]);
        x.iter_mut().for_each(|v| *v = 100.0 * (*v - lo) / (hi - lo));

        let y = (0..nknots * ndims).map(|_| rng.random::<f64>()).collect();
        (x, y)
    }

    // Generate either sequential (scanning) or shuffled
    // observation points that are entirely inside the knots.
    pub fn gen_obs(x: &[f64], size: usize, shuffled: bool) -> Vec<f64> {
        let mut obs = match size {
            1 => vec![0.5 * (x[0] + x[x.len() - 1])],
            _ => linspace(x[0], x[x.len() - 1], size).unwrap(),
        };
        if shuffled {
            obs.shuffle(&mut rng());
        }
        obs
    }
}
