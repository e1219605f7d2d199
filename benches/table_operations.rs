use core::hint::black_box;

use criterion::AxisScale;
use criterion::BatchSize;
use criterion::Criterion;
use criterion::PlotConfiguration;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use hashbrown::HashMap as HashbrownMap;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use shift_hash::ByteTable;
use shift_hash::Djb2;

const KEY_WIDTH: usize = 16;
const VALUE_WIDTH: usize = 4;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const SIZES: &[usize] = &[
    (1 << 10),
    (1 << 12),
    (1 << 14),
    (1 << 16),
    100_000,
    (1 << 18),
];

type Pair = ([u8; KEY_WIDTH], [u8; VALUE_WIDTH]);

fn random_pairs(count: usize) -> Vec<Pair> {
    let mut rng = SmallRng::from_os_rng();
    (0..count)
        .map(|_| {
            let mut key = [0u8; KEY_WIDTH];
            for byte in key.iter_mut() {
                *byte = CHARSET[rng.random_range(0..CHARSET.len())];
            }
            (key, rng.random::<u32>().to_le_bytes())
        })
        .collect()
}

fn filled_table(pairs: &[Pair]) -> ByteTable {
    let mut table = ByteTable::with_capacity(pairs.len(), KEY_WIDTH, VALUE_WIDTH);
    for (key, value) in pairs {
        table.put(key, value).unwrap();
    }
    table
}

fn filled_hashbrown(pairs: &[Pair]) -> HashbrownMap<[u8; KEY_WIDTH], [u8; VALUE_WIDTH]> {
    let mut map = HashbrownMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        map.insert(*key, *value);
    }
    map
}

fn bench_put(c: &mut Criterion) {
    let mut group = c.benchmark_group("put");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let pairs = random_pairs(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("shift_hash/{size}"), |b| {
            b.iter_batched(
                || ByteTable::with_capacity(0, KEY_WIDTH, VALUE_WIDTH),
                |mut table| {
                    for (key, value) in &pairs {
                        black_box(table.put(key, value)).unwrap();
                    }
                    black_box(table)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("shift_hash_djb2/{size}"), |b| {
            b.iter_batched(
                || ByteTable::with_capacity_and_hasher(0, KEY_WIDTH, VALUE_WIDTH, Djb2),
                |mut table| {
                    for (key, value) in &pairs {
                        black_box(table.put(key, value)).unwrap();
                    }
                    black_box(table)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                HashbrownMap::new,
                |mut map| {
                    for (key, value) in &pairs {
                        black_box(map.insert(*key, *value));
                    }
                    black_box(map)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_hit");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let mut pairs = random_pairs(size);
        let table = filled_table(&pairs);
        let map = filled_hashbrown(&pairs);
        pairs.shuffle(&mut SmallRng::from_os_rng());
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("shift_hash/{size}"), |b| {
            b.iter(|| {
                for (key, _) in &pairs {
                    black_box(table.get(key)).unwrap();
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for (key, _) in &pairs {
                    black_box(map.get(key)).unwrap();
                }
            })
        });
    }

    group.finish();
}

fn bench_get_after_half_removed(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_after_half_removed");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let pairs = random_pairs(size);
        let mut table = filled_table(&pairs);
        let mut map = filled_hashbrown(&pairs);
        for (key, _) in &pairs[..size / 2] {
            table.remove(key).unwrap();
            map.remove(key);
        }
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("shift_hash/{size}"), |b| {
            b.iter(|| {
                for (key, _) in &pairs {
                    let _ = black_box(table.get(key));
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for (key, _) in &pairs {
                    black_box(map.get(key));
                }
            })
        });
    }

    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let pairs = random_pairs(size);
        let mut table = filled_table(&pairs);
        let mut map = filled_hashbrown(&pairs);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("shift_hash/{size}"), |b| {
            b.iter(|| {
                for (key, value) in &pairs {
                    black_box(table.set(key, value)).unwrap();
                }
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                for (key, value) in &pairs {
                    if let Some(slot) = map.get_mut(key) {
                        *slot = *value;
                    }
                }
            })
        });
    }

    group.finish();
}

fn bench_remove(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove");
    group.plot_config(PlotConfiguration::default().summary_scale(AxisScale::Logarithmic));

    for &size in SIZES {
        let pairs = random_pairs(size);
        let table = filled_table(&pairs);
        let map = filled_hashbrown(&pairs);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("shift_hash/{size}"), |b| {
            b.iter_batched(
                || table.clone(),
                |mut table| {
                    for (key, _) in &pairs {
                        black_box(table.remove(key)).unwrap();
                    }
                    black_box(table)
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || map.clone(),
                |mut map| {
                    for (key, _) in &pairs {
                        black_box(map.remove(key));
                    }
                    black_box(map)
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_put,
    bench_get_hit,
    bench_get_after_half_removed,
    bench_set,
    bench_remove,
);

criterion_main!(benches);
