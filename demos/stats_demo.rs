use clap::Parser;
use clap::ValueEnum;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use shift_hash::ByteHasher;
use shift_hash::ByteTable;
use shift_hash::DefaultByteHasher;
use shift_hash::Djb2;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum HasherKind {
    Default,
    Djb2,
}

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "entries", default_value_t = 100_000)]
    entries: usize,

    #[arg(short = 'k', long = "key_width", default_value_t = 16)]
    key_width: usize,

    /// Fraction of the entries removed again before statistics are printed.
    #[arg(short = 'r', long = "remove_fraction", default_value_t = 0.5)]
    remove_fraction: f64,

    #[arg(long = "hasher", value_enum, default_value_t = HasherKind::Default)]
    hasher: HasherKind,

    #[arg(long = "seed", default_value_t = 0)]
    seed: u64,
}

fn run<H: ByteHasher>(args: &Args, hasher: H) {
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut table = ByteTable::with_capacity_and_hasher(0, args.key_width, 4, hasher);

    let keys: Vec<Vec<u8>> = (0..args.entries)
        .map(|_| (0..args.key_width).map(|_| rng.random()).collect())
        .collect();

    println!("Filling table with {} keys...", args.entries);
    for (index, key) in keys.iter().enumerate() {
        if let Err(err) = table.put(key, &(index as u32).to_le_bytes()) {
            println!("Insert {index} failed: {err}");
            break;
        }
    }
    println!("Capacity after fill: {}", table.capacity());
    table.stats().print();

    let removals = (args.entries as f64 * args.remove_fraction.clamp(0.0, 1.0)) as usize;
    let mut not_found = 0;
    for key in keys.iter().take(removals) {
        if table.remove(key).is_err() {
            not_found += 1;
        }
    }
    println!("Removed {removals} keys ({not_found} were already absent)");
    table.stats().print();

    let misses = keys.iter().filter(|key| !table.contains(key)).count();
    println!("Lookups: {} hits, {} misses", keys.len() - misses, misses);
}

fn main() {
    let args = Args::parse();

    match args.hasher {
        HasherKind::Default => run(&args, DefaultByteHasher::default()),
        HasherKind::Djb2 => run(&args, Djb2),
    }
}
