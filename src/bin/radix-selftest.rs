use clap::Parser;
use log::{LevelFilter, info};
use radixsorter::radix_sort;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::process::ExitCode;

/// Sort a random integer sequence and check the result is non-decreasing.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Smallest exponent e for the element count 2^e (also the minimum key)
    #[arg(long, default_value_t = 10)]
    len_exp_min: u32,

    /// Largest exponent e for the element count 2^e
    #[arg(long, default_value_t = 16)]
    len_exp_max: u32,

    /// Smallest multiplier for the maximum key (max = min * spread)
    #[arg(long, default_value_t = 2)]
    spread_min: u64,

    /// Largest multiplier for the maximum key
    #[arg(long, default_value_t = 10)]
    spread_max: u64,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Print the sequence before and after sorting
    #[arg(long, default_value_t = false)]
    print: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    if args.len_exp_min > args.len_exp_max || args.len_exp_max > 30 {
        eprintln!("invalid length exponents: need min <= max <= 30");
        return ExitCode::from(2);
    }
    if args.spread_min == 0 || args.spread_min > args.spread_max {
        eprintln!("invalid spread: need 1 <= min <= max");
        return ExitCode::from(2);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let min = 1u64 << rng.random_range(args.len_exp_min..=args.len_exp_max);
    let max = min.saturating_mul(rng.random_range(args.spread_min..=args.spread_max));
    let input: Vec<u64> = (0..min).map(|_| rng.random_range(min..=max)).collect();
    info!("Generated {} keys in [{}, {}]", input.len(), min, max);

    if args.print {
        println!("{:?}", input);
    }
    let sorted = radix_sort(&input);
    if args.print {
        println!("{:?}", sorted);
    }

    if sorted.len() != input.len() {
        println!("That didn't sort right.");
        return ExitCode::FAILURE;
    }
    if let Some(i) = sorted.windows(2).position(|w| w[0] > w[1]) {
        info!("Out of order at index {}: {} > {}", i, sorted[i], sorted[i + 1]);
        println!("That didn't sort right.");
        return ExitCode::FAILURE;
    }

    println!("Looks sorted!");
    ExitCode::SUCCESS
}
