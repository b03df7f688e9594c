use clap::Parser as _;
use rand::SeedableRng as _;

mod cli;
mod data;

/// Program entry point
fn main() {
    let cli::Args {
        method,
        data,
        lists,
        runs,
        size,
        seed,
    } = cli::Args::parse();

    println!("Running measurements for merge method {method} over {lists} sorted lists");
    println!("Runs: {runs}, Total elements: {size}, Data type: {data}");

    // Create rng
    let mut rng = match seed {
        Some(partial_seed) => rand::rngs::StdRng::seed_from_u64(partial_seed),
        None => {
            println!("No seed provided, generating one using system rng");
            rand::rngs::StdRng::from_os_rng()
        }
    };

    let stats = match data {
        cli::DataType::UniformU32 => {
            perform_experiment::<u32, data::UniformData<u32>>(method, runs, size, lists, &mut rng)
        }
        cli::DataType::UniformU64 => {
            perform_experiment::<u64, data::UniformData<u64>>(method, runs, size, lists, &mut rng)
        }
        cli::DataType::GaussianI64 => {
            perform_experiment::<i64, data::GaussianData>(method, runs, size, lists, &mut rng)
        }
    };

    println!("Stats: {stats:?}");

    #[cfg(feature = "counters")]
    println!(
        "Head comparisons: {}",
        kway_merge::merge::COMPARE_COUNTER.get()
    );
}

/// Perform a time sampling experiment on the given merge method
///
/// - runs: The number of samples to measure
/// - size: The total number of elements across all input lists
/// - lists: The number of sorted input lists to generate
/// - rng: The rng used for sampling the data
fn perform_experiment<T: Ord + Clone + std::fmt::Debug, D: data::Data<T>>(
    method: cli::Method,
    runs: usize,
    size: usize,
    lists: usize,
    rng: &mut rand::rngs::StdRng,
) -> rolling_stats::Stats<f64> {
    let merger = method.merger::<T>();

    let mut stats: rolling_stats::Stats<f64> = rolling_stats::Stats::new();

    let bar = indicatif::ProgressBar::new(runs as u64);

    for run in 0..=runs {
        let input = data::into_sorted_lists(D::initialize(size, rng), lists);
        let mut output = Vec::with_capacity(size);

        let now = std::time::Instant::now();
        merger(std::hint::black_box(&input), std::hint::black_box(&mut output));
        let elapsed = now.elapsed();

        debug_assert!(output.is_sorted(), "Merged output is not sorted");
        debug_assert_eq!(output.len(), size, "Merged output lost elements");

        // Skip the warmup sample
        if run != 0 {
            stats.update(elapsed.as_secs_f64() * 1_000.0);

            bar.inc(1);
        }
    }

    bar.finish();

    stats
}
