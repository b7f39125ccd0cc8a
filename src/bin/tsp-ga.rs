//! Command-line driver: generates a random map and optimizes a tour over it.

use clap::Parser;
use tracing::error;
use u_tsp::ga::{TspConfig, TspRunner};
use u_tsp::report::TracingReporter;

#[derive(Parser)]
#[command(name = "tsp-ga")]
#[command(about = "Approximate a shortest round trip over random cities with a genetic algorithm")]
struct Args {
    /// Number of cities
    #[arg(short, long, default_value = "20")]
    cities: usize,

    /// Number of tours per generation
    #[arg(short, long, default_value = "30")]
    population: usize,

    /// Upper bound of city coordinates
    #[arg(long, default_value = "1000")]
    map_boundary: u32,

    /// Generation cap
    #[arg(short, long, default_value = "1000")]
    iterations: usize,

    /// Tournament pool size
    #[arg(long, default_value = "5")]
    pool_size: usize,

    /// Per-position swap probability
    #[arg(short, long, default_value = "0.15")]
    mutation_rate: f64,

    /// Tours carried unmutated into the next generation
    #[arg(short, long, default_value = "1")]
    elites: usize,

    /// Stop once best-ever / generation-best falls to this ratio
    #[arg(long, default_value = "0.1")]
    improvement_factor: f64,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Compute tour distances in parallel (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Logging level
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn config(&self) -> TspConfig {
        let mut config = TspConfig::default()
            .with_cities_in_tour(self.cities)
            .with_population_size(self.population)
            .with_map_boundary(self.map_boundary)
            .with_iterations(self.iterations)
            .with_parent_pool_size(self.pool_size)
            .with_mutation_rate(self.mutation_rate)
            .with_number_of_elites(self.elites)
            .with_improvement_factor(self.improvement_factor)
            .with_parallel(self.parallel);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}

fn main() -> std::process::ExitCode {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        _ => tracing::Level::INFO,
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    match TspRunner::run_generated(&args.config(), &mut TracingReporter) {
        Ok(result) => {
            println!("Shortest distance: {:.3}", result.best_distance);
            std::process::ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "optimization failed");
            std::process::ExitCode::FAILURE
        }
    }
}
