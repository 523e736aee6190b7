use std::path::PathBuf;
use std::process::exit;

use clap::{Args, Parser, Subcommand, ValueEnum};
use feast_core::config::{InputLimits, DEFAULT_MAX_ITEMS, DEFAULT_MAX_VALUE};
use feast_experiments::RankMetric;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{GenerateOptions, RunOptions, SweepOptions};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "feast",
    about = "Distribute candy pours over a line of cows",
    long_about = "Reads `N M`, then N cow heights and M candy heights, and prints\n\
                  the cow heights after every candy has been eaten in order."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one problem read from a file or stdin
    Run {
        /// Input file; reads stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Include one record per pour in JSON output
        #[arg(long)]
        record_pours: bool,
        #[command(flatten)]
        limits: LimitArgs,
    },
    /// Print a random problem in the input format
    Generate {
        #[arg(long, default_value_t = 100)]
        receivers: usize,
        #[arg(long, default_value_t = 100)]
        pours: usize,
        #[arg(long, default_value_t = 1_000)]
        max_capacity: u64,
        #[arg(long, default_value_t = 1_000)]
        max_pour: u64,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a grid of generated problems in parallel
    Sweep {
        #[arg(long, value_delimiter = ',', default_values_t = [10usize, 100, 1_000])]
        receivers: Vec<usize>,
        #[arg(long, value_delimiter = ',', default_values_t = [100usize, 1_000])]
        pours: Vec<usize>,
        #[arg(long, value_delimiter = ',', default_values_t = [1_000u64])]
        max_capacity: Vec<u64>,
        #[arg(long, value_delimiter = ',', default_values_t = [1_000u64])]
        max_pour: Vec<u64>,
        /// Cap applied to every --max-capacity and --max-pour entry
        #[arg(long)]
        max_value: Option<u64>,
        #[arg(long, value_delimiter = ',', default_values_t = [1u64, 2, 3])]
        seeds: Vec<u64>,
        /// Worker threads; rayon's default when omitted
        #[arg(long)]
        threads: Option<usize>,
        /// Export file; `.csv` or `.json`
        #[arg(long)]
        output: Option<PathBuf>,
        /// Metric used to pick the best run
        #[arg(long, value_enum, default_value_t = RankArg::AbsorptionRate)]
        rank_by: RankArg,
        /// Show a progress bar
        #[arg(long)]
        progress: bool,
    },
}

#[derive(Args)]
struct LimitArgs {
    /// Largest accepted N
    #[arg(long, env = "FEAST_MAX_RECEIVERS", default_value_t = DEFAULT_MAX_ITEMS)]
    max_receivers: usize,
    /// Largest accepted M
    #[arg(long, env = "FEAST_MAX_POURS", default_value_t = DEFAULT_MAX_ITEMS)]
    max_pours: usize,
    /// Largest accepted height
    #[arg(long, env = "FEAST_MAX_VALUE", default_value_t = DEFAULT_MAX_VALUE)]
    max_value: u64,
}

impl LimitArgs {
    fn into_limits(self) -> InputLimits {
        InputLimits::default()
            .with_max_receivers(self.max_receivers)
            .with_max_pours(self.max_pours)
            .with_max_value(self.max_value)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Final heights on one line
    Text,
    /// Full report as JSON
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum RankArg {
    AbsorptionRate,
    ScanEfficiency,
    FinalCapacityMax,
}

impl From<RankArg> for RankMetric {
    fn from(arg: RankArg) -> Self {
        match arg {
            RankArg::AbsorptionRate => RankMetric::AbsorptionRate,
            RankArg::ScanEfficiency => RankMetric::ScanEfficiency,
            RankArg::FinalCapacityMax => RankMetric::FinalCapacityMax,
        }
    }
}

// ── main ───────────────────────────────────────────────────────────

const DEFAULT_LOG_FILTER: &str = "warn,feast_core=info,feast_experiments=info,feast=info";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = match cli.command {
        Commands::Run {
            input,
            format,
            record_pours,
            limits,
        } => commands::run(
            RunOptions {
                input,
                format,
                record_pours,
                limits: limits.into_limits(),
            },
            &mut out,
        ),
        Commands::Generate {
            receivers,
            pours,
            max_capacity,
            max_pour,
            seed,
        } => commands::generate(
            GenerateOptions {
                receivers,
                pours,
                max_capacity,
                max_pour,
                seed,
            },
            &mut out,
        ),
        Commands::Sweep {
            receivers,
            pours,
            max_capacity,
            max_pour,
            max_value,
            seeds,
            threads,
            output,
            rank_by,
            progress,
        } => commands::sweep(
            SweepOptions {
                receivers,
                pours,
                max_capacity,
                max_pour,
                max_value,
                seeds,
                threads,
                output,
                rank_by: rank_by.into(),
                progress,
            },
            &mut out,
        ),
    };

    if let Err(err) = outcome {
        error!("{err}");
        exit(1);
    }
}
