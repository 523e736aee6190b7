use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the candy feast workspace",
    long_about = "A unified CLI for running sample problems, sweeps, benchmarks,\n\
                  and CI checks in the candy feast workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a seeded problem and simulate it through the CLI
    Run {
        /// Number of cows
        #[arg(long, default_value_t = 1_000)]
        receivers: usize,
        /// Number of candies
        #[arg(long, default_value_t = 1_000)]
        pours: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Run the default parameter sweep and export it to CSV
    Sweep {
        /// Output file path
        #[arg(long, default_value = "sweep_results.csv")]
        output: String,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Compare benchmarks: stash changes, create baseline, restore, compare
    BenchCompare,
    /// Run CI checks (fmt, clippy, tests, samples, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Run load tests (ignored tests in feast_core)
    LoadTest,
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Build and run sample problems
    Samples,
    /// Run benchmarks
    Bench,
    /// Run check + samples + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn git(args: &[&str]) -> ExitStatus {
    eprintln!("+ git {}", args.join(" "));
    Command::new("git")
        .args(args)
        .status()
        .expect("failed to execute git")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn run_git(args: &[&str]) {
    let status = git(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

/// Generate a problem with the CLI, then pipe it back into `feast run`.
fn run_sample(receivers: usize, pours: usize, seed: u64) {
    let receivers = receivers.to_string();
    let pours = pours.to_string();
    let seed = seed.to_string();

    step("Build feast CLI");
    run_cargo(&["build", "-p", "feast_cli", "--release"]);

    let exe = if cfg!(windows) { "feast.exe" } else { "feast" };
    let binary = Path::new("target").join("release").join(exe);

    step("Generate problem");
    let generated = Command::new(&binary)
        .args([
            "generate",
            "--receivers",
            &receivers,
            "--pours",
            &pours,
            "--seed",
            &seed,
        ])
        .output()
        .expect("failed to execute feast generate");
    if !generated.status.success() {
        exit(generated.status.code().unwrap_or(1));
    }

    step("Simulate problem");
    let mut child = Command::new(&binary)
        .args(["run", "--format", "json"])
        .stdin(std::process::Stdio::piped())
        .spawn()
        .expect("failed to execute feast run");
    {
        use std::io::Write;
        let stdin = child.stdin.as_mut().expect("feast run stdin");
        stdin
            .write_all(&generated.stdout)
            .expect("failed to pipe problem into feast run");
    }
    let status = child.wait().expect("failed to wait for feast run");
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test feast_core");
    run_cargo(&["test", "-p", "feast_core"]);

    step("Test feast_experiments");
    run_cargo(&["test", "-p", "feast_experiments"]);

    step("Test feast_cli");
    run_cargo(&["test", "-p", "feast_cli"]);
}

fn ci_samples() {
    step("Run sample (1K cows, 1K candies)");
    run_sample(1_000, 1_000, 42);

    step("Run sample (100K cows, 100K candies)");
    run_sample(100_000, 100_000, 7);
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(&["bench", "--package", "feast_core", "--bench", "performance"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            receivers,
            pours,
            seed,
        } => {
            run_sample(receivers, pours, seed);
        }
        Commands::Sweep { output } => {
            run_cargo(&[
                "run",
                "-p",
                "feast_cli",
                "--release",
                "--",
                "sweep",
                "--progress",
                "--output",
                &output,
            ]);
        }
        Commands::Bench => {
            run_cargo(&["bench", "--package", "feast_core", "--bench", "performance"]);
        }
        Commands::BenchCompare => {
            let baseline_dir = Path::new("target/criterion");
            if baseline_dir.exists() {
                step("Removing existing benchmark data");
                std::fs::remove_dir_all(baseline_dir)
                    .expect("failed to remove target/criterion");
            }

            step("Stashing current changes");
            run_git(&[
                "stash",
                "push",
                "-m",
                "Temporary stash for benchmark comparison",
            ]);

            step("Running benchmark to create baseline");
            run_cargo(&[
                "bench",
                "--package",
                "feast_core",
                "--bench",
                "performance",
                "--",
                "--save-baseline",
                "main",
            ]);

            step("Reapplying changes");
            run_git(&["stash", "pop"]);

            step("Running benchmark comparing against baseline");
            run_cargo(&[
                "bench",
                "--package",
                "feast_core",
                "--bench",
                "performance",
                "--",
                "--baseline",
                "main",
            ]);
        }
        Commands::Ci { job } => match job {
            CiJob::Check => ci_check(),
            CiJob::Samples => ci_samples(),
            CiJob::Bench => ci_bench(),
            CiJob::All => {
                ci_check();
                ci_samples();
                ci_bench();
            }
        },
        Commands::LoadTest => {
            run_cargo(&[
                "test",
                "--package",
                "feast_core",
                "--test",
                "load_tests",
                "--release",
                "--",
                "--ignored",
                "--nocapture",
            ]);
        }
    }
}
