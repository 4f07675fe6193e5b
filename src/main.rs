use anyhow::Result;
use clap::{Parser, Subcommand};
use diamonds_autopilot::benchmark::{run_benchmark, BenchmarkConfig};
use diamonds_autopilot::bots::describe_bots;
use diamonds_autopilot::runner::{run_bot, write_metrics};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "diamonds-autopilot", about = "Greedy diamond-collector bots and a local sandbox harness")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the registered bots.
    List,
    /// Run one bot through a seeded sandbox scenario and print metrics.
    Run {
        #[arg(long)]
        bot: String,
        #[arg(long, default_value_t = 0xDEAD_BEEF)]
        seed: u32,
        #[arg(long, default_value_t = 600)]
        ticks: u32,
        /// Also write the metrics JSON to this path.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Sweep bots across seeds and write report files.
    Benchmark {
        /// Comma-separated bot ids.
        #[arg(long, value_delimiter = ',')]
        bots: Vec<String>,
        /// Comma-separated seeds.
        #[arg(long, value_delimiter = ',')]
        seeds: Vec<u32>,
        #[arg(long, default_value_t = 600)]
        ticks: u32,
        #[arg(long)]
        out_dir: PathBuf,
        #[arg(long)]
        jobs: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            for (id, description) in describe_bots() {
                println!("{id:<12} {description}");
            }
        }
        Command::Run {
            bot,
            seed,
            ticks,
            out,
        } => {
            let artifact = run_bot(&bot, seed, ticks)?;
            println!("{}", serde_json::to_string_pretty(&artifact.metrics)?);
            if let Some(path) = out {
                write_metrics(&path, &artifact.metrics)?;
            }
        }
        Command::Benchmark {
            bots,
            seeds,
            ticks,
            out_dir,
            jobs,
        } => {
            let report = run_benchmark(BenchmarkConfig {
                bots,
                seeds,
                max_ticks: ticks,
                out_dir: out_dir.clone(),
                jobs,
            })?;
            for ranking in &report.bot_rankings {
                println!(
                    "{:<12} runs={} clears={} mean_score={:.2} mean_ticks={:.2}",
                    ranking.bot_id,
                    ranking.runs,
                    ranking.clears,
                    ranking.mean_score,
                    ranking.mean_ticks
                );
            }
            println!("reports written to {}", out_dir.display());
        }
    }

    Ok(())
}
