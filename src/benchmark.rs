use crate::runner::{run_bot, RunMetrics};
use anyhow::{anyhow, Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    pub bots: Vec<String>,
    pub seeds: Vec<u32>,
    pub max_ticks: u32,
    pub out_dir: PathBuf,
    pub jobs: Option<usize>,
}

#[derive(Clone, Debug, Serialize)]
pub struct BotRanking {
    pub bot_id: String,
    pub runs: usize,
    pub clears: usize,
    pub mean_score: f64,
    pub mean_ticks: f64,
}

#[derive(Clone, Debug, Serialize)]
pub struct BenchmarkReport {
    pub run_count: usize,
    pub bot_rankings: Vec<BotRanking>,
    pub runs: Vec<RunMetrics>,
}

/// Run every bot against every seed, rank by mean score (ties broken by
/// fewer mean ticks), and write `summary.json`, `runs.csv`, and
/// `rankings.csv` into the output directory.
pub fn run_benchmark(config: BenchmarkConfig) -> Result<BenchmarkReport> {
    if config.bots.is_empty() {
        return Err(anyhow!("benchmark needs at least one bot"));
    }
    if config.seeds.is_empty() {
        return Err(anyhow!("benchmark needs at least one seed"));
    }

    if let Some(jobs) = config.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .ok();
    }

    let mut jobs: Vec<(String, u32)> = Vec::new();
    for bot in &config.bots {
        for seed in &config.seeds {
            jobs.push((bot.clone(), *seed));
        }
    }

    let runs: Vec<RunMetrics> = jobs
        .par_iter()
        .map(|(bot, seed)| run_bot(bot, *seed, config.max_ticks).map(|artifact| artifact.metrics))
        .collect::<Result<Vec<_>>>()?;

    let mut rankings: Vec<BotRanking> = config
        .bots
        .iter()
        .map(|bot| {
            let bot_runs: Vec<&RunMetrics> =
                runs.iter().filter(|run| &run.bot_id == bot).collect();
            let count = bot_runs.len().max(1);
            BotRanking {
                bot_id: bot.clone(),
                runs: bot_runs.len(),
                clears: bot_runs.iter().filter(|run| run.cleared).count(),
                mean_score: bot_runs.iter().map(|run| run.final_score as f64).sum::<f64>()
                    / count as f64,
                mean_ticks: bot_runs.iter().map(|run| run.tick_count as f64).sum::<f64>()
                    / count as f64,
            }
        })
        .collect();
    rankings.sort_by(|a, b| {
        b.mean_score
            .total_cmp(&a.mean_score)
            .then_with(|| a.mean_ticks.total_cmp(&b.mean_ticks))
            .then_with(|| a.bot_id.cmp(&b.bot_id))
    });

    let report = BenchmarkReport {
        run_count: runs.len(),
        bot_rankings: rankings,
        runs,
    };

    write_reports(&config, &report)?;
    Ok(report)
}

fn write_reports(config: &BenchmarkConfig, report: &BenchmarkReport) -> Result<()> {
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed creating {}", config.out_dir.display()))?;

    let summary = serde_json::to_string_pretty(report)?;
    fs::write(config.out_dir.join("summary.json"), summary)?;

    let mut runs_csv =
        String::from("bot_id,seed,tick_count,final_score,cleared,idle_ticks,horizontal_ticks,vertical_ticks\n");
    for run in &report.runs {
        runs_csv.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            run.bot_id,
            run.seed,
            run.tick_count,
            run.final_score,
            run.cleared,
            run.idle_ticks,
            run.horizontal_ticks,
            run.vertical_ticks,
        ));
    }
    fs::write(config.out_dir.join("runs.csv"), runs_csv)?;

    let mut rankings_csv = String::from("bot_id,runs,clears,mean_score,mean_ticks\n");
    for ranking in &report.bot_rankings {
        rankings_csv.push_str(&format!(
            "{},{},{},{:.2},{:.2}\n",
            ranking.bot_id, ranking.runs, ranking.clears, ranking.mean_score, ranking.mean_ticks,
        ));
    }
    fs::write(config.out_dir.join("rankings.csv"), rankings_csv)?;

    Ok(())
}
