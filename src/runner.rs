use crate::bots::{bot_fingerprint, create_bot, DiamondBot};
use crate::game::{Displacement, Sandbox};
use anyhow::{anyhow, Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

const ARENA_WIDTH: i32 = 12;
const ARENA_HEIGHT: i32 = 10;
const ARENA_DIAMONDS: u32 = 8;

#[derive(Clone, Debug, Serialize)]
pub struct RunMetrics {
    pub bot_id: String,
    pub bot_fingerprint: String,
    pub seed: u32,
    pub max_ticks: u32,
    pub tick_count: u32,
    pub final_score: i32,
    pub cleared: bool,
    pub idle_ticks: u32,
    pub horizontal_ticks: u32,
    pub vertical_ticks: u32,
}

#[derive(Clone, Debug)]
pub struct RunArtifact {
    pub metrics: RunMetrics,
    pub moves: Vec<Displacement>,
}

/// Drive one bot through a seeded sandbox scenario until the board is
/// cleared and banked or `max_ticks` runs out.
pub fn run_bot(bot_id: &str, seed: u32, max_ticks: u32) -> Result<RunArtifact> {
    if max_ticks == 0 {
        return Err(anyhow!("max_ticks must be > 0"));
    }

    let mut bot = create_bot(bot_id).ok_or_else(|| anyhow!("unknown bot '{bot_id}'"))?;
    run_bot_instance(bot.as_mut(), seed, max_ticks)
}

pub fn run_bot_instance(
    bot: &mut dyn DiamondBot,
    seed: u32,
    max_ticks: u32,
) -> Result<RunArtifact> {
    if max_ticks == 0 {
        return Err(anyhow!("max_ticks must be > 0"));
    }

    bot.reset();

    let mut sandbox = Sandbox::generate(seed, ARENA_WIDTH, ARENA_HEIGHT, ARENA_DIAMONDS);
    let mut moves = Vec::with_capacity(max_ticks as usize);

    while sandbox.ticks() < max_ticks && !sandbox.cleared() {
        let agent = sandbox.agent().clone();
        let step = bot.next_move(&agent, sandbox.board());
        moves.push(step);
        sandbox.apply(step);
    }

    let mut idle_ticks = 0u32;
    let mut horizontal_ticks = 0u32;
    let mut vertical_ticks = 0u32;
    for step in &moves {
        if *step == Displacement::HOLD {
            idle_ticks += 1;
        } else if step.dx != 0 {
            horizontal_ticks += 1;
        } else {
            vertical_ticks += 1;
        }
    }

    Ok(RunArtifact {
        metrics: RunMetrics {
            bot_id: bot.id().to_string(),
            bot_fingerprint: bot_fingerprint(bot.id()).unwrap_or_else(|| "unknown".to_string()),
            seed,
            max_ticks,
            tick_count: sandbox.ticks(),
            final_score: sandbox.score(),
            cleared: sandbox.cleared(),
            idle_ticks,
            horizontal_ticks,
            vertical_ticks,
        },
        moves,
    })
}

pub fn write_metrics(path: &Path, metrics: &RunMetrics) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed creating directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(metrics)?;
    fs::write(path, json).with_context(|| format!("failed writing {}", path.display()))
}
