pub mod beeline;
pub mod common;
pub mod greedy;

use crate::game::{Board, Displacement, GameObject};
use serde::Serialize;

/// One strategy the harness can drive. `next_move` is called once per tick
/// with the bot's own object and the current board snapshot; it must answer
/// immediately with an orthogonal or null displacement and may touch nothing
/// but its own memory.
pub trait DiamondBot {
    fn id(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Clear per-match memory. Called once before the first tick.
    fn reset(&mut self);
    fn next_move(&mut self, bot: &GameObject, board: &Board) -> Displacement;
}

#[derive(Clone, Debug, Serialize)]
pub struct BotManifestEntry {
    pub id: String,
    pub description: String,
    pub config_hash: String,
    pub config: serde_json::Value,
}

pub fn bot_ids() -> Vec<&'static str> {
    vec!["greedy", "beeline"]
}

pub fn describe_bots() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "greedy",
            "Capacity-aware nearest-diamond collector with stuck escape and home/position search modes.",
        ),
        (
            "beeline",
            "Memoryless baseline: straight line to the nearest diamond, home when full.",
        ),
    ]
}

pub fn create_bot(id: &str) -> Option<Box<dyn DiamondBot>> {
    match id {
        "greedy" => Some(Box::new(greedy::GreedyBot::new())),
        "beeline" => Some(Box::new(beeline::BeelineBot::new())),
        _ => None,
    }
}

pub fn bot_manifest() -> Vec<BotManifestEntry> {
    let mut entries = Vec::new();
    for (id, description) in describe_bots() {
        let config = match id {
            "greedy" => serde_json::to_value(greedy::GreedyConfig::default())
                .unwrap_or(serde_json::Value::Null),
            _ => serde_json::json!({}),
        };
        entries.push(BotManifestEntry {
            id: id.to_string(),
            description: description.to_string(),
            config_hash: hash_config(&config),
            config,
        });
    }
    entries
}

pub fn bot_fingerprint(id: &str) -> Option<String> {
    bot_manifest()
        .into_iter()
        .find(|entry| entry.id == id)
        .map(|entry| entry.config_hash)
}

fn hash_config(config: &serde_json::Value) -> String {
    let serialized = config.to_string();
    let hash = serialized
        .bytes()
        .fold(0u32, |acc, byte| acc.rotate_left(5) ^ (byte as u32));
    format!("{hash:08x}")
}
