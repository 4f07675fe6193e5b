//! The greedy collector.
//!
//! Priority per tick: break a deadlock, bank a full bag, chase the nearest
//! admissible diamond (anchored at home until the first find, at the current
//! position afterwards), walk any leftover haul home once the board is
//! empty, and finally head for the respawn button.

use crate::bots::common::{escape_step, nearest_diamond, step_toward};
use crate::bots::DiamondBot;
use crate::game::{Board, Displacement, GameObject, Position};
use serde::Serialize;

#[derive(Clone, Copy, Debug, Serialize)]
pub struct GreedyConfig {
    /// Consecutive ticks without movement before forcing an escape step.
    pub stuck_threshold: u32,
}

impl Default for GreedyConfig {
    fn default() -> Self {
        Self { stuck_threshold: 3 }
    }
}

pub struct GreedyBot {
    cfg: GreedyConfig,
    stuck_count: u32,
    last_position: Option<Position>,
    /// false: search anchored at home. true: search anchored at the current
    /// position, entered after the first diamond is found.
    collection_mode: bool,
}

impl GreedyBot {
    pub fn new() -> Self {
        Self::with_config(GreedyConfig::default())
    }

    pub fn with_config(cfg: GreedyConfig) -> Self {
        Self {
            cfg,
            stuck_count: 0,
            last_position: None,
            collection_mode: false,
        }
    }

    fn update_stuck_counter(&mut self, current: Position) {
        if self.last_position == Some(current) {
            self.stuck_count += 1;
        } else {
            self.stuck_count = 0;
        }
        self.last_position = Some(current);
    }

    fn break_stuck(&mut self, current: Position, board: &Board) -> Displacement {
        match escape_step(board, current) {
            Some(step) => {
                self.stuck_count = 0;
                step
            }
            // Boxed in completely; keep the counter so we retry next tick.
            None => Displacement::HOLD,
        }
    }
}

impl Default for GreedyBot {
    fn default() -> Self {
        Self::new()
    }
}

impl DiamondBot for GreedyBot {
    fn id(&self) -> &'static str {
        "greedy"
    }

    fn description(&self) -> &'static str {
        "Capacity-aware nearest-diamond collector with stuck escape and home/position search modes."
    }

    fn reset(&mut self) {
        self.stuck_count = 0;
        self.last_position = None;
        self.collection_mode = false;
    }

    fn next_move(&mut self, bot: &GameObject, board: &Board) -> Displacement {
        let current = bot.position;
        let Some(props) = bot.bot_properties() else {
            return Displacement::HOLD;
        };

        self.update_stuck_counter(current);
        if self.stuck_count >= self.cfg.stuck_threshold {
            return self.break_stuck(current, board);
        }

        // Bank only once the bag is full.
        if props.diamonds >= props.inventory_size {
            self.collection_mode = false;
            return step_toward(board, current, props.base);
        }

        let remaining_capacity = props.inventory_size - props.diamonds;
        let target = if self.collection_mode {
            match nearest_diamond(&board.diamonds, current, remaining_capacity) {
                Some(diamond) => Some(diamond),
                None => {
                    self.collection_mode = false;
                    nearest_diamond(&board.diamonds, props.base, remaining_capacity)
                }
            }
        } else {
            let found = nearest_diamond(&board.diamonds, props.base, remaining_capacity);
            if found.is_some() {
                self.collection_mode = true;
            }
            found
        };

        if let Some(diamond) = target {
            return step_toward(board, current, diamond.position);
        }

        // Board swept clean: press the button to respawn diamonds, but bank
        // whatever we still carry first.
        if board.diamonds.is_empty() && props.diamonds == 0 {
            self.collection_mode = false;
            if let Some(button) = board.find_button() {
                return step_toward(board, current, button.position);
            }
        }

        if props.diamonds > 0 {
            self.collection_mode = false;
            return step_toward(board, current, props.base);
        }

        Displacement::HOLD
    }
}
