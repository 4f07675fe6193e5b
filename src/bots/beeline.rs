//! Memoryless baseline used as the benchmark comparison point: walk to the
//! nearest diamond from wherever we are, bank when the bag is full, and
//! otherwise carry whatever we hold back home.

use crate::bots::common::{nearest_diamond, step_toward};
use crate::bots::DiamondBot;
use crate::game::{Board, Displacement, GameObject};

pub struct BeelineBot;

impl BeelineBot {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BeelineBot {
    fn default() -> Self {
        Self::new()
    }
}

impl DiamondBot for BeelineBot {
    fn id(&self) -> &'static str {
        "beeline"
    }

    fn description(&self) -> &'static str {
        "Memoryless baseline: straight line to the nearest diamond, home when full."
    }

    fn reset(&mut self) {}

    fn next_move(&mut self, bot: &GameObject, board: &Board) -> Displacement {
        let current = bot.position;
        let Some(props) = bot.bot_properties() else {
            return Displacement::HOLD;
        };

        if props.diamonds >= props.inventory_size {
            return step_toward(board, current, props.base);
        }

        let remaining_capacity = props.inventory_size - props.diamonds;
        if let Some(diamond) = nearest_diamond(&board.diamonds, current, remaining_capacity) {
            return step_toward(board, current, diamond.position);
        }

        if props.diamonds > 0 {
            return step_toward(board, current, props.base);
        }

        Displacement::HOLD
    }
}
