//! Local stand-in for the game engine, used by the runner, the benchmark
//! sweep, and the integration tests. It applies one displacement per tick
//! with the same legality rules the engine enforces: stay on the board,
//! never share a cell with another bot.
//!
//! This is harness machinery only. In a real match the engine owns the
//! board and bots just answer `next_move`.

use crate::game::rng::SeededRng;
use crate::game::{Board, Displacement, GameObject, ObjectProperties, Position};

const DEFAULT_INVENTORY_SIZE: i32 = 5;

pub struct Sandbox {
    board: Board,
    score: i32,
    ticks: u32,
}

impl Sandbox {
    /// Wrap an existing board. The agent under test must be `board.bots[0]`
    /// and carry a full property bag (diamonds, inventory_size, base).
    pub fn new(board: Board) -> Self {
        debug_assert!(!board.bots.is_empty());
        debug_assert!(board.bots[0].bot_properties().is_some());
        Self {
            board,
            score: 0,
            ticks: 0,
        }
    }

    /// Deterministic scenario: agent on its base at the origin, `diamond_count`
    /// diamonds scattered over distinct free cells (every third one red), and
    /// one button. The same seed always yields the same board.
    pub fn generate(seed: u32, width: i32, height: i32, diamond_count: u32) -> Self {
        debug_assert!(width >= 3 && height >= 3);
        let mut rng = SeededRng::new(seed);
        let base = Position::new(0, 0);

        let mut occupied = vec![base];
        let free_cell = |rng: &mut SeededRng, occupied: &mut Vec<Position>| loop {
            let cell = Position::new(rng.next_range(0, width), rng.next_range(0, height));
            if !occupied.contains(&cell) {
                occupied.push(cell);
                return cell;
            }
        };

        let mut diamonds = Vec::with_capacity(diamond_count as usize);
        for index in 0..diamond_count {
            let cell = free_cell(&mut rng, &mut occupied);
            let points = if index % 3 == 2 { 2 } else { 1 };
            diamonds.push(GameObject::diamond(10 + index, cell, points));
        }

        let button_cell = free_cell(&mut rng, &mut occupied);

        let agent = GameObject::bot(
            0,
            base,
            ObjectProperties {
                diamonds: Some(0),
                inventory_size: Some(DEFAULT_INVENTORY_SIZE),
                base: Some(base),
                score: Some(0),
                ..ObjectProperties::default()
            },
        );

        let game_objects = vec![
            GameObject {
                id: 1,
                kind: "BaseGameObject".to_string(),
                position: base,
                properties: None,
            },
            GameObject::button(2, button_cell),
        ];

        Self::new(Board {
            width,
            height,
            diamonds,
            bots: vec![agent],
            game_objects,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn agent(&self) -> &GameObject {
        &self.board.bots[0]
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Board emptied and everything banked.
    pub fn cleared(&self) -> bool {
        self.board.diamonds.is_empty() && self.carried() == 0
    }

    fn carried(&self) -> i32 {
        self.agent()
            .bot_properties()
            .map(|props| props.diamonds)
            .unwrap_or(0)
    }

    /// Advance one tick. Illegal or null displacements leave the agent in
    /// place; a legal step moves it, picking up any diamond on the
    /// destination cell (if it fits the bag) and banking on the base.
    pub fn apply(&mut self, step: Displacement) {
        self.ticks += 1;

        if !step.is_unit_step() {
            return;
        }
        let from = self.agent().position;
        let Some(props) = self.agent().bot_properties() else {
            return;
        };
        if !self.board.step_is_valid(from, step) {
            return;
        }

        let dest = from.offset(step);
        self.board.bots[0].position = dest;

        if let Some(index) = self
            .board
            .diamonds
            .iter()
            .position(|diamond| diamond.position == dest)
        {
            let gain = self.board.diamonds[index].point_value();
            if props.diamonds + gain <= props.inventory_size {
                self.board.diamonds.remove(index);
                self.set_carried(props.diamonds + gain);
            }
        }

        let carried = self.carried();
        if dest == props.base && carried > 0 {
            self.score += carried;
            self.set_carried(0);
        }
    }

    fn set_carried(&mut self, value: i32) {
        if let Some(bag) = self.board.bots[0].properties.as_mut() {
            bag.diamonds = Some(value);
        }
    }
}
