//! Host-side data contracts for the diamonds arena.
//!
//! The shapes here mirror what the game engine hands a bot every tick:
//! a board snapshot plus the bot's own `GameObject`. The engine owns the
//! rules; bots only read these structures and answer with a single
//! orthogonal [`Displacement`].

use serde::{Deserialize, Serialize};

pub mod rng;
pub mod sandbox;

pub use rng::SeededRng;
pub use sandbox::Sandbox;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan_distance(self, other: Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn offset(self, step: Displacement) -> Position {
        Position {
            x: self.x + step.dx,
            y: self.y + step.dy,
        }
    }
}

/// One tick's movement answer: at most one axis non-zero, magnitude <= 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Displacement {
    pub dx: i32,
    pub dy: i32,
}

impl Displacement {
    pub const HOLD: Displacement = Displacement { dx: 0, dy: 0 };
    pub const RIGHT: Displacement = Displacement { dx: 1, dy: 0 };
    pub const LEFT: Displacement = Displacement { dx: -1, dy: 0 };
    pub const DOWN: Displacement = Displacement { dx: 0, dy: 1 };
    pub const UP: Displacement = Displacement { dx: 0, dy: -1 };

    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    pub fn is_unit_step(self) -> bool {
        self.dx.abs() + self.dy.abs() == 1
    }
}

/// Fixed scan order used both for escape moves and for the blocked-path
/// fallback: right, left, down, up.
pub const STEP_SCAN: [Displacement; 4] = [
    Displacement::RIGHT,
    Displacement::LEFT,
    Displacement::DOWN,
    Displacement::UP,
];

/// Property bag attached to a `GameObject`. The engine populates only the
/// fields that apply to the object's kind, so everything is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperties {
    pub points: Option<i32>,
    pub diamonds: Option<i32>,
    pub inventory_size: Option<i32>,
    pub base: Option<Position>,
    pub score: Option<i32>,
}

/// The bot-specific view of a property bag, per the host contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotProperties {
    pub diamonds: i32,
    pub inventory_size: i32,
    pub base: Position,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameObject {
    pub id: u32,
    pub kind: String,
    pub position: Position,
    pub properties: Option<ObjectProperties>,
}

impl GameObject {
    pub fn diamond(id: u32, position: Position, points: i32) -> Self {
        Self {
            id,
            kind: "DiamondGameObject".to_string(),
            position,
            properties: Some(ObjectProperties {
                points: Some(points),
                ..ObjectProperties::default()
            }),
        }
    }

    pub fn bot(id: u32, position: Position, props: ObjectProperties) -> Self {
        Self {
            id,
            kind: "BotGameObject".to_string(),
            position,
            properties: Some(props),
        }
    }

    pub fn button(id: u32, position: Position) -> Self {
        Self {
            id,
            kind: "DiamondButtonGameObject".to_string(),
            position,
            properties: None,
        }
    }

    /// 2-point diamonds are "red". Classified by the points field when the
    /// engine populated it, otherwise by a marker in the kind label.
    pub fn is_red_diamond(&self) -> bool {
        if let Some(points) = self.properties.as_ref().and_then(|p| p.points) {
            return points == 2;
        }
        self.kind.to_lowercase().contains("red")
    }

    pub fn point_value(&self) -> i32 {
        if self.is_red_diamond() {
            2
        } else {
            1
        }
    }

    pub fn is_button(&self) -> bool {
        self.kind.to_lowercase().contains("button")
    }

    /// Bot view of the property bag. `None` when the engine handed us an
    /// object without the fields a bot must carry.
    pub fn bot_properties(&self) -> Option<BotProperties> {
        let props = self.properties.as_ref()?;
        Some(BotProperties {
            diamonds: props.diamonds?,
            inventory_size: props.inventory_size?,
            base: props.base?,
        })
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub diamonds: Vec<GameObject>,
    pub bots: Vec<GameObject>,
    pub game_objects: Vec<GameObject>,
}

impl Board {
    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    pub fn bot_at(&self, position: Position) -> bool {
        self.bots.iter().any(|bot| bot.position == position)
    }

    /// A unit step is legal when the destination is on the board and no
    /// other bot occupies it. Diamonds and buttons never block movement.
    pub fn step_is_valid(&self, from: Position, step: Displacement) -> bool {
        let dest = from.offset(step);
        self.contains(dest) && !self.bot_at(dest)
    }

    pub fn find_button(&self) -> Option<&GameObject> {
        self.game_objects.iter().find(|object| object.is_button())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board(width: i32, height: i32) -> Board {
        Board {
            width,
            height,
            diamonds: Vec::new(),
            bots: Vec::new(),
            game_objects: Vec::new(),
        }
    }

    #[test]
    fn manhattan_distance_sums_axes() {
        let a = Position::new(1, 2);
        let b = Position::new(4, -1);
        assert_eq!(a.manhattan_distance(b), 6);
        assert_eq!(b.manhattan_distance(a), 6);
        assert_eq!(a.manhattan_distance(a), 0);
    }

    #[test]
    fn step_validation_checks_bounds() {
        let board = empty_board(3, 3);
        assert!(board.step_is_valid(Position::new(1, 1), Displacement::RIGHT));
        assert!(!board.step_is_valid(Position::new(2, 1), Displacement::RIGHT));
        assert!(!board.step_is_valid(Position::new(0, 0), Displacement::UP));
        assert!(!board.step_is_valid(Position::new(0, 0), Displacement::LEFT));
    }

    #[test]
    fn step_validation_checks_occupancy() {
        let mut board = empty_board(3, 3);
        board.bots.push(GameObject::bot(
            7,
            Position::new(2, 1),
            ObjectProperties::default(),
        ));
        assert!(!board.step_is_valid(Position::new(1, 1), Displacement::RIGHT));
        assert!(board.step_is_valid(Position::new(1, 1), Displacement::LEFT));
    }

    #[test]
    fn red_classification_prefers_points_over_label() {
        let red = GameObject::diamond(1, Position::new(0, 0), 2);
        let blue = GameObject::diamond(2, Position::new(0, 0), 1);
        assert!(red.is_red_diamond());
        assert!(!blue.is_red_diamond());

        // Sparse property bag falls back to the kind label.
        let unlabeled = GameObject {
            id: 3,
            kind: "RedDiamondGameObject".to_string(),
            position: Position::new(0, 0),
            properties: None,
        };
        assert!(unlabeled.is_red_diamond());
        assert_eq!(unlabeled.point_value(), 2);

        let labeled_blue = GameObject {
            id: 4,
            kind: "RedDiamondGameObject".to_string(),
            position: Position::new(0, 0),
            properties: Some(ObjectProperties {
                points: Some(1),
                ..ObjectProperties::default()
            }),
        };
        assert!(!labeled_blue.is_red_diamond());
    }
}
