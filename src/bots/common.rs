//! Movement and targeting helpers shared by the strategies.

use crate::game::{Board, Displacement, GameObject, Position, STEP_SCAN};

/// Nearest admissible diamond from `reference` by Manhattan distance.
///
/// Red (2-point) diamonds are skipped when only one unit of carrying
/// capacity remains. Ties keep the first diamond encountered in the board's
/// iteration order: only a strictly smaller distance replaces the candidate.
pub fn nearest_diamond<'a>(
    diamonds: &'a [GameObject],
    reference: Position,
    remaining_capacity: i32,
) -> Option<&'a GameObject> {
    let mut nearest: Option<&GameObject> = None;
    let mut best_distance = i32::MAX;

    for diamond in diamonds {
        if remaining_capacity == 1 && diamond.is_red_diamond() {
            continue;
        }
        let distance = diamond.position.manhattan_distance(reference);
        if distance < best_distance {
            best_distance = distance;
            nearest = Some(diamond);
        }
    }

    nearest
}

/// One greedy step from `current` toward `target`: prefer the axis with the
/// larger remaining delta, fall back to the other axis, and when both are
/// blocked take the first open step in the fixed scan order. Returns the
/// null displacement only when boxed in completely or already on target.
pub fn step_toward(board: &Board, current: Position, target: Position) -> Displacement {
    if current == target {
        return Displacement::HOLD;
    }

    let dx = target.x - current.x;
    let dy = target.y - current.y;

    if dx.abs() >= dy.abs() {
        let step = Displacement::new(dx.signum(), 0);
        if board.step_is_valid(current, step) {
            return step;
        }
        if dy != 0 {
            let step = Displacement::new(0, dy.signum());
            if board.step_is_valid(current, step) {
                return step;
            }
        }
    } else {
        let step = Displacement::new(0, dy.signum());
        if board.step_is_valid(current, step) {
            return step;
        }
        if dx != 0 {
            let step = Displacement::new(dx.signum(), 0);
            if board.step_is_valid(current, step) {
                return step;
            }
        }
    }

    for step in STEP_SCAN {
        if board.step_is_valid(current, step) {
            return step;
        }
    }

    Displacement::HOLD
}

/// First open step in the fixed scan order, for breaking deadlocks.
pub fn escape_step(board: &Board, current: Position) -> Option<Displacement> {
    STEP_SCAN
        .into_iter()
        .find(|step| board.step_is_valid(current, *step))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ObjectProperties;

    fn board(width: i32, height: i32) -> Board {
        Board {
            width,
            height,
            diamonds: Vec::new(),
            bots: Vec::new(),
            game_objects: Vec::new(),
        }
    }

    fn rival(id: u32, x: i32, y: i32) -> GameObject {
        GameObject::bot(id, Position::new(x, y), ObjectProperties::default())
    }

    #[test]
    fn nearest_keeps_first_on_tie() {
        let diamonds = vec![
            GameObject::diamond(1, Position::new(2, 0), 1),
            GameObject::diamond(2, Position::new(0, 2), 1),
        ];
        let found = nearest_diamond(&diamonds, Position::new(0, 0), 3).unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn nearest_skips_red_at_single_capacity() {
        let diamonds = vec![
            GameObject::diamond(1, Position::new(1, 0), 2),
            GameObject::diamond(2, Position::new(3, 0), 1),
        ];
        let reference = Position::new(0, 0);
        assert_eq!(nearest_diamond(&diamonds, reference, 1).unwrap().id, 2);
        assert_eq!(nearest_diamond(&diamonds, reference, 2).unwrap().id, 1);
    }

    #[test]
    fn nearest_is_none_when_everything_excluded() {
        let diamonds = vec![GameObject::diamond(1, Position::new(1, 0), 2)];
        assert!(nearest_diamond(&diamonds, Position::new(0, 0), 1).is_none());
        assert!(nearest_diamond(&[], Position::new(0, 0), 3).is_none());
    }

    #[test]
    fn step_prefers_longer_axis() {
        let arena = board(10, 10);
        let step = step_toward(&arena, Position::new(0, 0), Position::new(4, 2));
        assert_eq!(step, Displacement::RIGHT);
        let step = step_toward(&arena, Position::new(0, 0), Position::new(2, 4));
        assert_eq!(step, Displacement::DOWN);
    }

    #[test]
    fn step_falls_back_to_other_axis_when_blocked() {
        let mut arena = board(10, 10);
        arena.bots.push(rival(9, 1, 0));
        let step = step_toward(&arena, Position::new(0, 0), Position::new(4, 2));
        assert_eq!(step, Displacement::DOWN);
    }

    #[test]
    fn step_scans_all_directions_when_both_axes_blocked() {
        let mut arena = board(10, 10);
        arena.bots.push(rival(8, 2, 1));
        arena.bots.push(rival(9, 1, 2));
        // From (1, 1) toward (4, 4): right and down blocked, scan gives left.
        let step = step_toward(&arena, Position::new(1, 1), Position::new(4, 4));
        assert_eq!(step, Displacement::LEFT);
    }

    #[test]
    fn step_holds_when_fully_boxed() {
        let arena = board(1, 1);
        assert_eq!(
            step_toward(&arena, Position::new(0, 0), Position::new(0, 0)),
            Displacement::HOLD
        );
        // Target beyond a wall with every direction off-board.
        assert_eq!(
            step_toward(&arena, Position::new(0, 0), Position::new(2, 0)),
            Displacement::HOLD
        );
    }

    #[test]
    fn escape_takes_first_open_direction() {
        let mut arena = board(3, 3);
        assert_eq!(
            escape_step(&arena, Position::new(1, 1)),
            Some(Displacement::RIGHT)
        );
        arena.bots.push(rival(9, 2, 1));
        assert_eq!(
            escape_step(&arena, Position::new(1, 1)),
            Some(Displacement::LEFT)
        );
        assert_eq!(escape_step(&board(1, 1), Position::new(0, 0)), None);
    }
}
