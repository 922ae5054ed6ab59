use crate::collision::{collides, Collidable, Rectangle};

/// Side length of the player block in pixels.
pub const BLOCK_SIZE: i32 = 50;

/// Where the player block appears when a run starts.
pub const PLAYER_START_X: i32 = 20;
pub const PLAYER_START_Y: i32 = 20;

/// Pixels moved per key per frame.
pub const MOVEMENT_DELTA: i32 = 5;

/// The four movement directions bound to W/A/S/D.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Per-step offset `(dx, dy)` for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-MOVEMENT_DELTA, 0),
            Direction::Right => (MOVEMENT_DELTA, 0),
            Direction::Up => (0, -MOVEMENT_DELTA),
            Direction::Down => (0, MOVEMENT_DELTA),
        }
    }
}

/// The player block at its starting position.
pub fn spawn() -> Rectangle {
    Rectangle::new(PLAYER_START_X, PLAYER_START_Y, BLOCK_SIZE, BLOCK_SIZE)
}

/// Moves the player one step and undoes the step if it lands inside `obstacle`.
///
/// The undo subtracts exactly what was added, so a blocked move leaves the
/// player bit-for-bit where it was. Steps wrap at the ends of the `i32`
/// range instead of overflowing. There is no clamping to the screen; the
/// block can walk off the playfield.
pub fn move_player(direction: Direction, player: &mut Rectangle, obstacle: &impl Collidable) {
    let (dx, dy) = direction.offset();

    player.x = player.x.wrapping_add(dx);
    player.y = player.y.wrapping_add(dy);

    if collides(player, &obstacle.bounds()) {
        player.x = player.x.wrapping_sub(dx);
        player.y = player.y.wrapping_sub(dy);
    }
}
