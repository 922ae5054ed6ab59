/// GameWorld struct and per-frame update
///
/// This module contains the GameWorld struct which owns the player block, the
/// map element, the scores and the active screen. It has no SDL2 handles, so a
/// whole frame can be stepped in tests.
use crate::collision::Rectangle;
use crate::input_system::FrameInput;
use crate::player::{self, BLOCK_SIZE};

use super::{ScreenState, Scores};

/// What happened during one call to `GameWorld::update`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Stop the loop once this frame has been presented
    pub quit: bool,
    /// The screen to draw this frame (the one active when the frame began)
    pub screen: ScreenState,
    /// Pause input before the next frame
    pub hold_input: bool,
}

/// GameWorld holds everything the loop mutates
pub struct GameWorld {
    pub player: Rectangle,
    pub map_element: Rectangle,
    pub scores: Scores,
    pub screen: ScreenState,
}

impl GameWorld {
    /// Sets up a fresh run on a playfield of the given size.
    ///
    /// The map element's top-left corner sits at the center of the playfield.
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        GameWorld {
            player: player::spawn(),
            map_element: Rectangle::new(
                screen_width / 2,
                screen_height / 2,
                2 * BLOCK_SIZE,
                2 * BLOCK_SIZE,
            ),
            scores: Scores::default(),
            screen: ScreenState::default(),
        }
    }

    /// Whether the current round has been won.
    ///
    /// No scoring rule exists, so this never fires and GameOver is
    /// unreachable in a normal run.
    pub fn round_over(&self) -> bool {
        false
    }

    /// Runs the logic for one frame.
    ///
    /// Movement is applied on every screen, not just while playing; the
    /// block can be nudged from the title and game-over screens too.
    pub fn update(&mut self, input: &FrameInput) -> FrameOutcome {
        for direction in input.directions() {
            player::move_player(direction, &mut self.player, &self.map_element);
        }

        let drawn = self.screen;
        let transition = self.screen.advance(input.confirm, self.round_over());
        self.screen = transition.next;

        FrameOutcome {
            quit: input.quit,
            screen: drawn,
            hold_input: transition.hold_input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::collides;
    use crate::game::FIRST_LEVEL;
    use crate::player::{PLAYER_START_X, PLAYER_START_Y};

    fn world() -> GameWorld {
        GameWorld::new(1280, 720)
    }

    #[test]
    fn test_new_world_layout() {
        let world = world();
        assert_eq!(world.player, Rectangle::new(20, 20, 50, 50));
        assert_eq!(world.map_element, Rectangle::new(640, 360, 100, 100));
        assert_eq!(world.screen, ScreenState::Start);
        assert_eq!(world.scores, Scores::default());
    }

    #[test]
    fn test_idle_frame_keeps_player_at_start() {
        let mut world = world();

        let outcome = world.update(&FrameInput::default());

        assert_eq!(world.player.x, PLAYER_START_X);
        assert_eq!(world.player.y, PLAYER_START_Y);
        assert!(!outcome.quit);
        assert_eq!(outcome.screen, ScreenState::Start);
        assert_eq!(world.screen, ScreenState::Start);
    }

    #[test]
    fn test_space_starts_game_next_frame() {
        let mut world = world();
        let space = FrameInput {
            confirm: true,
            ..Default::default()
        };

        let outcome = world.update(&space);

        // The menu is still drawn on the frame Space is read
        assert_eq!(outcome.screen, ScreenState::Start);
        assert_eq!(world.screen, ScreenState::Playing { level: FIRST_LEVEL });
    }

    #[test]
    fn test_playing_never_reaches_game_over() {
        let mut world = world();
        world.screen = ScreenState::Playing { level: FIRST_LEVEL };

        let inputs = [
            FrameInput::default(),
            FrameInput { confirm: true, ..Default::default() },
            FrameInput { confirm: true, right: true, down: true, ..Default::default() },
            FrameInput { left: true, up: true, ..Default::default() },
        ];

        for _ in 0..50 {
            for input in &inputs {
                world.update(input);
                assert_eq!(world.screen, ScreenState::Playing { level: FIRST_LEVEL });
            }
        }
    }

    #[test]
    fn test_game_over_space_requests_hold() {
        let mut world = world();
        world.screen = ScreenState::GameOver;

        let outcome = world.update(&FrameInput { confirm: true, ..Default::default() });

        assert!(outcome.hold_input);
        assert_eq!(outcome.screen, ScreenState::GameOver);
        assert_eq!(world.screen, ScreenState::Start);
    }

    #[test]
    fn test_movement_active_on_start_screen() {
        // Movement is not gated on the Playing screen
        let mut world = world();

        world.update(&FrameInput { right: true, ..Default::default() });

        assert_eq!(world.screen, ScreenState::Start);
        assert_eq!(world.player.x, PLAYER_START_X + 5);
    }

    #[test]
    fn test_quit_is_reported() {
        let mut world = world();
        let outcome = world.update(&FrameInput { quit: true, ..Default::default() });
        assert!(outcome.quit);
    }

    #[test]
    fn test_player_never_ends_frame_inside_map_element() {
        let mut world = world();
        let towards = FrameInput { right: true, down: true, ..Default::default() };

        for _ in 0..400 {
            world.update(&towards);
            assert!(!collides(&world.player, &world.map_element));
        }
    }
}
