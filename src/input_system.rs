use crate::player::Direction;
use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Scancode};
use sdl2::EventPump;

/// Snapshot of every key the demo reacts to, taken once per frame.
///
/// The game loop works off this instead of raw SDL2 state, which keeps the
/// update step free of SDL2 and lets tests drive frames directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Escape held, or the window was closed
    pub quit: bool,
    /// Space held (start / restart)
    pub confirm: bool,
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl FrameInput {
    /// Reads the held keys out of SDL2's keyboard state.
    pub fn from_keyboard(keyboard_state: &KeyboardState) -> Self {
        FrameInput {
            quit: keyboard_state.is_scancode_pressed(Scancode::Escape),
            confirm: keyboard_state.is_scancode_pressed(Scancode::Space),
            up: keyboard_state.is_scancode_pressed(Scancode::W),
            down: keyboard_state.is_scancode_pressed(Scancode::S),
            left: keyboard_state.is_scancode_pressed(Scancode::A),
            right: keyboard_state.is_scancode_pressed(Scancode::D),
        }
    }

    /// Held movement keys, in the order they are applied: S, W, A, D.
    pub fn directions(&self) -> impl Iterator<Item = Direction> {
        [
            (self.down, Direction::Down),
            (self.up, Direction::Up),
            (self.left, Direction::Left),
            (self.right, Direction::Right),
        ]
        .into_iter()
        .filter_map(|(held, direction)| held.then_some(direction))
    }
}

/// Drains pending SDL2 events and samples the keyboard.
///
/// Polling the queue also pumps it, so the keyboard state read afterwards is
/// current. A window-close event counts as a quit request.
pub fn sample(event_pump: &mut EventPump) -> FrameInput {
    let mut window_closed = false;

    for event in event_pump.poll_iter() {
        if let Event::Quit { .. } = event {
            window_closed = true;
        }
    }

    let mut input = FrameInput::from_keyboard(&event_pump.keyboard_state());
    input.quit |= window_closed;
    input
}
