/// Shared enums and helper structs used throughout the game
use log::info;
use std::fmt;

/// Level number shown while playing. There is only one.
pub const FIRST_LEVEL: u32 = 1;

/// Which screen is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Title menu, waiting for Space
    Start,
    /// The playfield
    Playing { level: u32 },
    /// Game-over artwork, waiting for Space
    GameOver,
}

impl Default for ScreenState {
    fn default() -> Self {
        ScreenState::Start
    }
}

/// Result of evaluating the screen transitions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: ScreenState,
    /// Pause input after this transition so a still-held key is not
    /// read again on the next screen
    pub hold_input: bool,
}

impl fmt::Display for ScreenState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ScreenState::Start => write!(f, "start menu"),
            ScreenState::Playing { level } => write!(f, "level {}", level),
            ScreenState::GameOver => write!(f, "game over"),
        }
    }
}

impl ScreenState {
    /// Evaluates this frame's transition.
    ///
    /// - Start + Space -> Playing
    /// - Playing + round over -> GameOver
    /// - GameOver + Space -> Start, holding input afterwards
    ///
    /// Anything else stays put.
    pub fn advance(self, confirm: bool, round_over: bool) -> Transition {
        let (next, hold_input) = match self {
            ScreenState::Start if confirm => (ScreenState::Playing { level: FIRST_LEVEL }, false),
            ScreenState::Playing { .. } if round_over => (ScreenState::GameOver, false),
            ScreenState::GameOver if confirm => (ScreenState::Start, true),
            unchanged => (unchanged, false),
        };

        if next != self {
            info!("Screen: {} -> {}", self, next);
        }

        Transition { next, hold_input }
    }
}

/// Per-side score pair.
///
/// Nothing awards points yet, so both sides stay at zero for the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores(pub [u32; 2]);

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        self.0[side.index()]
    }
}

/// Which score digit is meant: left of center or right of center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn all() -> [Side; 2] {
        [Side::Left, Side::Right]
    }

    fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}
