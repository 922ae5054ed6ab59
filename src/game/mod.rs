/// Game module - Contains all game logic and state management
///
/// This module contains:
/// - world.rs: GameWorld struct and the per-frame update
/// - types.rs: Screen states, transitions and scores
pub use types::*;
pub use world::GameWorld;

pub mod types;
pub mod world;
