/// Render dispatch for block-demo
///
/// Drawing is split in two steps:
///
/// 1. `plan()` is pure. It looks at the screen that is up this frame and
///    the world, and returns a list of `DrawCommand`s saying what to draw
///    and where.
/// 2. `draw_frame()` carries the commands out against the off-screen
///    SDL2 surface using fills and blits.
///
/// Keeping the decision separate from the pixel work means every layout
/// rule (centering, score digit offsets) is tested without a window.
///
/// # Usage Example
///
/// ```rust
/// let commands = render::plan(outcome.screen, &world, &layout);
/// render::draw_frame(&commands, &mut platform.screen, &platform.assets);
/// ```
use crate::collision::Rectangle;
use crate::game::{GameWorld, ScreenState, Scores, Side};
use crate::platform::Assets;
use log::warn;
use sdl2::pixels::Color;
use sdl2::surface::SurfaceRef;

/// Width and height of one glyph in the digit atlas.
pub const DIGIT_SIZE: i32 = 64;

/// Gap between the screen's center line and each score digit.
pub const SCORE_PADDING: i32 = 12;

pub const BACKGROUND: Color = Color::RGBA(0, 0, 0, 255);
pub const BLOCK_COLOR: Color = Color::RGBA(255, 255, 255, 255);

/// The three loaded images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artwork {
    /// Title menu
    Menu,
    /// Glyphs 0-9 laid out left to right
    Digits,
    /// Game-over banner
    GameOver,
}

/// One drawing step for the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Solid rectangle
    Fill { dest: Rectangle, color: Color },
    /// Copy `src` out of an artwork onto `dest`
    Blit {
        art: Artwork,
        src: Rectangle,
        dest: Rectangle,
    },
}

/// Sizes the planner needs: the playfield and the artwork dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub screen_width: i32,
    pub screen_height: i32,
    pub menu_size: (i32, i32),
    pub game_over_width: i32,
    /// Rows of the game-over artwork that are shown
    pub game_over_height: i32,
}

/// Atlas region for a score digit.
///
/// Scores 1 through 9 index their glyph. Anything else (0, or 10 and
/// above) shows the glyph at offset zero.
pub fn digit_source(score: u32) -> Rectangle {
    let offset = if (1..10).contains(&score) {
        DIGIT_SIZE * score as i32
    } else {
        0
    };

    Rectangle::new(offset, 0, DIGIT_SIZE, DIGIT_SIZE)
}

/// Where a side's score digit goes, either side of the center line.
pub fn score_destination(side: Side, screen_width: i32) -> Rectangle {
    let center = screen_width / 2;
    let x = match side {
        Side::Left => center - DIGIT_SIZE - SCORE_PADDING,
        Side::Right => center + SCORE_PADDING,
    };

    Rectangle::new(x, 0, DIGIT_SIZE, DIGIT_SIZE)
}

fn centered(layout: &Layout, width: i32, height: i32) -> Rectangle {
    Rectangle::new(
        layout.screen_width / 2 - width / 2,
        layout.screen_height / 2 - height / 2,
        width,
        height,
    )
}

fn score_commands(scores: &Scores, layout: &Layout) -> impl Iterator<Item = DrawCommand> {
    let scores = *scores;
    let screen_width = layout.screen_width;

    Side::all().into_iter().map(move |side| DrawCommand::Blit {
        art: Artwork::Digits,
        src: digit_source(scores.get(side)),
        dest: score_destination(side, screen_width),
    })
}

/// Decides what to draw for `screen`.
pub fn plan(screen: ScreenState, world: &GameWorld, layout: &Layout) -> Vec<DrawCommand> {
    match screen {
        ScreenState::Start => {
            let (width, height) = layout.menu_size;
            vec![DrawCommand::Blit {
                art: Artwork::Menu,
                src: Rectangle::new(0, 0, width, height),
                dest: centered(layout, width, height),
            }]
        }
        ScreenState::GameOver => {
            let width = layout.game_over_width;
            let height = layout.game_over_height;
            vec![DrawCommand::Blit {
                art: Artwork::GameOver,
                src: Rectangle::new(0, 0, width, height),
                dest: centered(layout, width, height),
            }]
        }
        ScreenState::Playing { .. } => {
            let mut commands = vec![
                DrawCommand::Fill {
                    dest: world.player,
                    color: BLOCK_COLOR,
                },
                DrawCommand::Fill {
                    dest: world.map_element,
                    color: BLOCK_COLOR,
                },
            ];
            commands.extend(score_commands(&world.scores, layout));
            commands
        }
    }
}

/// Carries out one command on the off-screen surface.
fn draw(command: &DrawCommand, screen: &mut SurfaceRef, assets: &Assets) -> Result<(), String> {
    match *command {
        DrawCommand::Fill { dest, color } => match dest.to_sdl() {
            Some(rect) => screen.fill_rect(rect, color),
            None => Ok(()),
        },
        DrawCommand::Blit { art, src, dest } => match (src.to_sdl(), dest.to_sdl()) {
            (Some(src), Some(dest)) => assets.get(art).blit(src, screen, dest).map(|_| ()),
            _ => Ok(()),
        },
    }
}

/// Clears the surface and draws every command in order.
///
/// A failed fill or blit is logged and skipped; the frame still goes out.
pub fn draw_frame(commands: &[DrawCommand], screen: &mut SurfaceRef, assets: &Assets) {
    if let Err(e) = screen.fill_rect(None, BACKGROUND) {
        warn!("Failed to clear frame: {}", e);
    }

    for command in commands {
        if let Err(e) = draw(command, screen, assets) {
            warn!("Draw failed for {:?}: {}", command, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::FIRST_LEVEL;
    use sdl2::pixels::PixelFormatEnum;
    use sdl2::surface::Surface;

    fn blank_surface(width: u32, height: u32) -> Surface<'static> {
        Surface::new(width, height, PixelFormatEnum::RGBA32).unwrap()
    }

    fn blank_assets() -> Assets {
        Assets::from_surfaces(blank_surface(4, 4), blank_surface(4, 4), blank_surface(4, 4))
    }

    /// RGBA bytes of one pixel
    fn pixel(surface: &Surface, x: usize, y: usize) -> [u8; 4] {
        let pitch = surface.pitch() as usize;
        surface.with_lock(|pixels| {
            let at = y * pitch + x * 4;
            [pixels[at], pixels[at + 1], pixels[at + 2], pixels[at + 3]]
        })
    }

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];

    fn layout() -> Layout {
        Layout {
            screen_width: 1280,
            screen_height: 720,
            menu_size: (600, 300),
            game_over_width: 500,
            game_over_height: 75,
        }
    }

    #[test]
    fn test_digit_source_zero_and_ten_match() {
        assert_eq!(digit_source(0), digit_source(10));
        assert_eq!(digit_source(0).x, 0);
        assert_eq!(digit_source(250).x, 0);
    }

    #[test]
    fn test_digit_source_indexes_glyph() {
        assert_eq!(digit_source(5), Rectangle::new(5 * DIGIT_SIZE, 0, 64, 64));
        assert_eq!(digit_source(1).x, 64);
        assert_eq!(digit_source(9).x, 9 * 64);
    }

    #[test]
    fn test_score_destinations_straddle_center() {
        assert_eq!(score_destination(Side::Left, 1280), Rectangle::new(564, 0, 64, 64));
        assert_eq!(score_destination(Side::Right, 1280), Rectangle::new(652, 0, 64, 64));
    }

    #[test]
    fn test_start_screen_draws_centered_menu() {
        let world = GameWorld::new(1280, 720);

        let commands = plan(ScreenState::Start, &world, &layout());

        assert_eq!(
            commands,
            vec![DrawCommand::Blit {
                art: Artwork::Menu,
                src: Rectangle::new(0, 0, 600, 300),
                dest: Rectangle::new(340, 210, 600, 300),
            }]
        );
    }

    #[test]
    fn test_game_over_draws_fixed_height_band() {
        let world = GameWorld::new(1280, 720);

        let commands = plan(ScreenState::GameOver, &world, &layout());

        assert_eq!(
            commands,
            vec![DrawCommand::Blit {
                art: Artwork::GameOver,
                src: Rectangle::new(0, 0, 500, 75),
                dest: Rectangle::new(390, 323, 500, 75),
            }]
        );
    }

    #[test]
    fn test_playing_draws_blocks_then_scores() {
        let world = GameWorld::new(1280, 720);

        let commands = plan(ScreenState::Playing { level: FIRST_LEVEL }, &world, &layout());

        assert_eq!(commands.len(), 4);
        assert_eq!(
            commands[0],
            DrawCommand::Fill {
                dest: world.player,
                color: BLOCK_COLOR
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::Fill {
                dest: world.map_element,
                color: BLOCK_COLOR
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Blit {
                art: Artwork::Digits,
                src: digit_source(0),
                dest: score_destination(Side::Left, 1280),
            }
        );
        assert_eq!(
            commands[3],
            DrawCommand::Blit {
                art: Artwork::Digits,
                src: digit_source(0),
                dest: score_destination(Side::Right, 1280),
            }
        );
    }

    #[test]
    fn test_playing_uses_each_sides_score() {
        let mut world = GameWorld::new(1280, 720);
        world.scores = Scores([3, 12]);

        let commands = plan(ScreenState::Playing { level: FIRST_LEVEL }, &world, &layout());

        let sources: Vec<Rectangle> = commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Blit { src, .. } => Some(*src),
                _ => None,
            })
            .collect();
        assert_eq!(sources, vec![digit_source(3), digit_source(0)]);
    }

    #[test]
    fn test_draw_frame_fills_block_on_black() {
        let mut screen = blank_surface(8, 8);
        let commands = [DrawCommand::Fill {
            dest: Rectangle::new(2, 2, 3, 3),
            color: BLOCK_COLOR,
        }];

        draw_frame(&commands, &mut screen, &blank_assets());

        assert_eq!(pixel(&screen, 2, 2), WHITE);
        assert_eq!(pixel(&screen, 4, 4), WHITE);
        assert_eq!(pixel(&screen, 0, 0), BLACK);
        assert_eq!(pixel(&screen, 5, 5), BLACK);
        assert_eq!(pixel(&screen, 7, 2), BLACK);
    }

    #[test]
    fn test_draw_frame_skips_zero_width_fill() {
        let mut screen = blank_surface(8, 8);
        let commands = [DrawCommand::Fill {
            dest: Rectangle::new(0, 0, 0, 8),
            color: BLOCK_COLOR,
        }];

        draw_frame(&commands, &mut screen, &blank_assets());

        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(pixel(&screen, x, y), BLACK);
            }
        }
    }

    #[test]
    fn test_draw_frame_clears_previous_frame() {
        let mut screen = blank_surface(8, 8);
        screen.fill_rect(None, BLOCK_COLOR).unwrap();

        draw_frame(&[], &mut screen, &blank_assets());

        assert_eq!(pixel(&screen, 3, 3), BLACK);
    }
}
