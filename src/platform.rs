/// SDL2 resources
///
/// Everything that talks to the display lives here: the SDL2 context, the
/// window and its renderer, the off-screen surface every frame is drawn
/// into, and the three artwork surfaces.
///
/// Acquisition happens once in `Platform::init`. Release is left to drop
/// order: fields are declared so that surfaces go first, then the renderer
/// and window, then the subsystems. A failure part-way through `init` drops
/// whatever was already acquired on the way out.
use crate::config::{AssetPaths, GameConfig};
use crate::error::InitError;
use crate::render::{Artwork, Layout};
use log::{debug, info, warn};
use sdl2::image::{InitFlag, LoadSurface, Sdl2ImageContext};
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{Canvas, Texture};
use sdl2::surface::Surface;
use sdl2::video::Window;
use sdl2::{EventPump, Sdl, VideoSubsystem};
use std::path::Path;

/// Pixels of this color are transparent in the menu and digit artwork.
pub const TRANSPARENCY_KEY: Color = Color::RGB(255, 0, 255);

/// The loaded artwork
pub struct Assets {
    menu: Surface<'static>,
    digits: Surface<'static>,
    game_over: Surface<'static>,
}

fn load_surface(
    name: &'static str,
    path: &Path,
    color_key: Option<Color>,
) -> Result<Surface<'static>, InitError> {
    let asset_error = |reason: String| InitError::Asset {
        name,
        path: path.to_path_buf(),
        reason,
    };

    let mut surface = Surface::from_file(path).map_err(asset_error)?;

    if let Some(key) = color_key {
        surface.set_color_key(true, key).map_err(asset_error)?;
    }

    debug!(
        "Loaded {} image {} ({}x{})",
        name,
        path.display(),
        surface.width(),
        surface.height()
    );
    Ok(surface)
}

impl Assets {
    pub fn load(paths: &AssetPaths) -> Result<Self, InitError> {
        Ok(Self::from_surfaces(
            load_surface("title", &paths.menu, Some(TRANSPARENCY_KEY))?,
            load_surface("numbermap", &paths.digits, Some(TRANSPARENCY_KEY))?,
            load_surface("gameover", &paths.game_over, None)?,
        ))
    }

    /// Wraps surfaces that are already prepared.
    pub fn from_surfaces(
        menu: Surface<'static>,
        digits: Surface<'static>,
        game_over: Surface<'static>,
    ) -> Self {
        Assets {
            menu,
            digits,
            game_over,
        }
    }

    pub fn get(&self, art: Artwork) -> &Surface<'static> {
        match art {
            Artwork::Menu => &self.menu,
            Artwork::Digits => &self.digits,
            Artwork::GameOver => &self.game_over,
        }
    }
}

/// All SDL2 state for one run
pub struct Platform {
    pub assets: Assets,
    /// Off-screen frame buffer at the configured logical size
    pub screen: Surface<'static>,
    pub event_pump: EventPump,
    pub canvas: Canvas<Window>,
    _image_context: Sdl2ImageContext,
    _video_subsystem: VideoSubsystem,
    _sdl_context: Sdl,
}

impl Platform {
    /// Brings up SDL2 and loads the artwork.
    ///
    /// `fullscreen` picks a desktop-sized fullscreen window; otherwise a
    /// regular window of the configured size is opened.
    pub fn init(config: &GameConfig, fullscreen: bool) -> Result<Self, InitError> {
        let sdl_context = sdl2::init().map_err(InitError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(InitError::Video)?;
        let image_context = sdl2::image::init(InitFlag::PNG).map_err(InitError::Image)?;

        let width = config.window.width;
        let height = config.window.height;

        let mut builder = video_subsystem.window(&config.window.title, width, height);
        builder.position_centered();
        if fullscreen {
            builder.fullscreen_desktop();
        }
        let window = builder
            .build()
            .map_err(|e| InitError::Window(e.to_string()))?;

        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| InitError::Renderer(e.to_string()))?;

        let (window_width, window_height) = canvas.window().size();
        info!(
            "Window: {}x{}{}",
            window_width,
            window_height,
            if fullscreen { " (fullscreen)" } else { "" }
        );

        let event_pump = sdl_context.event_pump().map_err(InitError::EventPump)?;

        let screen = Surface::new(width, height, PixelFormatEnum::RGBA32)
            .map_err(InitError::ScreenSurface)?;

        let assets = Assets::load(&config.assets)?;

        Ok(Platform {
            assets,
            screen,
            event_pump,
            canvas,
            _image_context: image_context,
            _video_subsystem: video_subsystem,
            _sdl_context: sdl_context,
        })
    }

    /// Sizes of the playfield and artwork, for the render planner.
    pub fn layout(&self, game_over_height: i32) -> Layout {
        let menu = self.assets.get(Artwork::Menu);
        let game_over = self.assets.get(Artwork::GameOver);

        Layout {
            screen_width: self.screen.width() as i32,
            screen_height: self.screen.height() as i32,
            menu_size: (menu.width() as i32, menu.height() as i32),
            game_over_width: game_over.width() as i32,
            game_over_height,
        }
    }

    /// Uploads the off-screen surface and shows it, stretched to the window.
    ///
    /// Failures are logged; the loop keeps going.
    pub fn present(&mut self, screen_texture: &mut Texture<'_>) {
        let pitch = self.screen.pitch() as usize;
        let uploaded = self
            .screen
            .with_lock(|pixels| screen_texture.update(None, pixels, pitch));
        if let Err(e) = uploaded {
            warn!("Failed to update screen texture: {}", e);
        }

        self.canvas.clear();
        if let Err(e) = self.canvas.copy(screen_texture, None, None) {
            warn!("Failed to copy screen texture: {}", e);
        }
        self.canvas.present();
    }
}
