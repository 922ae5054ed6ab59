use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while bringing the game up.
///
/// Each variant names the startup step that failed. Any of them ends the
/// process with exit status 1.
#[derive(Debug, Clone)]
pub enum InitError {
    /// The configuration file could not be read or parsed
    Config { path: PathBuf, reason: String },

    /// `SDL_Init` failed
    Sdl(String),

    /// The video subsystem did not start
    Video(String),

    /// SDL_image did not start
    Image(String),

    /// Window creation failed
    Window(String),

    /// Renderer creation failed
    Renderer(String),

    /// The event pump could not be obtained
    EventPump(String),

    /// The off-screen drawing surface could not be created
    ScreenSurface(String),

    /// The texture that mirrors the screen surface could not be created
    ScreenTexture(String),

    /// A bitmap failed to load or prepare
    Asset {
        name: &'static str,
        path: PathBuf,
        reason: String,
    },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InitError::Config { path, reason } => {
                write!(f, "Could not load config {}: {}", path.display(), reason)
            }
            InitError::Sdl(e) => write!(f, "SDL could not initialize: {}", e),
            InitError::Video(e) => write!(f, "Video subsystem could not initialize: {}", e),
            InitError::Image(e) => write!(f, "Image subsystem could not initialize: {}", e),
            InitError::Window(e) => write!(f, "Window could not be created: {}", e),
            InitError::Renderer(e) => write!(f, "Renderer could not be created: {}", e),
            InitError::EventPump(e) => write!(f, "Event pump could not be created: {}", e),
            InitError::ScreenSurface(e) => write!(f, "Could not create the screen surface: {}", e),
            InitError::ScreenTexture(e) => write!(f, "Could not create the screen texture: {}", e),
            InitError::Asset { name, path, reason } => {
                write!(f, "Could not load {} image {}: {}", name, path.display(), reason)
            }
        }
    }
}

impl std::error::Error for InitError {}

impl From<InitError> for String {
    fn from(error: InitError) -> Self {
        error.to_string()
    }
}
