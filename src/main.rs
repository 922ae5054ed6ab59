use clap::Parser;
use log::{debug, error, info};
use std::process::ExitCode;
use std::thread;

mod cli;
mod collision;
mod config;
mod error;
mod game;
mod input_system;
mod platform;
mod player;
mod render;
mod timing;

use cli::Cli;
use config::GameConfig;
use error::InitError;
use game::GameWorld;
use platform::Platform;
use timing::FramePacer;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Sets everything up, then runs the frame loop until quit.
fn run(cli: &Cli) -> Result<(), InitError> {
    let config = GameConfig::resolve(cli.config.as_deref())?;
    let mut platform = Platform::init(&config, cli.fullscreen_requested())?;

    let texture_creator = platform.canvas.texture_creator();
    let mut screen_texture = texture_creator
        .create_texture_from_surface(&platform.screen)
        .map_err(|e| InitError::ScreenTexture(e.to_string()))?;

    let layout = platform.layout(config.game_over_height);
    let mut world = GameWorld::new(layout.screen_width, layout.screen_height);
    let mut pacer = FramePacer::new(config.timing.frame_period());

    info!("Controls:");
    info!("WASD - Move block");
    info!("Space - Start / back to menu");
    info!("ESC - Quit");

    'running: loop {
        let input = input_system::sample(&mut platform.event_pump);
        let outcome = world.update(&input);

        let commands = render::plan(outcome.screen, &world, &layout);
        render::draw_frame(&commands, &mut platform.screen, &platform.assets);

        if outcome.hold_input {
            // Keeps the Space press that left game-over from also leaving the menu
            thread::sleep(config.timing.input_hold());
        }

        platform.present(&mut screen_texture);
        pacer.wait();

        if outcome.quit {
            break 'running;
        }
    }

    info!("Shutting down");

    // Texture before its creator, both before the renderer and window
    drop(screen_texture);
    drop(texture_creator);
    drop(platform);
    debug!("Released SDL2 resources");

    Ok(())
}
