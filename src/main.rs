use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use log::{error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use maze_chase::config::Config;
use maze_chase::driver::{self, DEFAULT_TICK_MS};
use maze_chase::game::{Game, Outcome};
use maze_chase::ghost::RandomDirections;
use maze_chase::input;
use maze_chase::level::Level;
use maze_chase::render::Renderer;
use maze_chase::terminal::TerminalGuard;

#[derive(Parser, Debug)]
#[command(name = "maze-chase", about = "Eat the dots, dodge the ghosts")]
struct Args {
    /// Glyph configuration (JSON)
    #[arg(long, default_value = "assets/config.json")]
    config_file: PathBuf,

    /// Maze layout
    #[arg(long, default_value = "assets/maze01.txt")]
    maze_file: PathBuf,

    /// Milliseconds between ticks
    #[arg(long, env = "MAZE_CHASE_TICK_MS", default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// Where log output goes while the terminal is in raw mode
    #[arg(long, default_value = "maze-chase.log")]
    log_file: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
    info!(
        "starting with maze {} and config {}",
        args.maze_file.display(),
        args.config_file.display()
    );

    let result = match TerminalGuard::acquire() {
        Ok(_guard) => run(&args),
        Err(e) => Err(e.into()),
    };

    match result {
        Ok(outcome) => {
            info!("finished: {outcome:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("maze-chase: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> maze_chase::Result<Outcome> {
    let level = Level::load(&args.maze_file)?;
    let config = Config::load(&args.config_file)?;

    let (keys, _reader) = input::spawn_reader(io::stdin());
    let mut game = Game::new(level);
    let mut renderer = Renderer::new(io::stdout(), config);
    let mut dirs = RandomDirections(rand::thread_rng());
    driver::run(
        &mut game,
        &mut renderer,
        &keys,
        &mut dirs,
        Duration::from_millis(args.tick_ms.max(1)),
    )
}
