use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use snake_grid::config::{
    GameConfig, GridSize, Shape, DEFAULT_FOOD_COUNT, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH,
    DEFAULT_INITIAL_LENGTH, DEFAULT_TICK_RATE,
};
use snake_grid::error::AppError;
use snake_grid::game::{GameState, StepEvent};
use snake_grid::input::{GameInput, InputHandler};
use snake_grid::logging;
use snake_grid::pace::TickRate;
use snake_grid::renderer;
use snake_grid::terminal_runtime::{install_panic_hook, TerminalSession};
use snake_grid::ui::hud::HudInfo;
use tracing::info;

/// Pause before the end screen accepts input, so a held key does not skip it.
const END_SCREEN_GRACE: Duration = Duration::from_secs(1);

const END_SCREEN_POLL: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    width: u16,

    /// Grid height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    height: u16,

    /// Snake length at game start.
    #[arg(long = "initial-length", default_value_t = DEFAULT_INITIAL_LENGTH)]
    initial_length: usize,

    /// Number of foods kept on the board.
    #[arg(long, default_value_t = DEFAULT_FOOD_COUNT)]
    foods: usize,

    /// Ticks per second at game start.
    #[arg(long = "tick-rate", default_value_t = DEFAULT_TICK_RATE)]
    tick_rate: f64,

    /// Speed the game up slightly after every food eaten.
    #[arg(long = "speed-up")]
    speed_up: bool,

    /// Shape of snake and food cells.
    #[arg(long, value_enum, default_value_t = Shape::Square)]
    shape: Shape,

    /// Write logs to PATH (defaults to the local data directory).
    #[arg(long = "log-file", value_name = "PATH", num_args = 0..=1)]
    log_file: Option<Option<PathBuf>>,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            grid: GridSize {
                width: self.width,
                height: self.height,
            },
            initial_length: self.initial_length,
            food_count: self.foods,
            tick_rate: self.tick_rate,
            speed_up_on_eat: self.speed_up,
            shape: self.shape,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("snake-grid: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let config = cli.game_config();
    config.validate()?;

    if let Some(path) = &cli.log_file {
        let path = path.clone().unwrap_or_else(logging::default_log_path);
        logging::init(&path)?;
    }

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    play(&mut session, config, cli.seed)
}

fn play(
    session: &mut TerminalSession,
    config: GameConfig,
    seed: Option<u64>,
) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let mut rate = TickRate::new(config.tick_rate);
    let mut state = match seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };

    loop {
        let tick_started = Instant::now();

        match input.poll_input()? {
            Some(GameInput::Quit) => {
                info!(tick = state.tick_count(), "player quit");
                return Ok(());
            }
            Some(GameInput::Direction(direction)) => state.turn(direction),
            Some(GameInput::SpeedUp) => rate.speed_up(),
            Some(GameInput::SlowDown) => rate.slow_down(),
            Some(GameInput::Confirm) | None => {}
        }

        let event = state.step();
        if event == StepEvent::AteFood && state.config().speed_up_on_eat {
            rate.scale_after_food();
        }

        let hud = HudInfo {
            tick_rate: rate.per_second(),
            shape: state.config().shape,
        };
        session.draw(|frame| renderer::render(frame, &state, &hud))?;

        if let StepEvent::Ended(_) = event {
            return wait_for_dismiss(session, &mut input, &state, &hud);
        }

        thread::sleep(rate.interval().saturating_sub(tick_started.elapsed()));
    }
}

/// Keeps the end screen up until Enter or a quit key.
fn wait_for_dismiss(
    session: &mut TerminalSession,
    input: &mut InputHandler,
    state: &GameState,
    hud: &HudInfo,
) -> Result<(), AppError> {
    thread::sleep(END_SCREEN_GRACE);
    while input.poll_input()?.is_some() {}

    loop {
        session.draw(|frame| renderer::render(frame, state, hud))?;

        if let Some(GameInput::Confirm | GameInput::Quit) = input.wait_input(END_SCREEN_POLL)? {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn seed_flag_is_parsed() {
        let cli = Cli::try_parse_from(["snake-grid", "--seed", "7"]).expect("--seed should parse");

        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn seed_defaults_to_none() {
        let cli = Cli::try_parse_from(["snake-grid"]).expect("no arguments should parse");

        assert_eq!(cli.seed, None);
        assert_eq!(cli.game_config().grid.width, cli.width);
    }
}
