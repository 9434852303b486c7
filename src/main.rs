use std::io;
use std::panic;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use gridsnake::config::{
    DEFAULT_GRID_SIZE, DEFAULT_START_LENGTH, DEFAULT_TICK_INTERVAL_MS, GameConfig, GridSize,
    THEME_CLASSIC,
};
use gridsnake::error::AppError;
use gridsnake::input::{GameInput, InputHandler};
use gridsnake::renderer;
use gridsnake::session::{Session, SessionStatus};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

#[derive(Debug, Parser)]
#[command(about = "Deterministic, seedable grid Snake for the terminal")]
struct Cli {
    /// Fixed RNG seed; restarts replay the same game.
    #[arg(long)]
    seed: Option<u32>,

    /// Grid side length in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: u16,

    /// Milliseconds between simulation ticks.
    #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = GameConfig {
        grid: GridSize::square(cli.grid_size),
        tick_interval_ms: cli.tick_ms,
        start_length: DEFAULT_START_LENGTH,
    };
    config.validate()?;

    install_panic_hook();

    run(config, cli.seed)?;
    cleanup_terminal()?;
    Ok(())
}

fn run(config: GameConfig, seed: Option<u32>) -> Result<(), AppError> {
    let mut terminal = setup_terminal()?;
    let mut input = InputHandler::default();
    let mut session = Session::new(config, seed);

    let tick_interval = Duration::from_millis(config.tick_interval_ms);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| {
            renderer::render(frame, session.state(), session.status(), &THEME_CLASSIC)
        })?;

        if let Some(game_input) = input.poll_input()? {
            if matches!(game_input, GameInput::Quit) {
                break;
            }

            if handle_input(&mut session, game_input) {
                last_tick = Instant::now();
            }
        }

        if last_tick.elapsed() >= tick_interval {
            session.advance();
            last_tick = Instant::now();
        }

        thread::sleep(Duration::from_millis(16));
    }

    Ok(())
}

/// Applies one input event to the session. Returns true when the tick timer
/// must reset, so a fresh run never inherits a nearly-elapsed interval.
fn handle_input(session: &mut Session, input: GameInput) -> bool {
    match input {
        GameInput::Direction(direction) => {
            let was_started = session.state().is_started;
            session.request_direction(direction);
            !was_started && session.state().is_started
        }
        GameInput::Pause => {
            session.toggle_pause();
            false
        }
        GameInput::Restart => {
            session.restart();
            true
        }
        GameInput::Confirm => match session.status() {
            SessionStatus::NotStarted => {
                session.start();
                true
            }
            SessionStatus::GameOver => {
                session.restart();
                true
            }
            _ => false,
        },
        GameInput::Quit => false,
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)?;

    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal_after_panic();
        default_hook(panic_info);
    }));
}

fn restore_terminal_after_panic() {
    let _ = disable_raw_mode();

    let mut stdout = io::stdout();
    let _ = execute!(stdout, Show, LeaveAlternateScreen);
}
