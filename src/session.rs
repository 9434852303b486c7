use crate::config::GameConfig;
use crate::game::GameState;
use crate::input::{clamp_direction, Direction};

/// Session-level status derived from engine state plus the pause flag.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SessionStatus {
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl SessionStatus {
    /// Status-line message shown for this state.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::Running => "running",
            Self::Paused => "paused",
            Self::GameOver => "game over",
        }
    }
}

/// Owns the authoritative state snapshot and mediates every mutation.
///
/// All operations are total: calls that make no sense in the current status
/// (pausing before the first start, starting twice) fall through as no-ops
/// instead of failing. The pause flag lives here rather than in the engine
/// state, since pausing only gates the periodic driver.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    fixed_seed: Option<u32>,
    state: GameState,
    paused: bool,
}

impl Session {
    /// Creates a session in the not-started state.
    ///
    /// With `Some(seed)` every run, including restarts, replays the same
    /// game; with `None` each run draws a fresh seed from process entropy.
    #[must_use]
    pub fn new(config: GameConfig, fixed_seed: Option<u32>) -> Self {
        let seed = fixed_seed.unwrap_or_else(rand::random);

        Self {
            config,
            fixed_seed,
            state: GameState::new(config, seed),
            paused: false,
        }
    }

    /// Returns the current state snapshot.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the session status. Game over takes priority over paused,
    /// which takes priority over running.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.state.is_over {
            SessionStatus::GameOver
        } else if self.paused {
            SessionStatus::Paused
        } else if self.state.is_started {
            SessionStatus::Running
        } else {
            SessionStatus::NotStarted
        }
    }

    /// Begins the run. A no-op unless the session has never started.
    pub fn start(&mut self) {
        if !self.state.is_started {
            self.state.is_started = true;
        }
    }

    /// Buffers a direction request for the next tick, rejecting reversals
    /// of the committed direction. The first directional input also starts
    /// a session that has not begun yet.
    pub fn request_direction(&mut self, direction: Direction) {
        self.state.pending_dir = clamp_direction(self.state.committed_dir, direction);
        self.start();
    }

    /// Flips the pause flag. A no-op before the first start and after game
    /// over.
    pub fn toggle_pause(&mut self) {
        if self.state.is_started && !self.state.is_over {
            self.paused = !self.paused;
        }
    }

    /// Discards the current run and begins a fresh one, immediately live.
    pub fn restart(&mut self) {
        let seed = self.fixed_seed.unwrap_or_else(rand::random);
        self.state = GameState::new(self.config, seed);
        self.state.is_started = true;
        self.paused = false;
    }

    /// Advances the engine by one tick when the session is running.
    ///
    /// The periodic driver calls this once per tick interval; pausing is
    /// enforced here, so a paused session never reaches the engine.
    pub fn advance(&mut self) {
        if self.status() == SessionStatus::Running {
            self.state = self.state.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GameConfig;
    use crate::game::GameState;
    use crate::input::Direction;

    use super::{Session, SessionStatus};

    fn fixed_session() -> Session {
        Session::new(GameConfig::default(), Some(5))
    }

    #[test]
    fn new_session_is_not_started_and_does_not_tick() {
        let mut session = fixed_session();
        assert_eq!(session.status(), SessionStatus::NotStarted);

        let before = session.state().clone();
        session.advance();
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn entropy_seeded_session_starts_cleanly() {
        let session = Session::new(GameConfig::default(), None);
        assert_eq!(session.status(), SessionStatus::NotStarted);
        assert_eq!(session.state().score, 0);
    }

    #[test]
    fn first_direction_request_starts_the_session() {
        let mut session = fixed_session();

        session.request_direction(Direction::Up);

        assert_eq!(session.status(), SessionStatus::Running);
        assert!(session.state().is_started);
        assert_eq!(session.state().pending_dir, Direction::Up);
    }

    #[test]
    fn reversal_request_is_rejected_but_still_starts() {
        let mut session = fixed_session();

        // The snake starts facing right.
        session.request_direction(Direction::Left);
        assert_eq!(session.status(), SessionStatus::Running);
        assert_eq!(session.state().pending_dir, Direction::Right);

        session.request_direction(Direction::Up);
        assert_eq!(session.state().pending_dir, Direction::Up);
    }

    #[test]
    fn pause_before_start_is_a_no_op() {
        let mut session = fixed_session();
        session.toggle_pause();
        assert_eq!(session.status(), SessionStatus::NotStarted);
    }

    #[test]
    fn pause_gates_the_driver_and_buffers_input() {
        let mut session = fixed_session();
        session.start();
        session.advance();
        let ticked = session.state().tick_count;

        session.toggle_pause();
        assert_eq!(session.status(), SessionStatus::Paused);

        session.advance();
        assert_eq!(session.state().tick_count, ticked);

        // Direction requests are buffered while paused, applied after resume.
        session.request_direction(Direction::Down);
        assert_eq!(session.status(), SessionStatus::Paused);
        assert_eq!(session.state().pending_dir, Direction::Down);

        session.toggle_pause();
        assert_eq!(session.status(), SessionStatus::Running);
        session.advance();
        assert_eq!(session.state().committed_dir, Direction::Down);
    }

    #[test]
    fn restart_with_fixed_seed_replays_the_same_game() {
        let mut session = fixed_session();
        session.request_direction(Direction::Up);
        for _ in 0..5 {
            session.advance();
        }
        session.toggle_pause();

        session.restart();

        let mut expected = GameState::new(GameConfig::default(), 5);
        expected.is_started = true;
        assert_eq!(session.state(), &expected);
        assert_eq!(session.status(), SessionStatus::Running);
    }

    #[test]
    fn game_over_status_wins_and_only_restart_leaves_it() {
        let mut session = fixed_session();
        session.start();

        // Drive straight into the right wall.
        while session.status() == SessionStatus::Running {
            session.advance();
        }
        assert_eq!(session.status(), SessionStatus::GameOver);

        // Pause and ticks are no-ops in the terminal state.
        session.toggle_pause();
        assert_eq!(session.status(), SessionStatus::GameOver);
        let frozen = session.state().clone();
        session.advance();
        assert_eq!(session.state(), &frozen);

        session.restart();
        assert_eq!(session.status(), SessionStatus::Running);
        assert!(!session.state().is_over);
    }
}
