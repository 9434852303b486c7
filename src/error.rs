use std::io;

use thiserror::Error;

/// Failures surfaced by the terminal shell.
///
/// The game engine itself has no error channel: invalid operations are
/// no-ops and terminal conditions are ordinary state. Only the outer shell
/// (terminal setup, drawing, configuration) can fail.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("grid {width}x{height} cannot fit a starting snake of length {start_length}")]
    GridTooSmall {
        width: u16,
        height: u16,
        start_length: u16,
    },
}
