//! Contexts for accessing functionalities of the boards both controllers run
//! on.
//!
//! Every call here is synchronous. Strobing a row, pausing and playing a tone
//! busy-wait for their whole duration and are the only blocking points of the
//! two loops.

use crate::melody::Note;
use crate::player::InputSample;
use crate::signal::{RelayLine, StatusLine};

/// Board functionalities used by the game controller
pub trait GameContext {
    /// Light a single matrix row with `pattern` and hold it for `hold_us`
    ///
    /// Called by `Game::step` eight times per strobe pass
    fn strobe_row(&mut self, row: usize, pattern: u8, hold_us: u32);
    /// Turn every LED of the matrix off
    fn blank(&mut self);
    /// Sample jump inputs
    ///
    /// Called by `Game::step` once at the start of each frame
    fn read_input(&mut self) -> InputSample;
    /// Drive one of the status lines towards the link controller
    fn set_status(&mut self, line: StatusLine, asserted: bool);
    /// Busy-wait between frames
    fn delay_ms(&mut self, ms: u32);
}

/// Board functionalities used by the link controller
pub trait LinkContext {
    /// State of the local button mirrored onto `line`
    fn read_button(&mut self, line: RelayLine) -> bool;
    /// Drive a relay line towards the game controller
    fn set_relay(&mut self, line: RelayLine, asserted: bool);
    /// Sample a status line driven by the game controller
    fn read_status(&mut self, line: StatusLine) -> bool;
    /// Emit `note` and block until it is over
    fn play_tone(&mut self, note: Note);
}
