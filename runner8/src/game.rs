use core::convert::Infallible;

use log::{debug, info, trace};

use crate::context::GameContext;
use crate::frame::Frame;
use crate::map::ObstacleMap;
use crate::player::{JumpRequest, PlayerState};
use crate::signal::StatusLine;
use crate::sprite::{self, Sprite, LOSE_FACE, WIN_FACE};

/// Timing and input knobs of the game loop
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Full 8-row strobe passes drawn per frame
    pub strobe_repeats: u16,
    /// How long each row stays lit during a frame
    pub row_hold_us: u32,
    /// Strobe passes of the end-of-game face
    pub face_repeats: u16,
    /// How long each face row stays lit
    pub face_row_hold_us: u32,
    /// Pause after every frame that did not end the game
    pub frame_pause_ms: u32,
    /// Ignore double-jump requests unless the sensor input is asserted
    pub sensor_gated_double: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            strobe_repeats: 15,
            row_hold_us: 600,
            face_repeats: 600,
            face_row_hold_us: 700,
            frame_pause_ms: 60,
            sensor_gated_double: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    fn status_line(self) -> StatusLine {
        match self {
            Outcome::Won => StatusLine::Win,
            Outcome::Lost => StatusLine::Lose,
        }
    }

    fn face(self) -> &'static Sprite {
        match self {
            Outcome::Won => &WIN_FACE,
            Outcome::Lost => &LOSE_FACE,
        }
    }
}

/// Scrolling-matrix game loop
///
/// Each call to `step` runs one frame in a fixed order: sample input, advance
/// the jump, draw, check for collision, scroll. The game ends on the first
/// collision or when the scroll offset reaches the end of the map, after which
/// `step` keeps returning the same outcome without touching the board.
pub struct Game<'a, C: GameContext> {
    pub ctx: C,
    map: ObstacleMap<'a>,
    config: GameConfig,
    player: PlayerState,
    offset: usize,
    frame: Frame,
    frames: u32,
    started: bool,
    outcome: Option<Outcome>,
}

impl<'a, C: GameContext> Game<'a, C> {
    pub fn new(ctx: C, map: ObstacleMap<'a>, config: GameConfig) -> Self {
        Self {
            ctx,
            map,
            config,
            player: PlayerState::new(),
            offset: 0,
            frame: Frame::new(),
            frames: 0,
            started: false,
            outcome: None,
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Last frame drawn on the matrix
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of frames that scrolled the map
    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Run a single frame
    ///
    /// Returns `WouldBlock` while the game is still running.
    pub fn step(&mut self) -> nb::Result<Outcome, Infallible> {
        if let Some(outcome) = self.outcome {
            return Ok(outcome);
        }
        if !self.started {
            self.begin();
        }

        let sample = self.ctx.read_input();
        self.player
            .request(JumpRequest::from_sample(sample, self.config.sensor_gated_double));

        self.player.advance();

        let sprite = sprite::for_phase(self.player.phase());
        let window = self.map.window(self.offset);
        self.frame = Frame::compose(&window, sprite);
        let frame = self.frame;
        self.draw(&frame, self.config.strobe_repeats, self.config.row_hold_us);

        let hits = Frame::overlap(&window, sprite);
        if hits != 0 {
            debug!(
                "collision at offset {} rows {:#010b} in {:?}",
                self.offset,
                hits,
                self.player.phase()
            );
            self.player.kill();
            return Ok(self.finish(Outcome::Lost));
        }

        self.offset += 1;
        self.frames += 1;
        trace!(
            "frame {} offset {} row {} {:?}",
            self.frames,
            self.offset,
            self.player.position(),
            self.player.phase()
        );
        if self.offset >= self.map.last_offset() {
            return Ok(self.finish(Outcome::Won));
        }

        self.ctx.delay_ms(self.config.frame_pause_ms);
        Err(nb::Error::WouldBlock)
    }

    /// Play until the game ends
    pub fn run(&mut self) -> Outcome {
        match nb::block!(self.step()) {
            Ok(outcome) => outcome,
            Err(never) => match never {},
        }
    }

    fn begin(&mut self) {
        info!(
            "game started, {} columns, lead-in {}",
            self.map.len(),
            self.map.lead_in()
        );
        self.ctx.blank();
        self.ctx.set_status(StatusLine::Win, false);
        self.ctx.set_status(StatusLine::Lose, false);
        self.ctx.set_status(StatusLine::Start, false);
        self.started = true;
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        info!("game {:?} at offset {} after {} frames", outcome, self.offset, self.frames);
        self.outcome = Some(outcome);
        self.ctx.set_status(outcome.status_line(), true);

        let face = Frame::from_rows(*outcome.face());
        self.draw(&face, self.config.face_repeats, self.config.face_row_hold_us);
        self.ctx.blank();

        self.ctx.set_status(StatusLine::Start, true);
        outcome
    }

    fn draw(&mut self, frame: &Frame, repeats: u16, hold_us: u32) {
        for _ in 0..repeats {
            for (row, &pattern) in frame.rows().iter().enumerate() {
                self.ctx.strobe_row(row, pattern, hold_us);
            }
        }
    }
}
