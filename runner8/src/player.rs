//! Player state and frame-counted jump physics.
//!
//! Rows are counted from the top of the matrix, so rising means the position
//! decreases. Position always stays within `[0, FLOOR]`.

use log::{debug, trace};

/// Row the player stands on while grounded
pub const FLOOR: u8 = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum JumpPhase {
    Grounded,
    SimpleJump,
    DoubleJump,
}

impl JumpPhase {
    /// Frames spent rising and total frames of the arc
    pub fn arc(self) -> Option<(u8, u8)> {
        match self {
            JumpPhase::Grounded => None,
            JumpPhase::SimpleJump => Some((3, 6)),
            JumpPhase::DoubleJump => Some((5, 10)),
        }
    }
}

/// Raw jump inputs sampled at the start of a frame
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InputSample {
    pub simple: bool,
    pub double: bool,
    /// Arms the double jump when the game gates it
    pub sensor: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JumpRequest {
    None,
    Simple,
    Double,
}

impl JumpRequest {
    /// Decode a sample, simple jump wins over double jump
    pub fn from_sample(sample: InputSample, sensor_gated: bool) -> Self {
        if sample.simple {
            JumpRequest::Simple
        } else if sample.double && (sample.sensor || !sensor_gated) {
            JumpRequest::Double
        } else {
            JumpRequest::None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerState {
    position: u8,
    phase: JumpPhase,
    frame: u8,
    alive: bool,
}

impl PlayerState {
    pub fn new() -> Self {
        Self {
            position: FLOOR,
            phase: JumpPhase::Grounded,
            frame: 0,
            alive: true,
        }
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Start a jump if the player is on the ground
    ///
    /// Returns whether the request was accepted. Requests made mid-air are
    /// dropped, there is no queueing and no cancelling.
    pub fn request(&mut self, request: JumpRequest) -> bool {
        let phase = match request {
            JumpRequest::None => return false,
            JumpRequest::Simple => JumpPhase::SimpleJump,
            JumpRequest::Double => JumpPhase::DoubleJump,
        };
        if self.phase != JumpPhase::Grounded {
            trace!("{:?} dropped while in {:?}", request, self.phase);
            return false;
        }
        debug!("{:?} accepted at row {}", phase, self.position);
        self.phase = phase;
        self.frame = 0;
        true
    }

    /// Advance the current arc by one frame
    pub fn advance(&mut self) {
        let (rise, total) = match self.phase.arc() {
            Some(arc) => arc,
            None => return,
        };

        if self.frame < rise {
            self.shift(-1);
        } else if self.frame < total {
            self.shift(1);
        } else {
            debug!("landed at row {}", self.position);
            self.phase = JumpPhase::Grounded;
            self.frame = 0;
            return;
        }
        self.frame += 1;
    }

    fn shift(&mut self, delta: i8) {
        let target = self.position as i8 + delta;
        let clamped = if target < 0 {
            0
        } else if target > FLOOR as i8 {
            FLOOR as i8
        } else {
            target
        };
        if clamped != target {
            trace!("row {} clamped to {}", target, clamped);
        }
        self.position = clamped as u8;
    }
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(player: &mut PlayerState, frames: usize) -> [u8; 12] {
        let mut trace = [0; 12];
        for slot in trace.iter_mut().take(frames) {
            player.advance();
            *slot = player.position();
        }
        trace
    }

    #[test]
    fn simple_arc() {
        let mut player = PlayerState::new();
        assert!(player.request(JumpRequest::Simple));

        let trace = positions(&mut player, 6);
        assert_eq!(&trace[..6], &[3, 2, 1, 2, 3, 4]);
        assert_eq!(player.phase(), JumpPhase::SimpleJump);

        player.advance();
        assert_eq!(player.phase(), JumpPhase::Grounded);
        assert_eq!(player.position(), FLOOR);
    }

    #[test]
    fn double_arc_touches_the_ceiling() {
        let mut player = PlayerState::new();
        assert!(player.request(JumpRequest::Double));

        let trace = positions(&mut player, 10);
        assert_eq!(&trace[..10], &[3, 2, 1, 0, 0, 1, 2, 3, 4, 4]);
        assert_eq!(player.phase(), JumpPhase::DoubleJump);

        player.advance();
        assert_eq!(player.phase(), JumpPhase::Grounded);
        assert_eq!(player.position(), FLOOR);
    }

    #[test]
    fn airborne_requests_are_dropped() {
        let mut player = PlayerState::new();
        assert!(player.request(JumpRequest::Simple));
        player.advance();
        let before = player.clone();

        assert!(!player.request(JumpRequest::Double));
        assert!(!player.request(JumpRequest::Simple));
        assert_eq!(player, before);
    }

    #[test]
    fn jump_again_after_landing() {
        let mut player = PlayerState::new();
        player.request(JumpRequest::Simple);
        for _ in 0..7 {
            player.advance();
        }
        assert!(player.request(JumpRequest::Double));
        assert_eq!(player.frame(), 0);
    }

    #[test]
    fn grounded_player_does_not_move() {
        let mut player = PlayerState::new();
        assert!(!player.request(JumpRequest::None));
        player.advance();
        assert_eq!(player, PlayerState::new());
    }

    #[test]
    fn decode_sample() {
        let both = InputSample {
            simple: true,
            double: true,
            sensor: true,
        };
        assert_eq!(JumpRequest::from_sample(both, true), JumpRequest::Simple);

        let double = InputSample {
            double: true,
            ..InputSample::default()
        };
        assert_eq!(JumpRequest::from_sample(double, true), JumpRequest::None);
        assert_eq!(JumpRequest::from_sample(double, false), JumpRequest::Double);

        let armed = InputSample {
            sensor: true,
            ..double
        };
        assert_eq!(JumpRequest::from_sample(armed, true), JumpRequest::Double);
        assert_eq!(
            JumpRequest::from_sample(InputSample::default(), false),
            JumpRequest::None
        );
    }
}
