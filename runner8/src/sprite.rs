//! Fixed 8-row bitmaps: player poses and end-of-game faces.

use crate::player::JumpPhase;

pub type Sprite = [u8; 8];

pub const GROUNDED: Sprite = [0x00, 0x10, 0x78, 0x10, 0x00, 0x00, 0x00, 0x00];
pub const SIMPLE_JUMP: Sprite = [0x00, 0x10, 0x28, 0x1C, 0x28, 0x04, 0x00, 0x00];
pub const DOUBLE_JUMP: Sprite = [0x00, 0x08, 0x14, 0x0E, 0x14, 0x02, 0x00, 0x00];

pub const WIN_FACE: Sprite = [0x00, 0x2C, 0x4C, 0x40, 0x40, 0x4C, 0x2C, 0x00];
pub const LOSE_FACE: Sprite = [0x00, 0x4C, 0x2C, 0x20, 0x20, 0x2C, 0x4C, 0x00];

/// Pose drawn for a jump phase
pub fn for_phase(phase: JumpPhase) -> &'static Sprite {
    match phase {
        JumpPhase::Grounded => &GROUNDED,
        JumpPhase::SimpleJump => &SIMPLE_JUMP,
        JumpPhase::DoubleJump => &DOUBLE_JUMP,
    }
}
