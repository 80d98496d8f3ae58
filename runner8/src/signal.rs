//! Discrete signal lines wired between the game controller and the link
//! controller.
//!
//! The harness carries nine wires: six data lines listed here plus power and
//! ground. Every data line has exactly one writer and one reader, there is no
//! framing or acknowledgement and each side samples its inputs once per loop
//! iteration. All values here are logical: `true` means *asserted*, electrical
//! polarity is the board's business.

use heapless::{consts::U6, Vec};

/// Total number of wires in the harness, data lines included
pub const WIRE_COUNT: usize = 9;

/// Lines driven by the link controller and read by the game controller
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RelayLine {
    /// Simple-jump button held
    JumpSimple,
    /// Double-jump button held
    JumpDouble,
    /// Duck button held
    Duck,
}

/// Lines driven by the game controller and read by the link controller
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StatusLine {
    /// Level completed
    Win,
    /// Player collided with an obstacle
    Lose,
    /// Game stopped; released while a game is running
    Start,
}

/// Controller owning one end of a line
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Side {
    Game,
    Link,
}

/// Any data line of the harness
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    Relay(RelayLine),
    Status(StatusLine),
}

impl RelayLine {
    pub const ALL: [RelayLine; 3] = [RelayLine::JumpSimple, RelayLine::JumpDouble, RelayLine::Duck];
}

impl StatusLine {
    pub const ALL: [StatusLine; 3] = [StatusLine::Win, StatusLine::Lose, StatusLine::Start];
}

impl Line {
    pub const ALL: [Line; 6] = [
        Line::Relay(RelayLine::JumpSimple),
        Line::Relay(RelayLine::JumpDouble),
        Line::Relay(RelayLine::Duck),
        Line::Status(StatusLine::Win),
        Line::Status(StatusLine::Lose),
        Line::Status(StatusLine::Start),
    ];

    /// Bit position of the line inside a `LineSet`
    pub fn bit(self) -> u8 {
        match self {
            Line::Relay(RelayLine::JumpSimple) => 0,
            Line::Relay(RelayLine::JumpDouble) => 1,
            Line::Relay(RelayLine::Duck) => 2,
            Line::Status(StatusLine::Win) => 3,
            Line::Status(StatusLine::Lose) => 4,
            Line::Status(StatusLine::Start) => 5,
        }
    }

    pub fn writer(self) -> Side {
        match self {
            Line::Relay(_) => Side::Link,
            Line::Status(_) => Side::Game,
        }
    }

    pub fn reader(self) -> Side {
        match self.writer() {
            Side::Link => Side::Game,
            Side::Game => Side::Link,
        }
    }
}

impl From<RelayLine> for Line {
    fn from(line: RelayLine) -> Self {
        Line::Relay(line)
    }
}

impl From<StatusLine> for Line {
    fn from(line: StatusLine) -> Self {
        Line::Status(line)
    }
}

/// Snapshot of the levels of all data lines
///
/// Used by test benches as the shared harness and by the link controller to
/// report which lines changed between iterations.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LineSet(u8);

impl LineSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub fn get<L: Into<Line>>(&self, line: L) -> bool {
        self.0 & (1 << line.into().bit()) != 0
    }

    pub fn set<L: Into<Line>>(&mut self, line: L, asserted: bool) {
        let mask = 1 << line.into().bit();
        if asserted {
            self.0 |= mask;
        } else {
            self.0 &= !mask;
        }
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Lines whose level differs between `self` and `other`
    pub fn changed(&self, other: &LineSet) -> LineSet {
        LineSet(self.0 ^ other.0)
    }

    /// Asserted lines in harness order
    pub fn asserted(&self) -> Vec<Line, U6> {
        let mut lines = Vec::new();
        for &line in Line::ALL.iter().filter(|&&line| self.get(line)) {
            // capacity equals the number of data lines
            let _ = lines.push(line);
        }
        lines
    }
}
