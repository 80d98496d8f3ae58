//! Melody tables and the note-per-tick sequencer.
//!
//! The sequencer never plays a whole melody in one go. Every time its tick
//! budget elapses it plays exactly one note through the blocking tone
//! capability and moves on, so the rest of the loop keeps running between
//! notes. Win and lose melodies stop by themselves, the background melody
//! loops until it is stopped or overridden.

use log::{debug, info, warn};

use crate::tick::{TickCounter, TickState};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Note {
    pub freq_hz: u16,
    pub duration_ms: u16,
}

impl Note {
    pub const fn new(freq_hz: u16, duration_ms: u16) -> Self {
        Self {
            freq_hz,
            duration_ms,
        }
    }
}

pub static BACKGROUND: [Note; 4] = [
    Note::new(262, 120),
    Note::new(330, 120),
    Note::new(392, 120),
    Note::new(330, 120),
];

pub static WIN: [Note; 3] = [Note::new(392, 150), Note::new(440, 200), Note::new(494, 250)];

pub static LOSE: [Note; 3] = [Note::new(392, 200), Note::new(330, 200), Note::new(262, 300)];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mood {
    Background,
    Win,
    Lose,
}

impl Mood {
    pub fn melody(self) -> &'static [Note] {
        match self {
            Mood::Background => &BACKGROUND,
            Mood::Win => &WIN,
            Mood::Lose => &LOSE,
        }
    }

    /// Whether the melody restarts when its notes run out
    pub fn loops(self) -> bool {
        self == Mood::Background
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SequencerState {
    Idle,
    PlayingBackground,
    PlayingWin,
    PlayingLose,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MelodyState {
    mood: Option<Mood>,
    index: usize,
    ticks: TickCounter,
}

impl MelodyState {
    /// Idle sequencer advancing once every `tick_budget` updates
    pub fn new(tick_budget: u16) -> Self {
        Self {
            mood: None,
            index: 0,
            ticks: TickCounter::new(tick_budget),
        }
    }

    pub fn is_active(&self) -> bool {
        self.mood.is_some()
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn ticks(&self) -> u16 {
        self.ticks.load()
    }

    pub fn state(&self) -> SequencerState {
        match self.mood {
            None => SequencerState::Idle,
            Some(Mood::Background) => SequencerState::PlayingBackground,
            Some(Mood::Win) => SequencerState::PlayingWin,
            Some(Mood::Lose) => SequencerState::PlayingLose,
        }
    }

    /// Select `mood` and rewind to its first note
    ///
    /// The tick accumulator keeps running, a restarted melody waits for the
    /// current tick budget like any other note.
    pub fn start(&mut self, mood: Mood) {
        info!("melody {:?} -> {:?}", self.mood, mood);
        self.mood = Some(mood);
        self.index = 0;
    }

    pub fn stop(&mut self) {
        if let Some(mood) = self.mood {
            debug!("melody {:?} stopped at note {}", mood, self.index);
        }
        self.mood = None;
        self.index = 0;
    }

    /// Count one loop iteration and play at most one note
    ///
    /// `play` is called with the current note before the index moves on.
    /// Returns the note that was played, if any.
    pub fn update<F>(&mut self, play: F) -> Option<Note>
    where
        F: FnOnce(Note),
    {
        match self.ticks.tick() {
            TickState::Waiting => None,
            TickState::Elapsed => self.advance(play),
        }
    }

    fn advance<F>(&mut self, play: F) -> Option<Note>
    where
        F: FnOnce(Note),
    {
        let mood = self.mood?;
        let melody = mood.melody();
        if self.index >= melody.len() {
            warn!("note index {} past {:?} melody, rewinding", self.index, mood);
            self.index = 0;
        }

        let note = melody[self.index];
        play(note);
        self.index += 1;

        if self.index >= melody.len() {
            if mood.loops() {
                self.index = 0;
            } else {
                debug!("{:?} melody finished", mood);
                self.mood = None;
                self.index = 0;
            }
        }
        Some(note)
    }
}
