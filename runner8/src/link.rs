//! Link and audio controller loop.
//!
//! One call to `Link::poll` is one iteration of the controller's free-running
//! loop. It always runs in this order:
//!
//! 1. relay the three local buttons onto the relay lines,
//! 2. sample start/win/lose and update the session and the melody,
//! 3. let the melody sequencer play at most one note.
//!
//! Status lines are level-driven and read once per iteration. A start
//! release with no game running opens a session and starts the background
//! melody once. Asserting start while a session is open closes it and silences
//! the sequencer. Win and lose are honoured once per session each, so an
//! outcome line left asserted after its melody ended does not replay it.

use log::{debug, info};

use crate::context::LinkContext;
use crate::melody::{MelodyState, Mood, Note};
use crate::signal::{LineSet, RelayLine, StatusLine};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinkConfig {
    /// Loop iterations between two notes
    pub tick_budget: u16,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self { tick_budget: 80 }
    }
}

/// What the link controller knows about the game on the other side
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub game_active: bool,
    /// One-shot guard, background music starts once per session
    pub background_started: bool,
    pub win_latched: bool,
    pub lose_latched: bool,
}

pub struct Link<C: LinkContext> {
    pub ctx: C,
    melody: MelodyState,
    session: Session,
    lines: LineSet,
    iterations: u32,
}

impl<C: LinkContext> Link<C> {
    pub fn new(ctx: C, config: LinkConfig) -> Self {
        Self {
            ctx,
            melody: MelodyState::new(config.tick_budget),
            session: Session::default(),
            lines: LineSet::new(),
            iterations: 0,
        }
    }

    pub fn melody(&self) -> &MelodyState {
        &self.melody
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Line levels seen or driven during the last iteration
    pub fn lines(&self) -> LineSet {
        self.lines
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Run one loop iteration, returning the note played if any
    pub fn poll(&mut self) -> Option<Note> {
        let mut lines = LineSet::new();

        for &line in RelayLine::ALL.iter() {
            let pressed = self.ctx.read_button(line);
            self.ctx.set_relay(line, pressed);
            lines.set(line, pressed);
        }

        for &line in StatusLine::ALL.iter() {
            lines.set(line, self.ctx.read_status(line));
        }
        self.evaluate(&lines);

        let changed = lines.changed(&self.lines);
        if changed.bits() != 0 {
            debug!(
                "iteration {}: changed {:?}, asserted {:?}",
                self.iterations,
                changed.asserted(),
                lines.asserted()
            );
        }
        self.lines = lines;
        self.iterations = self.iterations.wrapping_add(1);

        let ctx = &mut self.ctx;
        self.melody.update(|note| ctx.play_tone(note))
    }

    fn evaluate(&mut self, lines: &LineSet) {
        let start = lines.get(StatusLine::Start);

        if start && self.session.game_active {
            info!("game stopped");
            self.session = Session::default();
            self.melody.stop();
        }

        if !start && !self.session.game_active {
            info!("game started");
            self.session.game_active = true;
            if !self.session.background_started {
                self.session.background_started = true;
                self.melody.start(Mood::Background);
            }
        }

        if !self.session.game_active {
            return;
        }

        if lines.get(StatusLine::Win)
            && !self.session.win_latched
            && self.melody.mood() != Some(Mood::Win)
        {
            self.session.win_latched = true;
            self.melody.start(Mood::Win);
        }

        if lines.get(StatusLine::Lose)
            && !self.session.lose_latched
            && self.melody.mood() != Some(Mood::Lose)
        {
            self.session.lose_latched = true;
            self.melody.start(Mood::Lose);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::testing::LinkTestingContext;
    use crate::melody::{SequencerState, BACKGROUND, LOSE, WIN};

    fn link(tick_budget: u16) -> Link<LinkTestingContext> {
        Link::new(LinkTestingContext::new(), LinkConfig { tick_budget })
    }

    fn started(tick_budget: u16) -> Link<LinkTestingContext> {
        let mut link = link(tick_budget);
        link.ctx.drive(StatusLine::Start, false);
        link.poll();
        link
    }

    #[test]
    fn idle_while_start_is_asserted() {
        let mut link = link(1);
        for _ in 0..10 {
            assert_eq!(link.poll(), None);
        }
        assert!(!link.session().game_active);
        assert_eq!(link.melody().state(), SequencerState::Idle);
    }

    #[test]
    fn start_release_begins_background_once() {
        let mut link = link(4);
        link.ctx.drive(StatusLine::Start, false);
        link.poll();
        assert!(link.session().game_active);
        assert!(link.session().background_started);
        assert_eq!(link.melody().state(), SequencerState::PlayingBackground);

        // keeps playing instead of rewinding every iteration
        for _ in 0..8 {
            link.poll();
        }
        assert_eq!(link.melody().index(), 2);
    }

    #[test]
    fn relay_mirrors_buttons_without_lag() {
        let mut link = started(80);
        let patterns = [
            [true, false, false],
            [false, true, false],
            [false, false, true],
            [true, true, true],
            [false, false, false],
        ];
        for pattern in patterns.iter() {
            for (&line, &pressed) in RelayLine::ALL.iter().zip(pattern.iter()) {
                link.ctx.press(line, pressed);
            }
            link.poll();
            for (&line, &pressed) in RelayLine::ALL.iter().zip(pattern.iter()) {
                assert_eq!(link.ctx.lines().get(line), pressed, "{:?}", line);
                assert_eq!(link.lines().get(line), pressed);
            }
        }
    }

    #[test]
    fn relay_runs_while_idle() {
        let mut link = link(80);
        link.ctx.press(RelayLine::JumpDouble, true);
        link.poll();
        assert!(link.ctx.lines().get(RelayLine::JumpDouble));
        assert!(!link.session().game_active);
    }

    #[test]
    fn win_overrides_background() {
        let mut link = started(1);
        link.poll();
        link.poll();
        assert_ne!(link.melody().index(), 0);

        link.ctx.drive(StatusLine::Win, true);
        assert_eq!(link.poll(), Some(WIN[0]));
        assert_eq!(link.melody().state(), SequencerState::PlayingWin);
        assert_eq!(link.melody().index(), 1);
    }

    #[test]
    fn win_is_not_reentrant() {
        let mut link = started(1);
        link.ctx.drive(StatusLine::Win, true);
        let played = [link.poll(), link.poll(), link.poll()];
        assert_eq!(played, [Some(WIN[0]), Some(WIN[1]), Some(WIN[2])]);
    }

    #[test]
    fn held_outcome_does_not_replay() {
        let mut link = started(1);
        link.ctx.drive(StatusLine::Lose, true);
        for expected in LOSE.iter() {
            assert_eq!(link.poll(), Some(*expected));
        }
        assert_eq!(link.melody().state(), SequencerState::Idle);
        for _ in 0..10 {
            assert_eq!(link.poll(), None);
        }
        assert!(link.session().lose_latched);
    }

    #[test]
    fn lose_then_win() {
        let mut link = started(1);
        link.ctx.drive(StatusLine::Lose, true);
        link.poll();
        link.ctx.drive(StatusLine::Lose, false);
        link.ctx.drive(StatusLine::Win, true);
        link.poll();
        assert_eq!(link.melody().mood(), Some(Mood::Win));
    }

    #[test]
    fn win_then_lose() {
        let mut link = started(4);
        link.ctx.drive(StatusLine::Win, true);
        assert_eq!(link.poll(), None);
        assert_eq!(link.melody().mood(), Some(Mood::Win));

        link.ctx.drive(StatusLine::Lose, true);
        assert_eq!(link.poll(), None);
        assert_eq!(link.melody().mood(), Some(Mood::Lose));
        assert_eq!(link.melody().index(), 0);
        assert!(link.session().win_latched);
        assert!(link.session().lose_latched);

        assert_eq!(link.poll(), Some(LOSE[0]));
    }

    #[test]
    fn outcomes_are_ignored_without_a_game() {
        let mut link = link(1);
        link.ctx.drive(StatusLine::Win, true);
        link.ctx.drive(StatusLine::Lose, true);
        for _ in 0..5 {
            assert_eq!(link.poll(), None);
        }
        assert_eq!(link.session(), &Session::default());
    }

    #[test]
    fn start_assertion_stops_and_rearms() {
        let mut link = started(1);
        link.ctx.drive(StatusLine::Lose, true);
        link.poll();

        link.ctx.drive(StatusLine::Start, true);
        assert_eq!(link.poll(), None);
        assert_eq!(link.session(), &Session::default());
        assert_eq!(link.melody().state(), SequencerState::Idle);

        link.ctx.drive(StatusLine::Lose, false);
        link.ctx.drive(StatusLine::Start, false);
        assert_eq!(link.poll(), Some(BACKGROUND[0]));
        assert!(link.session().background_started);
    }

    #[test]
    fn one_note_per_tick_budget() {
        let mut link = started(80);
        assert_eq!(link.ctx.tones(), 0);
        for _ in 0..78 {
            link.poll();
        }
        assert_eq!(link.ctx.tones(), 0);
        link.poll();
        assert_eq!(link.ctx.tones(), 1);
        assert_eq!(link.ctx.last_tone(), Some(BACKGROUND[0]));
    }
}
