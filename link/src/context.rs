use core::convert::Infallible;

use stm32f3xx_hal::hal::{blocking::delay::DelayUs, digital::v2::OutputPin};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use peripherals::{Buttons, InputLine, OutputLine, Speaker};
use runner8::{LinkContext, Note, RelayLine, StatusLine};

fn relay_index(line: RelayLine) -> usize {
    match line {
        RelayLine::JumpSimple => 0,
        RelayLine::JumpDouble => 1,
        RelayLine::Duck => 2,
    }
}

fn status_index(line: StatusLine) -> usize {
    match line {
        StatusLine::Win => 0,
        StatusLine::Lose => 1,
        StatusLine::Start => 2,
    }
}

/// Buttons, harness lines and the speaker of the link controller
///
/// Buttons and relays are ordered like `RelayLine::ALL`, status inputs like
/// `StatusLine::ALL`.
pub(crate) struct LinkBoard<'a, P, D>
where
    P: OutputPin<Error = Infallible>,
{
    pub buttons: Buttons<'a>,
    pub relays: [OutputLine<'a>; 3],
    pub status: [InputLine<'a>; 3],
    pub speaker: Speaker<P>,
    pub delay: D,
}

impl<'a, P, D> LinkBoard<'a, P, D>
where
    P: OutputPin<Error = Infallible>,
{
    pub fn new(
        buttons: Buttons<'a>,
        relays: [OutputLine<'a>; 3],
        status: [InputLine<'a>; 3],
        speaker: Speaker<P>,
        delay: D,
    ) -> Self {
        Self {
            buttons,
            relays,
            status,
            speaker,
            delay,
        }
    }
}

impl<'a, P, D> LinkContext for LinkBoard<'a, P, D>
where
    P: OutputPin<Error = Infallible>,
    D: DelayUs<u32>,
{
    fn read_button(&mut self, line: RelayLine) -> bool {
        self.buttons.read()[relay_index(line)]
    }

    fn set_relay(&mut self, line: RelayLine, asserted: bool) {
        self.relays[relay_index(line)].set(asserted);
    }

    fn read_status(&mut self, line: StatusLine) -> bool {
        self.status[status_index(line)].is_asserted()
    }

    fn play_tone(&mut self, note: Note) {
        self.speaker.play(
            u32::from(note.freq_hz),
            u32::from(note.duration_ms),
            &mut self.delay,
        );
    }
}
