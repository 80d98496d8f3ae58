use crate::pins::{InputLine, Polarity};

use core::convert::Infallible;

use stm32f3xx_hal::hal::digital::v2::InputPin;

/// Cluster of three push buttons wired to ground with pull-ups enabled
pub struct Buttons<'a> {
    lines: [InputLine<'a>; 3],
}

impl<'a> Buttons<'a> {
    pub fn new(pins: [&'a dyn InputPin<Error = Infallible>; 3]) -> Self {
        let [first, second, third] = pins;
        Self {
            lines: [
                InputLine::new(first, Polarity::ActiveLow),
                InputLine::new(second, Polarity::ActiveLow),
                InputLine::new(third, Polarity::ActiveLow),
            ],
        }
    }

    /// Raw snapshot, no debouncing
    pub fn read(&self) -> [bool; 3] {
        let mut res = [false; 3];
        for (pressed, line) in res.iter_mut().zip(self.lines.iter()) {
            *pressed = line.is_asserted();
        }
        res
    }
}
