//! Logical view over digital pins.
//!
//! The game logic only ever talks about a line or a button being *asserted*.
//! Whether that means a high or a low level depends on the wiring: buttons
//! and relay lines pull up and short to ground when active, status lines are
//! driven high when active.

use core::convert::Infallible;

use stm32f3xx_hal::hal::digital::v2::{InputPin, OutputPin};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

impl Polarity {
    /// Electrical level representing `asserted`
    pub fn level(self, asserted: bool) -> bool {
        match self {
            Polarity::ActiveHigh => asserted,
            Polarity::ActiveLow => !asserted,
        }
    }
}

pub(crate) fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

pub struct InputLine<'a> {
    pin: &'a dyn InputPin<Error = Infallible>,
    polarity: Polarity,
}

impl<'a> InputLine<'a> {
    pub fn new(pin: &'a dyn InputPin<Error = Infallible>, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    pub fn is_asserted(&self) -> bool {
        let high = infallible(self.pin.is_high());
        self.polarity.level(high)
    }
}

pub struct OutputLine<'a> {
    pin: &'a mut dyn OutputPin<Error = Infallible>,
    polarity: Polarity,
}

impl<'a> OutputLine<'a> {
    pub fn new(pin: &'a mut dyn OutputPin<Error = Infallible>, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }

    pub fn set(&mut self, asserted: bool) {
        if self.polarity.level(asserted) {
            infallible(self.pin.set_high())
        } else {
            infallible(self.pin.set_low())
        }
    }
}
