//! Square-wave tone generator on a plain push-pull pin.
//!
//! The pin is toggled by busy-waiting, so `play` blocks for the whole note.

use core::convert::Infallible;

use stm32f3xx_hal::hal::{blocking::delay::DelayUs, digital::v2::OutputPin};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::pins::infallible;

pub struct Speaker<P>
where
    P: OutputPin<Error = Infallible>,
{
    pin: P,
}

impl<P> Speaker<P>
where
    P: OutputPin<Error = Infallible>,
{
    pub fn new(mut pin: P) -> Self {
        infallible(pin.set_low());
        Self { pin }
    }

    /// Emit `freq_hz` for `duration_ms`, blocking until done
    ///
    /// A zero frequency is a rest, the pin stays low for the duration.
    pub fn play<D>(&mut self, freq_hz: u32, duration_ms: u32, delay: &mut D)
    where
        D: DelayUs<u32>,
    {
        let duration_us = duration_ms * 1_000;
        if freq_hz == 0 {
            delay.delay_us(duration_us);
            return;
        }

        let half_period_us = (500_000 / freq_hz).max(1);
        let half_periods = duration_us / half_period_us;
        trace!(
            "tone {}hz for {}ms, {} half periods of {}us",
            freq_hz,
            duration_ms,
            half_periods,
            half_period_us
        );
        for n in 0..half_periods {
            if n % 2 == 0 {
                infallible(self.pin.set_high());
            } else {
                infallible(self.pin.set_low());
            }
            delay.delay_us(half_period_us);
        }
        infallible(self.pin.set_low());
    }
}
