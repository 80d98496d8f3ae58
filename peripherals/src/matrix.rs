//! 8x8 LED matrix without a latch, driven one row at a time.
//!
//! Row drivers source current when high, column pins sink it when low. Only
//! one row is ever lit, a picture is persisted by strobing all eight rows over
//! and over.

use core::convert::Infallible;

use stm32f3xx_hal::hal::digital::v2::OutputPin;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

use crate::pins::{OutputLine, Polarity};

pub struct Matrix<'a> {
    rows: [OutputLine<'a>; 8],
    cols: [OutputLine<'a>; 8],
}

impl<'a> Matrix<'a> {
    pub fn new(
        rows: [&'a mut dyn OutputPin<Error = Infallible>; 8],
        cols: [&'a mut dyn OutputPin<Error = Infallible>; 8],
    ) -> Self {
        let [r0, r1, r2, r3, r4, r5, r6, r7] = rows;
        let [c0, c1, c2, c3, c4, c5, c6, c7] = cols;
        fn row<'p>(pin: &'p mut dyn OutputPin<Error = Infallible>) -> OutputLine<'p> {
            OutputLine::new(pin, Polarity::ActiveHigh)
        }
        fn col<'p>(pin: &'p mut dyn OutputPin<Error = Infallible>) -> OutputLine<'p> {
            OutputLine::new(pin, Polarity::ActiveLow)
        }
        let mut matrix = Self {
            rows: [row(r0), row(r1), row(r2), row(r3), row(r4), row(r5), row(r6), row(r7)],
            cols: [col(c0), col(c1), col(c2), col(c3), col(c4), col(c5), col(c6), col(c7)],
        };
        matrix.blank();
        debug!("matrix configured, 8 rows x 8 columns");
        matrix
    }

    /// Light row `n` with `pattern`, MSB is the left-most column
    ///
    /// The row stays lit until the next call, the caller decides how long.
    pub fn show_row(&mut self, n: usize, pattern: u8) {
        for row in self.rows.iter_mut() {
            row.set(false);
        }
        for (bit, col) in self.cols.iter_mut().enumerate() {
            col.set(pattern & (0x80 >> bit) != 0);
        }
        match self.rows.get_mut(n) {
            Some(row) => row.set(true),
            None => warn!("row {} out of the matrix", n),
        }
    }

    pub fn blank(&mut self) {
        for row in self.rows.iter_mut() {
            row.set(false);
        }
        for col in self.cols.iter_mut() {
            col.set(false);
        }
    }
}
