#![no_std]

use stm32f3xx_hal as stm32f303;

use stm32f303::{flash, pac, rcc, time::MegaHertz};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub mod buttons;
pub mod logger;
pub mod matrix;
pub mod pins;
pub mod tone;

pub use buttons::Buttons;
pub use matrix::Matrix;
pub use pins::{InputLine, OutputLine, Polarity};
pub use tone::Speaker;

/// Baud rate of the TPIU, has to match the one configured in openocd
pub const ITM_BAUD_RATE: u32 = 2;

/// tpiu is a bridge for ITM, it's asynchronous clock prescaller
/// has to be updated, otherwise logging through ITM won't work
pub trait ClocksExt {
    fn set_tpiu_async_cpr(self, baud_rate: MegaHertz) -> Self;
}

impl ClocksExt for rcc::Clocks {
    fn set_tpiu_async_cpr(self, baud_rate: MegaHertz) -> Self {
        let tpiu_async_presc = self.hclk().0 / (baud_rate.0 * 1_000_000) - 1;
        unsafe { (*pac::TPIU::ptr()).acpr.write(tpiu_async_presc) }
        trace!("HCLK set to: {}hz", self.hclk().0);
        trace!("setting tpiu baud rate to: {}mhz", baud_rate.0);
        trace!("setting async clock prescaller: {}", tpiu_async_presc);
        self
    }
}

/// Freeze system clocks at `sysclk` and keep the ITM baud rate in sync
pub fn freeze_clocks(sysclk: MegaHertz, cfgr: rcc::CFGR, flash: &mut flash::Parts) -> rcc::Clocks {
    cfgr.sysclk(sysclk)
        .freeze(&mut flash.acr)
        .set_tpiu_async_cpr(MegaHertz(ITM_BAUD_RATE))
}
