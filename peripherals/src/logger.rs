//! ITM logging for both boards.
//!
//! The logger is backed by `cortex_m_log` and registered with the `log`
//! facade, every crate in the workspace logs through the usual macros.
//!
//! Stimulus port 0 carries the text, read it on the host with:
//!
//! ```sh
//! itmdump -F -f itm.out
//! ```
//!
//! after enabling the port in openocd:
//!
//! ```gdb
//! monitor tpiu config internal itm.out uart off 8000000
//! monitor itm port 0 on
//! ```

use core::marker::{Send, Sync};
use cortex_m::peripheral::ITM;
use cortex_m_log::{
    destination,
    log::{trick_init, Logger},
    modes::InterruptModer,
    printer::{itm::ItmSync, Printer},
};

pub use log::LevelFilter;

pub use cortex_m_log::modes::{InterruptFree, InterruptOk};

pub type ItmLogger = Logger<ItmSync<InterruptFree>>;

/// Create new logger instance with ITM backend
///
/// ```no_run
/// use peripherals::logger::{create_itm_logger, init, InterruptFree, LevelFilter};
/// use log::info;
///
/// let p = cortex_m::Peripherals::take().unwrap();
/// let logger = create_itm_logger::<InterruptFree>(LevelFilter::Debug, p.ITM);
/// unsafe { init(&logger); }
///
/// info!("board up");
/// ```
pub fn create_itm_logger<M>(level: LevelFilter, itm_reg: ITM) -> Logger<ItmSync<M>>
where
    M: InterruptModer + Send + Sync + 'static,
{
    Logger {
        level,
        inner: ItmSync::<M>::new(destination::Itm::new(itm_reg)),
    }
}

/// Initialize logger for the log facade.
///
/// # Safety
///
/// Call once. The logger's lifetime is extended to `'static`, it must
/// outlive every logging call made afterwards.
pub unsafe fn init<P>(logger: &Logger<P>) -> Result<(), &'static str>
where
    P: Printer + Send + Sync + 'static,
{
    trick_init(logger).map_err(|_| "Logger already initialized")
}

/// Create an interrupt-free ITM logger in static memory and register it
///
/// Returns an error when called a second time.
pub fn install_itm_logger(level: LevelFilter, itm_reg: ITM) -> Result<(), &'static str> {
    let logger: &'static mut ItmLogger = cortex_m::singleton!(
        : ItmLogger = create_itm_logger::<InterruptFree>(level, itm_reg)
    )
    .ok_or("ITM logger already installed")?;
    // the logger lives in a static, it can never be dropped
    unsafe { init(logger) }
}
