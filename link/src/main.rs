#![no_main]
#![no_std]

// sets default panic handler
#[allow(unused_imports)]
use panic_itm;

// provides _start symbol
use cortex_m_rt::entry;

use stm32f3xx_hal as stm32f303;

use stm32f303::{delay::Delay, flash::FlashExt, gpio::GpioExt, pac, rcc::RccExt, time::U32Ext};

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use peripherals::{
    freeze_clocks, logger::*, Buttons, InputLine, OutputLine, Polarity, Speaker,
};

use runner8::{Link, LinkConfig};

mod context;
use context::LinkBoard;

const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[entry]
fn main() -> ! {
    let cp = cortex_m::Peripherals::take().expect("Failed requesting peripherals");
    let dp = pac::Peripherals::take().expect("Failed requesting peripherals");

    install_itm_logger(LOG_LEVEL, cp.ITM).expect("Failed installing logger");
    info!("init process started");

    info!("configuring clocks");
    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();

    let sysclk_freq = 36.mhz();
    let clocks = freeze_clocks(sysclk_freq, rcc.cfgr, &mut flash);

    let mut gpioa = dp.GPIOA.split(&mut rcc.ahb);
    let mut gpiob = dp.GPIOB.split(&mut rcc.ahb);
    let mut gpioc = dp.GPIOC.split(&mut rcc.ahb);

    info!("configuring buttons on pa1-pa3");
    let pa1 = gpioa.pa1.into_pull_up_input(&mut gpioa.moder, &mut gpioa.pupdr);
    let pa2 = gpioa.pa2.into_pull_up_input(&mut gpioa.moder, &mut gpioa.pupdr);
    let pa3 = gpioa.pa3.into_pull_up_input(&mut gpioa.moder, &mut gpioa.pupdr);
    let buttons = Buttons::new([&pa1, &pa2, &pa3]);

    info!("configuring relay lines on pb0-pb2");
    let mut pb0 = gpiob
        .pb0
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let mut pb1 = gpiob
        .pb1
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let mut pb2 = gpiob
        .pb2
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let mut relays = [
        OutputLine::new(&mut pb0, Polarity::ActiveLow),
        OutputLine::new(&mut pb1, Polarity::ActiveLow),
        OutputLine::new(&mut pb2, Polarity::ActiveLow),
    ];
    for relay in relays.iter_mut() {
        relay.set(false);
    }

    info!("configuring status lines on pc0-pc2");
    let pc0 = gpioc
        .pc0
        .into_pull_down_input(&mut gpioc.moder, &mut gpioc.pupdr);
    let pc1 = gpioc
        .pc1
        .into_pull_down_input(&mut gpioc.moder, &mut gpioc.pupdr);
    let pc2 = gpioc
        .pc2
        .into_pull_down_input(&mut gpioc.moder, &mut gpioc.pupdr);
    let status = [
        InputLine::new(&pc0, Polarity::ActiveHigh),
        InputLine::new(&pc1, Polarity::ActiveHigh),
        InputLine::new(&pc2, Polarity::ActiveHigh),
    ];

    info!("configuring speaker on pb5");
    let pb5 = gpiob
        .pb5
        .into_push_pull_output(&mut gpiob.moder, &mut gpiob.otyper);
    let speaker = Speaker::new(pb5);

    let delay = Delay::new(cp.SYST, clocks);

    let board = LinkBoard::new(buttons, relays, status, speaker, delay);
    let mut link = Link::new(board, LinkConfig::default());

    info!("link controller running");
    loop {
        if let Some(note) = link.poll() {
            trace!("played {}hz for {}ms", note.freq_hz, note.duration_ms);
        }
    }
}
