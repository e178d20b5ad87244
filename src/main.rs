//! Firmware entry point: nRF52840 board bring-up and the control loop.
//!
//! The loop samples the three buttons, feeds them with the current
//! uptime into [`Controller::step`], logs any diagnostic snapshot and
//! yields to the executor. Nothing in it blocks.

#![no_std]
#![no_main]

use countdown_timer::config::{self, ControlConfig};
use countdown_timer::error::Error;
use countdown_timer::ui::buttons::Buttons;
use countdown_timer::ui::display::OledSink;
use countdown_timer::Controller;
use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use embassy_nrf::gpio::Pin as _;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());

    let buttons = Buttons::new(p.P0_11.degrade(), p.P0_12.degrade(), p.P0_24.degrade());
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());

    if config::DEBUG_REPORT_ENABLED {
        info!("Allocating SSD1306...");
    }
    let mut display = match OledSink::init(i2c) {
        Ok(display) => display,
        Err(e) => halt(e),
    };

    Timer::after_millis(config::DISPLAY_SETTLE_MS).await;

    info!("INITIAL {}", buttons.sample());

    let mut controller = Controller::new(ControlConfig::DEFAULT, Instant::now().as_millis());
    if let Err(e) = controller.start(&mut display) {
        warn!("Initial frame failed: {:?}", e);
    }

    loop {
        let levels = buttons.sample();
        match controller.step(levels, Instant::now().as_millis(), &mut display) {
            Ok(step) => {
                if let Some(snapshot) = step.snapshot {
                    info!("{}", snapshot);
                }
            }
            Err(e) => warn!("Display update failed: {:?}", e),
        }
        yield_now().await;
    }
}

/// A timer with no display is useless: report once and stop here.
fn halt(e: Error) -> ! {
    error!("SSD1306 allocation failed: {:?}", e);
    loop {
        cortex_m::asm::wfi();
    }
}
