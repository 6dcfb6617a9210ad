//! SH1107 demo firmware
//!
//! Brings up a 128x64 OLED FeatherWing on a Feather STM32F405
//! (I2C1, PB6=SCL, PB7=SDA), prints a banner and refreshes an uptime
//! line once a second. Init is retried until the panel answers.

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::*;
use embassy_executor::Spawner;
use embassy_stm32::i2c::{self, I2c};
use embassy_stm32::time::Hertz;
use embassy_time::{Duration, Instant, Timer};
use {defmt_rtt as _, panic_probe as _};

use sh1107_core::{Color, DisplayConfig, FONT_5X7};
use sh1107_drivers::Sh1107;
use sh1107_hal::{EmbeddedHalBus, I2cConfig};

/// Delay between init attempts while the panel is missing
const RETRY_MS: u64 = 1000;

/// Uptime refresh interval
const REFRESH_MS: u64 = 1000;

/// Row (in pixels) of the uptime line
const UPTIME_ROW: u16 = 24;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("SH1107 demo starting...");

    let p = embassy_stm32::init(Default::default());

    let bus_config = I2cConfig::default();
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = Hertz(bus_config.frequency);
    i2c_config.timeout = Duration::from_millis(bus_config.timeout_ms as u64);

    let i2c = I2c::new_blocking(p.I2C1, p.PB6, p.PB7, i2c_config);

    let mut oled: Sh1107<_> = Sh1107::new(EmbeddedHalBus::new(i2c), DisplayConfig::default());

    while let Err(e) = oled.init() {
        warn!("Display init failed: {:?}, retrying", e);
        Timer::after(Duration::from_millis(RETRY_MS)).await;
    }
    info!("OLED initialized");

    oled.set_cursor(0, 0);
    if let Err(e) = oled.put_string("SH1107 demo", &FONT_5X7, Color::On) {
        warn!("Banner clipped: {:?}", e);
    }
    oled.set_cursor(0, 8);
    oled.set_inverted(true);
    oled.put_string(" 128x64 ", &FONT_5X7, Color::On).ok();
    oled.set_inverted(false);

    loop {
        let mut line: heapless::String<21> = heapless::String::new();
        let _ = core::write!(line, "Up {}s", Instant::now().as_secs());

        oled.set_cursor(0, UPTIME_ROW);
        // Blank the previous line before redrawing
        oled.put_string("                     ", &FONT_5X7, Color::On).ok();
        oled.set_cursor(0, UPTIME_ROW);
        oled.put_string(line.as_str(), &FONT_5X7, Color::On).ok();

        if let Err(e) = oled.flush() {
            error!("Flush failed: {:?}", e);
        }

        Timer::after(Duration::from_millis(REFRESH_MS)).await;
    }
}
