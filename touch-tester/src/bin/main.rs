//! Polls the SH01 touch pad and logs which button is touched.

use std::thread::sleep;
use std::time::Duration;

use anyhow::Context;
use log::{error, info};
use rppal::hal::Delay;
use rppal::i2c::I2c;
use sh01_touch::touch::{TouchButton, TouchController, DEFAULT_I2C_ADDRESS};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!("touch-tester:");

    let i2c = I2c::new().context("opening the I2C bus")?;
    info!(
        "#[i2c, {:#04x}, {}hz, bus_num: {}] bus ready",
        DEFAULT_I2C_ADDRESS,
        i2c.clock_speed().context("querying the bus clock")?,
        i2c.bus()
    );

    let mut touch = TouchController::new(i2c, Delay::new());
    touch
        .initialize()
        .context("configuring the touch controller")?;
    info!("#[cap1296, {:#04x}] configured, polling:", DEFAULT_I2C_ADDRESS);

    loop {
        match touch.poll_touch() {
            Ok(Some(TouchButton::Square)) => info!("SQUARE touched"),
            Ok(Some(TouchButton::Triangle)) => info!("TRIANGLE touched"),
            Ok(Some(TouchButton::Circle)) => info!("CIRCLE touched"),
            Ok(Some(TouchButton::Cross)) => info!("CROSS touched"),
            Ok(None) => {}
            Err(err) => error!("touch poll failed: {err:?}"),
        }
        sleep(POLL_INTERVAL);
    }
}
