//! Core implementation of the CAP1296 touch controller driver.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{I2c, SevenBitAddress};
use log::warn;

/// Default 7-bit I2C address of the SH01 board.
pub const DEFAULT_I2C_ADDRESS: SevenBitAddress = 0x28;

// Registers based on the CAP1296 datasheet
const REG_MAIN_CONTROL: u8 = 0x00;
const REG_GENERAL_STATUS: u8 = 0x02;
const REG_SENSOR_INPUT_STATUS: u8 = 0x03;
const REG_SENSOR_INPUT_ENABLE: u8 = 0x21;
const REG_INTERRUPT_ENABLE: u8 = 0x27;

// --- Sensor input status bits (the four pads wired up on the SH01) ---
const INPUT_TRIANGLE: u8 = 0x01;
const INPUT_CROSS: u8 = 0x08;
const INPUT_SQUARE: u8 = 0x10;
const INPUT_CIRCLE: u8 = 0x20;

/// Sensor input enable value covering all four pads (0x39).
const ENABLED_INPUTS: u8 = INPUT_TRIANGLE | INPUT_CROSS | INPUT_SQUARE | INPUT_CIRCLE;

/// General status value the controller reports while a press is pending.
const STATUS_TOUCH_PENDING: u8 = 0x21;

/// Settle time after a detected press, before the touch condition is
/// cleared, so contact bounce does not re-trigger.
const SETTLE_DELAY_MS: u32 = 200;

/// One of the four touch pads on the SH01 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchButton {
    /// The square pad.
    Square,
    /// The triangle pad.
    Triangle,
    /// The circle pad.
    Circle,
    /// The cross pad.
    Cross,
}

/// A controller for the SH01 touch pad.
pub struct TouchController<
    I2cType: I2c<SevenBitAddress, Error = ErrorType>,
    Delay: DelayNs,
    ErrorType: embedded_hal::i2c::Error,
> {
    i2c: I2cType,
    delay: Delay,
    address: SevenBitAddress,
}

impl<
        I2cType: I2c<SevenBitAddress, Error = ErrorType>,
        Delay: DelayNs,
        ErrorType: embedded_hal::i2c::Error,
    > TouchController<I2cType, Delay, ErrorType>
{
    /// Creates a new `TouchController` at the default SH01 address.
    ///
    /// # Arguments
    ///
    /// * `i2c` - An I2C peripheral that implements the blocking `embedded-hal::i2c::I2c` trait.
    /// * `delay` - The delay provider used for the post-touch settle pause.
    pub fn new(i2c: I2cType, delay: Delay) -> Self {
        Self::with_address(i2c, delay, DEFAULT_I2C_ADDRESS)
    }

    /// Creates a new `TouchController` for a board strapped to a non-default address.
    pub fn with_address(i2c: I2cType, delay: Delay, address: SevenBitAddress) -> Self {
        Self { i2c, delay, address }
    }

    /// Configures the CAP1296 for polled operation.
    ///
    /// Interrupt generation is switched off, the four pads are enabled and
    /// any stale touch condition is cleared. Must be called once before
    /// [`poll_touch`](Self::poll_touch); calling it again re-issues the same
    /// fixed writes.
    pub fn initialize(&mut self) -> Result<(), ErrorType> {
        self.write_register(REG_INTERRUPT_ENABLE, 0x00)?;
        self.write_register(REG_SENSOR_INPUT_ENABLE, ENABLED_INPUTS)?;
        self.write_register(REG_MAIN_CONTROL, 0x00)?;
        Ok(())
    }

    /// Polls the controller once and decodes which pad, if any, is touched.
    ///
    /// When no press is pending this performs a single status read and
    /// returns `Ok(None)`. Otherwise the input status is read and decoded,
    /// the settle delay is waited out, and the touch condition is cleared
    /// before returning. An input pattern matching none of the four pads
    /// still goes through the settle-and-clear sequence and is reported as
    /// `Ok(None)`.
    pub fn poll_touch(&mut self) -> Result<Option<TouchButton>, ErrorType> {
        let status = self.read_register(REG_GENERAL_STATUS)?;
        if status != STATUS_TOUCH_PENDING {
            return Ok(None);
        }

        let input = self.read_register(REG_SENSOR_INPUT_STATUS)?;
        let button = match input {
            INPUT_TRIANGLE => Some(TouchButton::Triangle),
            INPUT_CIRCLE => Some(TouchButton::Circle),
            INPUT_CROSS => Some(TouchButton::Cross),
            INPUT_SQUARE => Some(TouchButton::Square),
            _ => None,
        };

        self.delay.delay_ms(SETTLE_DELAY_MS);
        self.write_register(REG_MAIN_CONTROL, 0x00)?;

        Ok(button)
    }

    fn read_register(&mut self, register: u8) -> Result<u8, ErrorType> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(|err| {
                warn!("Error reading register {register:#04x}: {err:?}");
                err
            })?;
        Ok(buf[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), ErrorType> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(|err| {
                warn!("Error writing register {register:#04x}: {err:?}");
                err
            })
    }
}
