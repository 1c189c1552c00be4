//! A blocking, `no_std` driver for the XinaBox SH01 capacitive touch pad.
//!
//! This driver provides a `TouchController` to interact with the CAP1296 I2C
//! capacitive touch controller the board is built around. It allows for
//! configuring the controller and polling which of the four pads (square,
//! triangle, circle, cross) is currently being touched.
//!
//! # Usage
//!
//! To use this driver, you need an I2C peripheral implementation that satisfies
//! the blocking `embedded-hal::i2c::I2c` trait, along with a delay provider
//! satisfying `embedded-hal::delay::DelayNs` for the post-touch settle pause.
//! On a Raspberry Pi both come from `rppal`:
//!
//! ```no_run
//! use rppal::hal::Delay;
//! use rppal::i2c::I2c;
//! use sh01_touch::touch::TouchController;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The bus clock (100 kHz by default on the Pi) is a property of the
//!     // bus itself, not of the driver.
//!     let i2c = I2c::new()?;
//!
//!     // Create and initialize the touch controller
//!     let mut touch = TouchController::new(i2c, Delay::new());
//!     touch.initialize()?;
//!
//!     // Poll for touch events
//!     loop {
//!         if let Some(button) = touch.poll_touch()? {
//!             println!("{button:?} touched");
//!         }
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]

pub mod touch;
