//! SSD1322 / SSH1122 Grayscale OLED Driver
//!
//! Drives 4 bit per pixel OLED panels such as the common 3.12" 256x64 modules
//! over SPI with a separate D/C line. Only the part of the framebuffer touched
//! since the last flush is sent.
//!
//! ## Architecture
//!
//! This driver separates hardware control from graphics rendering:
//! - **The driver** ([`Ssd1322`]) owns the bus, runs the init sequence and
//!   flushes dirty windows using the protocol of the configured [`Variant`]
//! - **Framebuffers** ([`displays::Framebuffer`]) hold packed pixels, track the
//!   dirty window and implement `embedded-graphics` `DrawTarget`
//!
//! Anything implementing [`displays::GrayDisplay`] can be flushed, so the
//! drawing side can be swapped without touching the driver.
//!
//! ## Usage
//!
//! ```rust, ignore
//! use ssd1322::prelude::*;
//! use ssd1322::displays::ssd1322_256x64;
//! use embedded_graphics::{pixelcolor::Gray4, prelude::*, primitives::*};
//!
//! // 1. Wrap the SPI device and pins
//! let interface = SpiDisplayInterface::new(spi, dc, rst);
//!
//! // 2. Create and power up the driver
//! let mut driver = Ssd1322::new(interface, Builder::new(Variant::Ssd1322).build());
//! driver.init(true, &mut delay)?;
//!
//! // 3. Draw into a framebuffer
//! let mut display = ssd1322_256x64::framebuffer()?;
//! Rectangle::new(Point::new(10, 5), Size::new(28, 16))
//!     .into_styled(PrimitiveStyle::with_fill(Gray4::WHITE))
//!     .draw(&mut display)?;
//!
//! // 4. Send only what changed
//! driver.flush(&mut display)?;
//! ```
//!
//! Panels on an SSH1122 use `Variant::Ssh1122` and
//! `displays::ssh1122_256x64`; everything else stays the same.
//!
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod cmd;
pub mod config;
pub mod dirty;
pub mod displays;
pub mod driver;
pub mod error;
pub mod flush;
pub mod variant;

mod flag;

/// Maximum display height this driver supports
pub const MAX_HEIGHT: u16 = 128;

/// Maximum display width this driver supports
pub const MAX_WIDTH: u16 = 480;

pub mod interface;

#[cfg(test)]
mod test_support;

pub use config::{Builder, Config};
pub use dirty::{DirtyRegion, Window};
pub use driver::{DisplayError, Housekeeping, InitStep, NoYield, Ssd1322};
pub use error::Error;
pub use variant::Variant;

/// Useful exports
pub mod prelude {
    pub use crate::config::{Builder, Config};
    pub use crate::driver::{DisplayError, Ssd1322};
    pub use crate::interface::{DisplayBus, SpiDisplayInterface};
    pub use crate::variant::Variant;

    pub use crate::displays::{DisplayRotation, Framebuffer, GrayDisplay};
}
