//! Packed 4 bit grayscale framebuffers
//!
//! The driver does not draw. It consumes anything implementing
//! [`GrayDisplay`]: a packed buffer, its physical dimensions and the dirty
//! window grown by pixel writes.

use crate::dirty::{DirtyRegion, Window};
use crate::error::Error;
use crate::{MAX_HEIGHT, MAX_WIDTH};

#[cfg(feature = "graphics")]
mod graphics;

/// 3.12in 256x64 panels on an SSD1322
pub mod ssd1322_256x64;
/// 256x64 panels on an SSH1122
pub mod ssh1122_256x64;

/// Largest gray level
pub const MAX_LEVEL: u8 = 0x0F;

/// Capability the flush engine and graphics layers work against
///
/// Coordinates passed to [`set_pixel`](GrayDisplay::set_pixel) and
/// [`pixel`](GrayDisplay::pixel) are logical, i.e. before rotation. The buffer
/// and the dirty window are always in physical panel coordinates.
pub trait GrayDisplay {
    /// Packed buffer, two pixels per byte, row major
    fn buffer(&self) -> &[u8];

    /// Mutable packed buffer
    fn get_mut_buffer(&mut self) -> &mut [u8];

    /// Physical width in pixels
    fn width(&self) -> u16;

    /// Physical height in pixels
    fn height(&self) -> u16;

    /// Sets the rotation of the display
    fn set_rotation(&mut self, rotation: DisplayRotation);

    /// Get the current rotation of the display
    fn rotation(&self) -> DisplayRotation;

    /// Dirty tracker for this buffer
    fn dirty(&mut self) -> &mut DirtyRegion;

    /// Take the dirty window, leaving it empty
    fn take_dirty(&mut self) -> Option<Window> {
        self.dirty().take()
    }

    /// Mark the whole panel for the next flush
    fn mark_all_dirty(&mut self) {
        self.dirty().mark_all();
    }

    /// Fill the buffer with one gray level and mark everything dirty
    fn clear_buffer(&mut self, level: u8) {
        let level = level & MAX_LEVEL;
        let fill = (level << 4) | level;
        for byte in self.get_mut_buffer().iter_mut() {
            *byte = fill;
        }
        self.mark_all_dirty();
    }

    /// Write a gray level (`0..=15`, higher bits ignored) at logical `x`, `y`
    ///
    /// Pixels outside the display are dropped without touching the dirty
    /// window.
    fn set_pixel(&mut self, x: i32, y: i32, level: u8) {
        let (width, height) = (u32::from(self.width()), u32::from(self.height()));
        let rotation = self.rotation();
        if outside_display(x, y, width, height, rotation) {
            return;
        }

        let (nx, ny) = find_rotation(x as u32, y as u32, width, height, rotation);
        let (index, shift) = find_position(nx, ny, width);
        let Some(byte) = self.get_mut_buffer().get_mut(index) else {
            return;
        };
        *byte = (*byte & !(MAX_LEVEL << shift)) | ((level & MAX_LEVEL) << shift);
        self.dirty().mark_pixel(nx as i32, ny as i32);
    }

    /// Gray level at logical `x`, `y`
    fn pixel(&self, x: i32, y: i32) -> Option<u8> {
        let (width, height) = (u32::from(self.width()), u32::from(self.height()));
        let rotation = self.rotation();
        if outside_display(x, y, width, height, rotation) {
            return None;
        }

        let (nx, ny) = find_rotation(x as u32, y as u32, width, height, rotation);
        let (index, shift) = find_position(nx, ny, width);
        self.buffer()
            .get(index)
            .map(|byte| (byte >> shift) & MAX_LEVEL)
    }
}

/// Display rotation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayRotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate by 90 degrees clockwise
    Rotate90,
    /// Rotate by 180 degrees clockwise
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

// Checks if a pos is outside the defined display
fn outside_display(x: i32, y: i32, width: u32, height: u32, rotation: DisplayRotation) -> bool {
    if x < 0 || y < 0 {
        return true;
    }
    let (x, y) = (x as u32, y as u32);
    match rotation {
        DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => x >= width || y >= height,
        DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => y >= width || x >= height,
    }
}

fn find_rotation(x: u32, y: u32, width: u32, height: u32, rotation: DisplayRotation) -> (u32, u32) {
    match rotation {
        DisplayRotation::Rotate0 => (x, y),
        DisplayRotation::Rotate90 => (width - 1 - y, x),
        DisplayRotation::Rotate180 => (width - 1 - x, height - 1 - y),
        DisplayRotation::Rotate270 => (y, height - 1 - x),
    }
}

// index in the byte slice and the shift of the pixel's nibble; even columns
// live in the high nibble
fn find_position(nx: u32, ny: u32, width: u32) -> (usize, u8) {
    let index = (nx / 2 + width / 2 * ny) as usize;
    let shift = if nx % 2 == 0 { 4 } else { 0 };
    (index, shift)
}

/// Bytes needed for a `width` x `height` 4 bit buffer
#[must_use]
pub const fn buffer_len(width: usize, height: usize) -> usize {
    width / 2 * height
}

/// Owned packed framebuffer with `N` bytes of storage
///
/// `N` must equal [`buffer_len`] of the dimensions passed to
/// [`Framebuffer::new`].
pub struct Framebuffer<const N: usize> {
    buffer: [u8; N],
    width: u16,
    height: u16,
    rotation: DisplayRotation,
    dirty: DirtyRegion,
}

impl<const N: usize> Framebuffer<N> {
    /// Create a black framebuffer for a `width` x `height` panel
    ///
    /// Fails when the dimensions are not drivable or `N` does not match them.
    pub fn new(width: u16, height: u16) -> Result<Self, Error> {
        if width == 0 || height == 0 || width % 4 != 0 || width > MAX_WIDTH || height > MAX_HEIGHT
        {
            return Err(Error::Dimensions { width, height });
        }
        let expected = buffer_len(usize::from(width), usize::from(height));
        if expected != N {
            return Err(Error::BufferLength {
                expected,
                actual: N,
            });
        }
        Ok(Self {
            buffer: [0; N],
            width,
            height,
            rotation: DisplayRotation::default(),
            dirty: DirtyRegion::new(width, height),
        })
    }

    /// Current dirty window without taking it
    pub fn dirty_window(&self) -> Option<Window> {
        self.dirty.window()
    }

    /// Logical dimensions after rotation
    pub fn logical_size(&self) -> (u16, u16) {
        match self.rotation {
            DisplayRotation::Rotate0 | DisplayRotation::Rotate180 => (self.width, self.height),
            DisplayRotation::Rotate90 | DisplayRotation::Rotate270 => (self.height, self.width),
        }
    }
}

impl<const N: usize> GrayDisplay for Framebuffer<N> {
    fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    fn get_mut_buffer(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn set_rotation(&mut self, rotation: DisplayRotation) {
        self.rotation = rotation;
    }

    fn rotation(&self) -> DisplayRotation {
        self.rotation
    }

    fn dirty(&mut self) -> &mut DirtyRegion {
        &mut self.dirty
    }
}
