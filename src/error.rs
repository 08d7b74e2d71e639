//! Construction errors

use core::fmt;

/// Reasons a framebuffer cannot be set up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Storage length does not match `width / 2 * height`
    BufferLength {
        /// Bytes the dimensions need
        expected: usize,
        /// Bytes the storage has
        actual: usize,
    },
    /// Zero sized, wider than 480, taller than 128, or width not a multiple
    /// of the 4 pixel column unit
    Dimensions {
        /// Requested width in pixels
        width: u16,
        /// Requested height in pixels
        height: u16,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferLength { expected, actual } => write!(
                f,
                "framebuffer needs {expected} bytes but storage holds {actual}"
            ),
            Error::Dimensions { width, height } => {
                write!(f, "unsupported panel dimensions {width}x{height}")
            }
        }
    }
}
