//! Driver configuration

use crate::variant::Variant;

/// Widening threshold used for the SSD1322 unless overridden
///
/// Tuned on 256 pixel wide panels; re-measure before relying on it for other
/// widths.
pub const DEFAULT_WIDEN_THRESHOLD: u16 = 192;

/// Immutable driver settings
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub(crate) variant: Variant,
    pub(crate) widen_threshold: Option<u16>,
}

impl Config {
    /// Controller variant
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Pixel width above which a partial update goes out as full rows
    pub fn widen_threshold(&self) -> Option<u16> {
        self.widen_threshold
    }
}

impl Default for Config {
    fn default() -> Self {
        Builder::new(Variant::default()).build()
    }
}

/// Builder for [`Config`]
///
/// ```
/// use ssd1322::{Builder, Variant};
///
/// let config = Builder::new(Variant::Ssd1322)
///     .widen_threshold(Some(224))
///     .build();
/// assert_eq!(config.widen_threshold(), Some(224));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Builder {
    variant: Variant,
    widen_threshold: Option<u16>,
}

impl Builder {
    /// Start from the defaults for `variant`
    pub fn new(variant: Variant) -> Self {
        let widen_threshold = if variant.widens_to_full_width() {
            Some(DEFAULT_WIDEN_THRESHOLD)
        } else {
            None
        };
        Self {
            variant,
            widen_threshold,
        }
    }

    /// Override the widening threshold; `None` disables widening
    ///
    /// Ignored by controllers without a linear row layout.
    pub fn widen_threshold(mut self, threshold: Option<u16>) -> Self {
        self.widen_threshold = threshold;
        self
    }

    /// Finish the configuration
    pub fn build(self) -> Config {
        Config {
            variant: self.variant,
            widen_threshold: self.widen_threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ssd1322_defaults_to_widening() {
        let config = Builder::new(Variant::Ssd1322).build();
        assert_eq!(config.widen_threshold(), Some(DEFAULT_WIDEN_THRESHOLD));
    }

    #[test]
    fn ssh1122_defaults_to_no_widening() {
        let config = Builder::new(Variant::Ssh1122).build();
        assert_eq!(config.variant(), Variant::Ssh1122);
        assert_eq!(config.widen_threshold(), None);
    }

    #[test]
    fn threshold_can_be_disabled() {
        let config = Builder::new(Variant::Ssd1322).widen_threshold(None).build();
        assert_eq!(config.widen_threshold(), None);
    }
}
