//! Flush planning
//!
//! Turns a dirty [`Window`] into controller addressing units and decides how
//! the framebuffer bytes go out. No I/O happens here; the driver executes the
//! plan.

use core::ops::{Range, RangeInclusive};

use crate::dirty::Window;
use crate::variant::Variant;

/// How the dirty bytes are streamed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferMode {
    /// The window spans whole rows: one write covers every dirty row
    Contiguous,
    /// One write per row, each preceded by row addressing where needed
    RowWise,
}

/// Addressing and transfer layout for a single flush
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlushPlan {
    /// First column, in the variant's column units
    pub start_column: u16,
    /// Last column (inclusive), in the variant's column units
    pub end_column: u16,
    /// First dirty row
    pub first_row: u16,
    /// End row sent to the controller: one past the last dirty row
    pub end_row: u16,
    /// Last row streamed by a row-wise flush: `end_row`, kept on the panel
    pub last_row: u16,
    /// Bytes of one full framebuffer row
    pub bytes_per_row: usize,
    /// Bytes of one row of the window
    pub bytes_per_transfer: usize,
    /// Contiguous or row by row
    pub mode: TransferMode,
    bytes_per_column: usize,
}

impl FlushPlan {
    /// Plan the flush of `window` on a `width` x `height` panel
    ///
    /// `widen_threshold` widens windows wider than it to the full panel width
    /// on controllers with a linear row layout, so they go out as a single
    /// block.
    pub fn new(
        variant: Variant,
        widen_threshold: Option<u16>,
        window: Window,
        width: u16,
        height: u16,
    ) -> Self {
        let unit = variant.column_unit();
        let columns = width / unit;

        let (x1, x2) = match widen_threshold {
            Some(threshold) if variant.widens_to_full_width() && window.width() > threshold => {
                (0, width.saturating_sub(1))
            }
            _ => (window.x1, window.x2),
        };

        let last_column = columns.saturating_sub(1);
        let start_column = (x1 / unit).min(last_column);
        let end_column = (x2 / unit).min(last_column).max(start_column);

        let last_panel_row = height.saturating_sub(1);
        let first_row = window.y1.min(last_panel_row);
        // the controllers want the row after the last dirty one
        let end_row = window.y2.min(last_panel_row).max(first_row) + 1;
        let last_row = end_row.min(last_panel_row);

        let bytes_per_column = usize::from(variant.bytes_per_column());
        let bytes_per_row = usize::from(width) / 2;
        let bytes_per_transfer = usize::from(end_column - start_column + 1) * bytes_per_column;

        let mode = if bytes_per_transfer == bytes_per_row && variant.auto_increments_rows() {
            TransferMode::Contiguous
        } else {
            TransferMode::RowWise
        };

        Self {
            start_column,
            end_column,
            first_row,
            end_row,
            last_row,
            bytes_per_row,
            bytes_per_transfer,
            mode,
            bytes_per_column,
        }
    }

    /// Rows streamed one by one, `first_row` through the end row inclusive
    pub fn rows(&self) -> RangeInclusive<u16> {
        self.first_row..=self.last_row
    }

    /// Number of writes a row-wise flush issues
    pub fn transfer_count(&self) -> usize {
        usize::from(self.last_row - self.first_row) + 1
    }

    /// Rows covered by a contiguous flush, `end_row - first_row`
    pub fn row_count(&self) -> usize {
        usize::from(self.end_row - self.first_row)
    }

    /// Buffer byte range of the window's slice of `row`
    pub fn row_range(&self, row: u16) -> Range<usize> {
        let start = usize::from(row) * self.bytes_per_row
            + usize::from(self.start_column) * self.bytes_per_column;
        start..start + self.bytes_per_transfer
    }

    /// Buffer byte range covering every dirty row in one block
    pub fn contiguous_range(&self) -> Range<usize> {
        let start = self.row_range(self.first_row).start;
        start..start + self.bytes_per_transfer * self.row_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u16 = 256;
    const H: u16 = 64;

    #[test]
    fn columns_floor_divide_into_units() {
        let plan = FlushPlan::new(Variant::Ssd1322, None, Window::new(10, 0, 37, 0), W, H);
        assert_eq!(plan.start_column, 2);
        assert_eq!(plan.end_column, 9);
        assert_eq!(plan.bytes_per_transfer, 16);
    }

    #[test]
    fn end_row_is_one_past_last_dirty_row() {
        let plan = FlushPlan::new(Variant::Ssd1322, None, Window::new(0, 5, 3, 20), W, H);
        assert_eq!(plan.first_row, 5);
        assert_eq!(plan.end_row, 21);
        assert_eq!(plan.row_count(), 16);
    }

    #[test]
    fn row_wise_streams_through_end_row() {
        let plan = FlushPlan::new(Variant::Ssd1322, None, Window::new(10, 5, 37, 20), W, H);
        assert_eq!(plan.rows(), 5..=21);
        // (end_row - first_row + 1)
        assert_eq!(plan.transfer_count(), 17);
        assert_eq!(plan.rows().count(), plan.transfer_count());
    }

    #[test]
    fn last_panel_row_still_gets_plus_one() {
        let plan = FlushPlan::new(Variant::Ssd1322, None, Window::new(0, 63, 3, 63), W, H);
        assert_eq!(plan.end_row, 64);
        // the streamed rows never leave the panel
        assert_eq!(plan.rows(), 63..=63);
        assert_eq!(plan.transfer_count(), 1);
    }

    #[test]
    fn full_width_is_contiguous() {
        let plan = FlushPlan::new(Variant::Ssd1322, None, Window::new(0, 2, 255, 4), W, H);
        assert_eq!(plan.mode, TransferMode::Contiguous);
        assert_eq!(plan.bytes_per_transfer, plan.bytes_per_row);
        assert_eq!(plan.contiguous_range(), 256..(256 + 128 * 3));
    }

    #[test]
    fn partial_width_is_row_wise() {
        let plan = FlushPlan::new(Variant::Ssd1322, None, Window::new(8, 1, 15, 3), W, H);
        assert_eq!(plan.mode, TransferMode::RowWise);
        assert_eq!(plan.row_range(1), (128 + 4)..(128 + 8));
        assert_eq!(plan.row_range(3), (384 + 4)..(384 + 8));
    }

    #[test]
    fn wide_window_is_widened_above_threshold() {
        let window = Window::new(20, 0, 239, 9);
        let plan = FlushPlan::new(Variant::Ssd1322, Some(192), window, W, H);
        assert_eq!((plan.start_column, plan.end_column), (0, 63));
        assert_eq!(plan.mode, TransferMode::Contiguous);

        let untouched = FlushPlan::new(Variant::Ssd1322, Some(230), window, W, H);
        assert_eq!((untouched.start_column, untouched.end_column), (5, 59));
        assert_eq!(untouched.mode, TransferMode::RowWise);
    }

    #[test]
    fn ssh1122_never_widens_or_goes_contiguous() {
        let widened = FlushPlan::new(Variant::Ssh1122, Some(8), Window::new(20, 0, 239, 9), W, H);
        assert_eq!((widened.start_column, widened.end_column), (5, 59));

        let full = FlushPlan::new(Variant::Ssh1122, None, Window::new(0, 0, 255, 9), W, H);
        assert_eq!(full.bytes_per_transfer, full.bytes_per_row);
        assert_eq!(full.mode, TransferMode::RowWise);
    }

    #[test]
    fn out_of_range_window_is_clamped() {
        let plan = FlushPlan::new(Variant::Ssd1322, None, Window::new(300, 70, 400, 90), W, H);
        assert_eq!((plan.start_column, plan.end_column), (63, 63));
        assert_eq!((plan.first_row, plan.end_row), (63, 64));
        assert_eq!(plan.last_row, 63);
        assert!(plan.row_range(63).end <= usize::from(W / 2) * usize::from(H));
    }
}
