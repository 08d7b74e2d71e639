//! Controller variants
//!
//! Both supported controllers drive the same 4 bit per pixel buffer layout but
//! disagree on op-codes, column addressing units and how command arguments are
//! framed on the D/C line. [`Variant`] is chosen once at construction and every
//! flush consults it.

use display_interface::DisplayError;
use log::trace;

use crate::cmd::{Cmd, SshCmd};
use crate::displays::{ssd1322_256x64, ssh1122_256x64};
use crate::driver::InitStep;
use crate::interface::{DataLine, DisplayBus};

/// Supported controller chips
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Solomon Systech SSD1322
    ///
    /// Has a real rectangular RAM window (column + row + write RAM) with row
    /// auto-increment. Columns are addressed in 4 pixel units offset by
    /// `0x1C` and command arguments are sent with D/C high.
    #[default]
    Ssd1322,
    /// Sino Wealth SSH1122
    ///
    /// No rectangular window: every row is addressed explicitly with a row
    /// command and two column nibble commands. Columns are byte (2 pixel)
    /// addresses and command arguments stay in command framing (D/C low).
    Ssh1122,
}

impl Variant {
    /// Pixels covered by one column step of the flush engine
    pub const fn column_unit(self) -> u16 {
        match self {
            Variant::Ssd1322 | Variant::Ssh1122 => 4,
        }
    }

    /// Framebuffer bytes per column step (2 pixels per byte)
    pub const fn bytes_per_column(self) -> u16 {
        self.column_unit() / 2
    }

    /// Offset added to a column before it goes on the wire
    pub const fn column_bias(self) -> u8 {
        match self {
            // 480 column driver, 256 pixel panels sit in the middle of it
            Variant::Ssd1322 => 0x1C,
            Variant::Ssh1122 => 0x00,
        }
    }

    /// Wire value for a column given in [`column_unit`](Self::column_unit)s
    pub const fn encode_column(self, column: u16) -> u8 {
        match self {
            Variant::Ssd1322 => (column as u8).wrapping_add(self.column_bias()),
            Variant::Ssh1122 => ((column << 1) as u8).wrapping_add(self.column_bias()),
        }
    }

    /// D/C level used while sending command argument bytes
    pub const fn arg_framing(self) -> DataLine {
        match self {
            Variant::Ssd1322 => DataLine::Data,
            Variant::Ssh1122 => DataLine::Command,
        }
    }

    /// Whether the controller keeps a rectangular window and moves to the
    /// next row on its own
    pub const fn auto_increments_rows(self) -> bool {
        match self {
            Variant::Ssd1322 => true,
            Variant::Ssh1122 => false,
        }
    }

    /// Whether near full width updates may be widened to a full row block
    pub const fn widens_to_full_width(self) -> bool {
        self.auto_increments_rows()
    }

    /// Column address op-code (high nibble command on the SSH1122)
    pub const fn set_column(self) -> u8 {
        match self {
            Variant::Ssd1322 => Cmd::SET_COLUMN,
            Variant::Ssh1122 => SshCmd::COLUMN_HIGH,
        }
    }

    /// Row address op-code
    pub const fn set_row(self) -> u8 {
        match self {
            Variant::Ssd1322 => Cmd::SET_ROW,
            Variant::Ssh1122 => SshCmd::SET_ROW,
        }
    }

    /// RAM write op-code; the SSH1122 accepts data directly after addressing
    pub const fn write_ram(self) -> Option<u8> {
        match self {
            Variant::Ssd1322 => Some(Cmd::WRITE_RAM),
            Variant::Ssh1122 => None,
        }
    }

    /// Contrast / brightness op-code taking one argument
    pub const fn contrast(self) -> u8 {
        match self {
            Variant::Ssd1322 => Cmd::CONTRAST_CURRENT,
            Variant::Ssh1122 => SshCmd::CONTRAST,
        }
    }

    /// Inverted display op-code
    pub const fn invert(self) -> u8 {
        match self {
            Variant::Ssd1322 => Cmd::INVERT_DISPLAY,
            Variant::Ssh1122 => SshCmd::INVERT_DISPLAY,
        }
    }

    /// Normal display op-code
    pub const fn normal(self) -> u8 {
        match self {
            Variant::Ssd1322 => Cmd::NORMAL_DISPLAY,
            Variant::Ssh1122 => SshCmd::NORMAL_DISPLAY,
        }
    }

    /// Panel power on op-code
    pub const fn display_on(self) -> u8 {
        match self {
            Variant::Ssd1322 => Cmd::DISPLAY_ON,
            Variant::Ssh1122 => SshCmd::DISPLAY_ON,
        }
    }

    /// Panel power off op-code
    pub const fn display_off(self) -> u8 {
        match self {
            Variant::Ssd1322 => Cmd::DISPLAY_OFF,
            Variant::Ssh1122 => SshCmd::DISPLAY_OFF,
        }
    }

    /// Default power-up table for this controller
    pub fn init_sequence(self) -> &'static [InitStep] {
        match self {
            Variant::Ssd1322 => ssd1322_256x64::INIT_SEQUENCE,
            Variant::Ssh1122 => ssh1122_256x64::INIT_SEQUENCE,
        }
    }

    /// Send a command, framing its arguments the way this controller expects
    pub fn send<DI: DisplayBus>(
        self,
        bus: &mut DI,
        command: u8,
        args: &[u8],
    ) -> Result<(), DisplayError> {
        bus.cmd_with_args(command, args, self.arg_framing())
    }

    /// Open the write window for a flush
    ///
    /// Columns are in [`column_unit`](Self::column_unit)s, `end_row` is the
    /// row after the last one written. Controllers without a window do
    /// nothing here and address each row in [`continue_row`](Self::continue_row).
    pub fn begin_window<DI: DisplayBus>(
        self,
        bus: &mut DI,
        start_column: u16,
        start_row: u16,
        end_column: u16,
        end_row: u16,
    ) -> Result<(), DisplayError> {
        match self {
            Variant::Ssd1322 => {
                trace!(
                    "window columns {}-{}, rows {}-{}",
                    start_column,
                    end_column,
                    start_row,
                    end_row
                );
                self.send(
                    bus,
                    self.set_column(),
                    &[self.encode_column(start_column), self.encode_column(end_column)],
                )?;
                self.send(bus, self.set_row(), &[start_row as u8, end_row as u8])?;
                match self.write_ram() {
                    Some(write_ram) => self.send(bus, write_ram, &[]),
                    None => Ok(()),
                }
            }
            Variant::Ssh1122 => Ok(()),
        }
    }

    /// Address the start of `row` before its data is streamed
    ///
    /// A no-op for controllers that auto-increment rows inside their window.
    pub fn continue_row<DI: DisplayBus>(
        self,
        bus: &mut DI,
        column: u16,
        row: u16,
    ) -> Result<(), DisplayError> {
        match self {
            Variant::Ssd1322 => Ok(()),
            Variant::Ssh1122 => {
                let address = self.encode_column(column);
                self.send(bus, self.set_row(), &[row as u8])?;
                self.send(bus, self.set_column() | (address >> 4), &[])?;
                self.send(bus, SshCmd::COLUMN_LOW | (address & 0x0F), &[])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Event, RecordingBus};

    #[test]
    fn ssd1322_column_encoding_adds_bias() {
        let v = Variant::Ssd1322;
        assert_eq!(v.encode_column(10 / v.column_unit()), 2 + 0x1C);
        assert_eq!(v.encode_column(37 / v.column_unit()), 9 + 0x1C);
    }

    #[test]
    fn ssh1122_column_encoding_doubles() {
        let v = Variant::Ssh1122;
        assert_eq!(v.column_bias(), 0);
        assert_eq!(v.encode_column(2), 4);
        assert_eq!(v.encode_column(63), 126);
    }

    #[test]
    fn ssd1322_window_is_three_commands_with_data_framed_args() {
        let mut bus = RecordingBus::default();
        Variant::Ssd1322
            .begin_window(&mut bus, 2, 5, 9, 21)
            .unwrap();

        assert_eq!(
            bus.events,
            vec![
                Event::Line(DataLine::Command),
                Event::Write(vec![Cmd::SET_COLUMN]),
                Event::Line(DataLine::Data),
                Event::Write(vec![0x1E, 0x25]),
                Event::Line(DataLine::Command),
                Event::Write(vec![Cmd::SET_ROW]),
                Event::Line(DataLine::Data),
                Event::Write(vec![5, 21]),
                Event::Line(DataLine::Command),
                Event::Write(vec![Cmd::WRITE_RAM]),
            ]
        );
    }

    #[test]
    fn ssd1322_continue_row_is_silent() {
        let mut bus = RecordingBus::default();
        Variant::Ssd1322.continue_row(&mut bus, 3, 7).unwrap();
        assert!(bus.events.is_empty());
    }

    #[test]
    fn ssh1122_window_is_silent() {
        let mut bus = RecordingBus::default();
        Variant::Ssh1122
            .begin_window(&mut bus, 0, 0, 63, 64)
            .unwrap();
        assert!(bus.events.is_empty());
    }

    #[test]
    fn ssh1122_continue_row_addresses_row_and_column_nibbles() {
        let mut bus = RecordingBus::default();
        // column unit 10 -> byte column 20 = 0x14
        Variant::Ssh1122.continue_row(&mut bus, 10, 33).unwrap();

        assert_eq!(
            bus.events,
            vec![
                Event::Line(DataLine::Command),
                Event::Write(vec![SshCmd::SET_ROW]),
                Event::Line(DataLine::Command),
                Event::Write(vec![33]),
                Event::Line(DataLine::Command),
                Event::Write(vec![0x11]),
                Event::Line(DataLine::Command),
                Event::Write(vec![0x04]),
            ]
        );
    }

    #[test]
    fn only_the_windowed_controller_widens() {
        assert!(Variant::Ssd1322.widens_to_full_width());
        assert!(!Variant::Ssh1122.widens_to_full_width());
    }
}
