//! Bus transaction primitive used by the driver
//!
//! The driver never touches pins or the SPI peripheral directly. It talks to a
//! [`DisplayBus`], which only knows how to drive the data/command line and
//! clock bytes out. [`SpiDisplayInterface`] is the `embedded-hal` backed
//! implementation; tests substitute a recording bus.

use core::convert::Infallible;

use display_interface::DisplayError;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal::spi::SpiDevice;

/// Level of the data/command select line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataLine {
    /// Line held low, bytes are interpreted as commands
    Command,
    /// Line pulled high, bytes are interpreted as data
    Data,
}

/// Byte-level access to a display controller
pub trait DisplayBus {
    /// Drive the data/command select line
    fn set_data_line(&mut self, line: DataLine) -> Result<(), DisplayError>;

    /// Clock bytes out under the current data/command level
    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError>;

    /// Toggle the reset line, if there is one
    fn hard_reset(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        let _ = delay;
        Ok(())
    }

    /// Send a single command byte
    fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        self.set_data_line(DataLine::Command)?;
        self.write(&[command])
    }

    /// Send a command followed by argument bytes framed with `framing`
    fn cmd_with_args(
        &mut self,
        command: u8,
        args: &[u8],
        framing: DataLine,
    ) -> Result<(), DisplayError> {
        self.cmd(command)?;
        if args.is_empty() {
            return Ok(());
        }
        self.set_data_line(framing)?;
        self.write(args)
    }

    /// Send pixel data
    fn data(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.set_data_line(DataLine::Data)?;
        self.write(bytes)
    }
}

impl<T: DisplayBus + ?Sized> DisplayBus for &mut T {
    fn set_data_line(&mut self, line: DataLine) -> Result<(), DisplayError> {
        T::set_data_line(self, line)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        T::write(self, bytes)
    }

    fn hard_reset(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        T::hard_reset(self, delay)
    }

    fn cmd(&mut self, command: u8) -> Result<(), DisplayError> {
        T::cmd(self, command)
    }

    fn cmd_with_args(
        &mut self,
        command: u8,
        args: &[u8],
        framing: DataLine,
    ) -> Result<(), DisplayError> {
        T::cmd_with_args(self, command, args, framing)
    }

    fn data(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        T::data(self, bytes)
    }
}

/// Placeholder for panels whose reset line is not wired to the host
pub struct NoResetPin;

impl ErrorType for NoResetPin {
    type Error = Infallible;
}

impl OutputPin for NoResetPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// 4-wire SPI connection: SPI device (owning chip select), D/C and reset pins
pub struct SpiDisplayInterface<SPI, DC, RST> {
    spi: SPI,
    dc: DC,
    rst: Option<RST>,
}

impl<SPI, DC> SpiDisplayInterface<SPI, DC, NoResetPin>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create an interface for a panel without a reset line
    pub fn without_reset(spi: SPI, dc: DC) -> Self {
        Self {
            spi,
            dc,
            rst: None,
        }
    }
}

impl<SPI, DC, RST> SpiDisplayInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Reset low and high times
    pub const RESET_DELAY_MS: u32 = 10;

    /// Create an interface with a dedicated reset line
    pub fn new(spi: SPI, dc: DC, rst: RST) -> Self {
        Self {
            spi,
            dc,
            rst: Some(rst),
        }
    }

    /// Give the SPI device and pins back
    pub fn release(self) -> (SPI, DC, Option<RST>) {
        (self.spi, self.dc, self.rst)
    }
}

impl<SPI, DC, RST> DisplayBus for SpiDisplayInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    fn set_data_line(&mut self, line: DataLine) -> Result<(), DisplayError> {
        match line {
            DataLine::Command => self.dc.set_low(),
            DataLine::Data => self.dc.set_high(),
        }
        .map_err(|_| DisplayError::DCError)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.spi
            .write(bytes)
            .map_err(|_| DisplayError::BusWriteError)
    }

    fn hard_reset(&mut self, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        let Some(rst) = self.rst.as_mut() else {
            return Ok(());
        };
        rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(Self::RESET_DELAY_MS);
        rst.set_low().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(Self::RESET_DELAY_MS);
        rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(Self::RESET_DELAY_MS);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };
    use embedded_hal_mock::eh1::spi::{Mock as SpiMock, Transaction as SpiTransaction};

    fn spi_device_write(data: &[u8]) -> [SpiTransaction<u8>; 3] {
        [
            SpiTransaction::transaction_start(),
            SpiTransaction::write_vec(data.to_vec()),
            SpiTransaction::transaction_end(),
        ]
    }

    #[test]
    fn data_framed_arguments_raise_dc() {
        let mut spi_txns = vec![];
        spi_txns.extend(spi_device_write(&[0x15]));
        spi_txns.extend(spi_device_write(&[0x1E, 0x25]));
        let mut spi = SpiMock::new(&spi_txns);
        let mut dc = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let mut rst = PinMock::new(&[]);

        let mut interface = SpiDisplayInterface::new(spi.clone(), dc.clone(), rst.clone());
        interface
            .cmd_with_args(0x15, &[0x1E, 0x25], DataLine::Data)
            .unwrap();

        spi.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn command_framed_arguments_keep_dc_low() {
        let mut spi_txns = vec![];
        spi_txns.extend(spi_device_write(&[0x81]));
        spi_txns.extend(spi_device_write(&[0x40]));
        let mut spi = SpiMock::new(&spi_txns);
        let mut dc = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::Low),
        ]);

        let mut interface = SpiDisplayInterface::without_reset(spi.clone(), dc.clone());
        interface
            .cmd_with_args(0x81, &[0x40], DataLine::Command)
            .unwrap();

        spi.done();
        dc.done();
    }

    #[test]
    fn bare_command_sends_no_argument_phase() {
        let mut spi = SpiMock::new(&spi_device_write(&[0xAF]));
        let mut dc = PinMock::new(&[PinTransaction::set(PinState::Low)]);

        let mut interface = SpiDisplayInterface::without_reset(spi.clone(), dc.clone());
        interface.cmd_with_args(0xAF, &[], DataLine::Data).unwrap();

        spi.done();
        dc.done();
    }

    #[test]
    fn hard_reset_pulses_reset_line() {
        let mut spi = SpiMock::new(&[]);
        let mut dc = PinMock::new(&[]);
        let mut rst = PinMock::new(&[
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);

        let mut interface = SpiDisplayInterface::new(spi.clone(), dc.clone(), rst.clone());
        interface.hard_reset(&mut NoopDelay::new()).unwrap();

        spi.done();
        dc.done();
        rst.done();
    }

    #[test]
    fn hard_reset_without_pin_is_a_no_op() {
        let mut spi = SpiMock::new(&[]);
        let mut dc = PinMock::new(&[]);

        let mut interface = SpiDisplayInterface::without_reset(spi.clone(), dc.clone());
        interface.hard_reset(&mut NoopDelay::new()).unwrap();

        spi.done();
        dc.done();
    }
}
