//! Driver for SSD1322 / SSH1122 grayscale OLED controllers
pub use display_interface::DisplayError;

use embedded_hal::delay::DelayNs;
use log::{debug, trace};

use crate::config::Config;
use crate::displays::GrayDisplay;
use crate::flush::{FlushPlan, TransferMode};
use crate::interface::DisplayBus;
use crate::variant::Variant;

/// Steps that a panel init sequence can contain.
/// Keep variants minimal and serializable as static arrays in display modules.
#[derive(Clone, Copy, Debug)]
pub enum InitStep {
    /// Send a bare command byte
    Cmd(u8),
    /// Send a command with argument bytes, framed per controller
    CmdData(u8, &'static [u8]),
    /// Wait for the given number of milliseconds
    DelayMs(u8),
}

/// Hook the driver calls between transfers so the host can run housekeeping
/// (watchdog feeding, cooperative schedulers) during long flushes
pub trait Housekeeping {
    /// Give the host a chance to run
    fn yield_now(&mut self);
}

/// Housekeeping that does nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NoYield;

impl Housekeeping for NoYield {
    fn yield_now(&mut self) {}
}

impl<F: FnMut()> Housekeeping for F {
    fn yield_now(&mut self) {
        self()
    }
}

/// A configured controller behind a [`DisplayBus`]
pub struct Ssd1322<DI, Y = NoYield> {
    interface: DI,
    config: Config,
    /// Panel-specific init sequence, the variant's default unless overridden.
    init_sequence: &'static [InitStep],
    housekeeping: Y,
}

impl<DI> Ssd1322<DI, NoYield>
where
    DI: DisplayBus,
{
    /// Create the driver; the bus is owned until [`release`](Self::release)
    pub fn new(interface: DI, config: Config) -> Self {
        debug!("creating new driver for {:?}", config.variant());
        Ssd1322 {
            interface,
            config,
            init_sequence: config.variant().init_sequence(),
            housekeeping: NoYield,
        }
    }
}

impl<DI, Y> Ssd1322<DI, Y>
where
    DI: DisplayBus,
    Y: Housekeeping,
{
    /// Replace the init sequence run by [`init`](Self::init)
    pub fn with_init_sequence(mut self, init_sequence: &'static [InitStep]) -> Self {
        self.init_sequence = init_sequence;
        self
    }

    /// Install a hook called before, between and after flush transfers
    pub fn with_housekeeping<H: Housekeeping>(self, housekeeping: H) -> Ssd1322<DI, H> {
        Ssd1322 {
            interface: self.interface,
            config: self.config,
            init_sequence: self.init_sequence,
            housekeeping,
        }
    }

    /// Controller variant this driver speaks
    pub fn variant(&self) -> Variant {
        self.config.variant()
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Direct access to the bus, e.g. for panel-specific commands
    pub fn interface_mut(&mut self) -> &mut DI {
        &mut self.interface
    }

    /// Give the bus back
    pub fn release(self) -> DI {
        self.interface
    }

    /// Optionally hard reset, then run the init sequence
    ///
    /// The built-in sequences end with the settling delay and display on.
    /// When several panels share one reset line only the first should pass
    /// `reset = true`.
    pub fn init(&mut self, reset: bool, delay: &mut impl DelayNs) -> Result<(), DisplayError> {
        let variant = self.variant();
        debug!("powering up {:?} (reset: {})", variant, reset);

        if reset {
            self.interface.hard_reset(delay)?;
        }

        for step in self.init_sequence {
            trace!("init step: {:?}", step);
            match *step {
                InitStep::Cmd(c) => self.interface.cmd(c)?,
                InitStep::CmdData(c, d) => variant.send(&mut self.interface, c, d)?,
                InitStep::DelayMs(ms) => delay.delay_ms(u32::from(ms)),
            }
        }
        debug!("init sequence complete");
        Ok(())
    }

    /// Send the dirty part of `display` to the panel
    ///
    /// The dirty window is taken before anything is written, so it is empty
    /// afterwards even if the bus fails. An empty window produces no bus
    /// traffic at all.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), DisplayError>
    where
        D: GrayDisplay + ?Sized,
    {
        self.housekeeping.yield_now();

        let Some(window) = display.take_dirty() else {
            trace!("dirty window is empty, writing nothing");
            return Ok(());
        };

        let variant = self.variant();
        let plan = FlushPlan::new(
            variant,
            self.config.widen_threshold(),
            window,
            display.width(),
            display.height(),
        );
        debug!(
            "flushing {:?}: columns {}-{}, rows {}-{}, {:?} ({} transfers)",
            window,
            plan.start_column,
            plan.end_column,
            plan.first_row,
            plan.end_row,
            plan.mode,
            match plan.mode {
                TransferMode::Contiguous => 1,
                TransferMode::RowWise => plan.transfer_count(),
            }
        );

        variant.begin_window(
            &mut self.interface,
            plan.start_column,
            plan.first_row,
            plan.end_column,
            plan.end_row,
        )?;

        let buffer = display.buffer();
        match plan.mode {
            TransferMode::Contiguous => {
                let range = plan.contiguous_range();
                match buffer.get(range.clone()) {
                    Some(bytes) => self.interface.data(bytes)?,
                    None => debug!(
                        "bytes {:?} outside the {} byte buffer, nothing sent",
                        range,
                        buffer.len()
                    ),
                }
            }
            TransferMode::RowWise => {
                for row in plan.rows() {
                    let Some(bytes) = buffer.get(plan.row_range(row)) else {
                        debug!(
                            "row {} outside the {} byte buffer, flush cut short",
                            row,
                            buffer.len()
                        );
                        break;
                    };
                    variant.continue_row(&mut self.interface, plan.start_column, row)?;
                    trace!("row {}: {} bytes", row, bytes.len());
                    self.interface.data(bytes)?;
                    self.housekeeping.yield_now();
                }
            }
        }

        self.housekeeping.yield_now();
        Ok(())
    }

    /// Set the contrast / brightness, `0x00..=0xFF`
    pub fn set_contrast(&mut self, level: u8) -> Result<(), DisplayError> {
        debug!("setting contrast to {}", level);
        let variant = self.variant();
        variant.send(&mut self.interface, variant.contrast(), &[level])
    }

    /// Switch between inverted and normal display
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), DisplayError> {
        debug!("setting inverted: {}", inverted);
        let variant = self.variant();
        let command = if inverted {
            variant.invert()
        } else {
            variant.normal()
        };
        self.interface.cmd(command)
    }

    /// Turn the panel on or off; RAM contents are kept
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        debug!("setting display on: {}", on);
        let variant = self.variant();
        let command = if on {
            variant.display_on()
        } else {
            variant.display_off()
        };
        self.interface.cmd(command)
    }
}
