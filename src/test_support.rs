//! Recording bus used by the unit tests

use display_interface::DisplayError;

use crate::interface::{DataLine, DisplayBus};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Line(DataLine),
    Write(Vec<u8>),
    /// Pixel data sent through `DisplayBus::data`
    Pixels(Vec<u8>),
}

#[derive(Default)]
pub struct RecordingBus {
    pub events: Vec<Event>,
    pub resets: usize,
}

impl RecordingBus {
    /// Every byte clocked out while D/C was low
    pub fn command_bytes(&self) -> Vec<u8> {
        let mut line = DataLine::Command;
        let mut out = vec![];
        for event in &self.events {
            match event {
                Event::Line(l) => line = *l,
                Event::Write(bytes) if line == DataLine::Command => out.extend_from_slice(bytes),
                _ => {}
            }
        }
        out
    }

    /// Bytes written with D/C high that were not pixel data, i.e. command
    /// arguments under data framing
    pub fn data_framed_args(&self) -> Vec<u8> {
        let mut line = DataLine::Command;
        let mut out = vec![];
        for event in &self.events {
            match event {
                Event::Line(l) => line = *l,
                Event::Write(bytes) if line == DataLine::Data => out.extend_from_slice(bytes),
                _ => {}
            }
        }
        out
    }

    pub fn pixel_transfers(&self) -> Vec<&[u8]> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Event::Pixels(bytes) => Some(bytes.as_slice()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl DisplayBus for RecordingBus {
    fn set_data_line(&mut self, line: DataLine) -> Result<(), DisplayError> {
        self.events.push(Event::Line(line));
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.events.push(Event::Write(bytes.to_vec()));
        Ok(())
    }

    fn hard_reset(
        &mut self,
        _delay: &mut impl embedded_hal::delay::DelayNs,
    ) -> Result<(), DisplayError> {
        self.resets += 1;
        Ok(())
    }

    fn data(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.events.push(Event::Line(DataLine::Data));
        self.events.push(Event::Pixels(bytes.to_vec()));
        Ok(())
    }
}

/// Bus whose writes always fail
pub struct FailingBus;

impl DisplayBus for FailingBus {
    fn set_data_line(&mut self, _line: DataLine) -> Result<(), DisplayError> {
        Ok(())
    }

    fn write(&mut self, _bytes: &[u8]) -> Result<(), DisplayError> {
        Err(DisplayError::BusWriteError)
    }
}
