use super::{buffer_len, Framebuffer};
use crate::cmd::SshCmd;
use crate::driver::InitStep;
use crate::error::Error;
use crate::flag::Flag;

/// Display width
pub const WIDTH: u16 = 256;
/// Display height
pub const HEIGHT: u16 = 64;

/// Framebuffer sized for this panel
pub type Display256x64 = Framebuffer<{ buffer_len(WIDTH as usize, HEIGHT as usize) }>;

/// Create an all black framebuffer for this panel
pub fn framebuffer() -> Result<Display256x64, Error> {
    Framebuffer::new(WIDTH, HEIGHT)
}

/// Power-up sequence for the 256x64 SSH1122 panel
///
/// Arguments of `CmdData` steps go out in command framing on this controller.
pub const INIT_SEQUENCE: &[InitStep] = &[
    InitStep::Cmd(SshCmd::DISPLAY_OFF),
    InitStep::CmdData(SshCmd::CLOCK_DIVIDER, &[0x50]),
    InitStep::CmdData(SshCmd::MUX_RATIO, &[0x3F]),
    InitStep::CmdData(SshCmd::DISPLAY_OFFSET, &[0x00]),
    InitStep::Cmd(SshCmd::START_LINE),
    InitStep::CmdData(SshCmd::DCDC_CONTROL, &[Flag::DCDC_ON]),
    InitStep::Cmd(SshCmd::SEG_REMAP_NORMAL),
    InitStep::Cmd(SshCmd::SCAN_NORMAL),
    InitStep::CmdData(SshCmd::CONTRAST, &[0x80]),
    InitStep::CmdData(SshCmd::PRECHARGE_PERIOD, &[0x22]),
    InitStep::CmdData(SshCmd::VCOMH, &[0x35]),
    InitStep::CmdData(SshCmd::VSEGM, &[0x35]),
    InitStep::Cmd(SshCmd::DISCHARGE_LEVEL),
    InitStep::Cmd(SshCmd::DISPLAY_ALL_OFF),
    InitStep::Cmd(SshCmd::NORMAL_DISPLAY),
    InitStep::DelayMs(100),
    InitStep::Cmd(SshCmd::DISPLAY_ON),
];
