use super::{buffer_len, Framebuffer};
use crate::cmd::Cmd;
use crate::driver::InitStep;
use crate::error::Error;
use crate::flag::Flag;

/// Display width for the 3.12in panel
pub const WIDTH: u16 = 256;
/// Display height for the 3.12in panel
pub const HEIGHT: u16 = 64;

/// Framebuffer sized for this panel
pub type Display256x64 = Framebuffer<{ buffer_len(WIDTH as usize, HEIGHT as usize) }>;

/// Create an all black framebuffer for this panel
pub fn framebuffer() -> Result<Display256x64, Error> {
    Framebuffer::new(WIDTH, HEIGHT)
}

/// Power-up sequence for the 256x64 SSD1322 panel
pub const INIT_SEQUENCE: &[InitStep] = &[
    InitStep::CmdData(Cmd::COMMAND_LOCK, &[Flag::COMMAND_UNLOCK]),
    InitStep::Cmd(Cmd::DISPLAY_OFF),
    InitStep::CmdData(Cmd::CLOCK_DIVIDER, &[0x91]),
    // 1/64 duty
    InitStep::CmdData(Cmd::MUX_RATIO, &[0x3F]),
    InitStep::CmdData(Cmd::SET_DISPLAY_OFFSET, &[0x00]),
    InitStep::CmdData(Cmd::SET_START_LINE, &[0x00]),
    InitStep::CmdData(
        Cmd::SEG_REMAP,
        &[Flag::REMAP_NIBBLE_COM_REVERSE, Flag::REMAP_DUAL_COM],
    ),
    InitStep::CmdData(Cmd::SET_GPIO, &[Flag::GPIO_INPUT_DISABLED]),
    InitStep::CmdData(Cmd::FUNCTION_SELECT, &[Flag::VDD_INTERNAL]),
    InitStep::CmdData(
        Cmd::DISPLAY_ENHANCE_A,
        &[Flag::VSL_EXTERNAL, Flag::ENHANCED_LOW_GS],
    ),
    InitStep::CmdData(Cmd::CONTRAST_CURRENT, &[0x80]),
    InitStep::CmdData(Cmd::MASTER_CURRENT, &[Flag::MASTER_CURRENT_FULL]),
    InitStep::Cmd(Cmd::SELECT_DEFAULT_GRAYSCALE),
    InitStep::CmdData(Cmd::PHASE_LENGTH, &[0xE2]),
    InitStep::CmdData(
        Cmd::DISPLAY_ENHANCE_B,
        &[Flag::DISPLAY_ENHANCE_B_NORMAL, Flag::DISPLAY_ENHANCE_B_RESERVED],
    ),
    // 0.6 x VCC
    InitStep::CmdData(Cmd::PRECHARGE_VOLTAGE, &[0x1F]),
    InitStep::CmdData(Cmd::SECOND_PRECHARGE, &[0x08]),
    // 0.86 x VCC
    InitStep::CmdData(Cmd::SET_VCOMH, &[0x07]),
    InitStep::Cmd(Cmd::NORMAL_DISPLAY),
    InitStep::Cmd(Cmd::EXIT_PARTIAL_DISPLAY),
    InitStep::DelayMs(100),
    InitStep::Cmd(Cmd::DISPLAY_ON),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::displays::GrayDisplay;

    #[test]
    fn framebuffer_matches_panel() {
        let display = framebuffer().unwrap();
        assert_eq!(display.buffer().len(), 128 * 64);
        assert_eq!((display.width(), display.height()), (WIDTH, HEIGHT));
    }

    #[test]
    fn sequence_ends_with_settle_and_power_on() {
        let tail = &INIT_SEQUENCE[INIT_SEQUENCE.len() - 2..];
        assert!(matches!(tail[0], InitStep::DelayMs(100)));
        assert!(matches!(tail[1], InitStep::Cmd(Cmd::DISPLAY_ON)));
    }
}
