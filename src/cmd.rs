/// SSD1322 command op-codes
pub struct Cmd;
#[allow(dead_code)]
impl Cmd {
    pub const ENABLE_GRAYSCALE_TABLE: u8 = 0x00;
    pub const SET_COLUMN: u8 = 0x15;
    pub const WRITE_RAM: u8 = 0x5C;
    pub const SET_ROW: u8 = 0x75;
    pub const SEG_REMAP: u8 = 0xA0;
    pub const SET_START_LINE: u8 = 0xA1;
    pub const SET_DISPLAY_OFFSET: u8 = 0xA2;
    pub const DISPLAY_ALL_OFF: u8 = 0xA4;
    pub const DISPLAY_ALL_ON: u8 = 0xA5;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const EXIT_PARTIAL_DISPLAY: u8 = 0xA9;
    pub const FUNCTION_SELECT: u8 = 0xAB;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const PHASE_LENGTH: u8 = 0xB1;
    pub const CLOCK_DIVIDER: u8 = 0xB3;
    pub const DISPLAY_ENHANCE_A: u8 = 0xB4;
    pub const SET_GPIO: u8 = 0xB5;
    pub const SECOND_PRECHARGE: u8 = 0xB6;
    pub const SELECT_DEFAULT_GRAYSCALE: u8 = 0xB9;
    pub const PRECHARGE_VOLTAGE: u8 = 0xBB;
    pub const SET_VCOMH: u8 = 0xBE;
    pub const CONTRAST_CURRENT: u8 = 0xC1;
    pub const MASTER_CURRENT: u8 = 0xC7;
    pub const MUX_RATIO: u8 = 0xCA;
    pub const DISPLAY_ENHANCE_B: u8 = 0xD1;
    pub const COMMAND_LOCK: u8 = 0xFD;
}

/// SSH1122 command op-codes
///
/// Several of these carry their argument in the low bits of the op-code
/// itself (column nibbles, start line, discharge level).
pub struct SshCmd;
#[allow(dead_code)]
impl SshCmd {
    pub const COLUMN_LOW: u8 = 0x00;
    pub const COLUMN_HIGH: u8 = 0x10;
    pub const DISCHARGE_LEVEL: u8 = 0x30;
    pub const START_LINE: u8 = 0x40;
    pub const CONTRAST: u8 = 0x81;
    pub const SEG_REMAP_NORMAL: u8 = 0xA0;
    pub const SEG_REMAP_REVERSE: u8 = 0xA1;
    pub const DISPLAY_ALL_OFF: u8 = 0xA4;
    pub const DISPLAY_ALL_ON: u8 = 0xA5;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERT_DISPLAY: u8 = 0xA7;
    pub const MUX_RATIO: u8 = 0xA8;
    pub const DCDC_CONTROL: u8 = 0xAD;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_ROW: u8 = 0xB0;
    pub const SCAN_NORMAL: u8 = 0xC0;
    pub const SCAN_REVERSE: u8 = 0xC8;
    pub const DISPLAY_OFFSET: u8 = 0xD3;
    pub const CLOCK_DIVIDER: u8 = 0xD5;
    pub const PRECHARGE_PERIOD: u8 = 0xD9;
    pub const VCOMH: u8 = 0xDB;
    pub const VSEGM: u8 = 0xDC;
}
