pub struct Flag;
#[allow(dead_code)]
impl Flag {
    pub const COMMAND_UNLOCK: u8 = 0x12;
    pub const COMMAND_LOCK: u8 = 0x16;
    // horizontal increment, nibble re-map, scan COM[N-1] to COM0
    pub const REMAP_NIBBLE_COM_REVERSE: u8 = 0x14;
    pub const REMAP_DUAL_COM: u8 = 0x11;
    pub const GPIO_INPUT_DISABLED: u8 = 0x00;
    pub const VDD_INTERNAL: u8 = 0x01;
    pub const VSL_EXTERNAL: u8 = 0xA0;
    pub const ENHANCED_LOW_GS: u8 = 0xFD;
    pub const DISPLAY_ENHANCE_B_NORMAL: u8 = 0x82;
    pub const DISPLAY_ENHANCE_B_RESERVED: u8 = 0x20;
    pub const MASTER_CURRENT_FULL: u8 = 0x0F;
    pub const DCDC_ON: u8 = 0x81;
    pub const DCDC_OFF: u8 = 0x80;
}
