//! SH1107 command set
//!
//! Every command is one opcode byte, optionally followed by one
//! parameter byte. Both bytes go to the command register as separate
//! writes.

use heapless::Vec;

/// SH1107 command opcodes
pub mod cmd {
    /// Set lower column address nibble (OR with 0x0-0xF)
    pub const SET_LOW_COLUMN: u8 = 0x00;
    /// Set upper column address bits (OR with 0x0-0x7)
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    /// Page addressing mode
    pub const MEMORY_MODE_PAGE: u8 = 0x20;
    /// Vertical addressing mode
    pub const MEMORY_MODE_VERTICAL: u8 = 0x21;
    /// Contrast control (+1 byte)
    pub const SET_CONTRAST: u8 = 0x81;
    /// Segment remap: column 0 maps to SEG0
    pub const SEG_REMAP_NORMAL: u8 = 0xA0;
    /// Segment remap: column 0 maps to SEG127 (horizontal mirror)
    pub const SEG_REMAP_FLIPPED: u8 = 0xA1;
    /// Multiplex ratio (+1 byte, value = rows - 1)
    pub const SET_MUX_RATIO: u8 = 0xA8;
    /// Show RAM contents
    pub const ENTIRE_DISPLAY_RESUME: u8 = 0xA4;
    /// Light every pixel regardless of RAM
    pub const ENTIRE_DISPLAY_ON: u8 = 0xA5;
    /// Normal display (RAM bit 1 = lit)
    pub const SET_NORMAL: u8 = 0xA6;
    /// Inverse display (RAM bit 0 = lit)
    pub const SET_INVERSE: u8 = 0xA7;
    /// DC-DC converter control (+1 byte)
    pub const SET_DC_DC: u8 = 0xAD;
    /// Display off (sleep)
    pub const DISPLAY_OFF: u8 = 0xAE;
    /// Display on
    pub const DISPLAY_ON: u8 = 0xAF;
    /// Page address (OR with 0x0-0xF)
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    /// COM scan from COM0 upward
    pub const COM_SCAN_INC: u8 = 0xC0;
    /// COM scan from COM[N-1] downward (vertical mirror)
    pub const COM_SCAN_DEC: u8 = 0xC8;
    /// Display offset (+1 byte)
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    /// Clock divide ratio / oscillator frequency (+1 byte)
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    /// Pre-charge / dis-charge period (+1 byte)
    pub const SET_PRECHARGE: u8 = 0xD9;
    /// VCOM deselect level (+1 byte)
    pub const SET_VCOM_DESELECT: u8 = 0xDB;
    /// Display start line (+1 byte)
    pub const SET_START_LINE: u8 = 0xDC;
}

/// DC-DC parameter: built-in charge pump enabled
pub const DC_DC_ON: u8 = 0x8B;

/// DC-DC parameter: built-in charge pump disabled (external VPP)
pub const DC_DC_OFF: u8 = 0x8A;

/// Number of RAM pages the SH1107 addresses (128 rows)
pub const RAM_PAGES: u8 = 16;

/// Number of RAM columns the SH1107 addresses
pub const RAM_COLUMNS: u8 = 128;

/// Memory addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressingMode {
    /// Column pointer advances within a page
    Page,
    /// Page pointer advances within a column
    Vertical,
}

/// Typed SH1107 command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Power the panel on or put it to sleep
    DisplayOn(bool),
    /// First RAM row shown on the top line
    StartLine(u8),
    /// Contrast 0-255, sent as-is
    Contrast(u8),
    /// Memory addressing mode
    AddressingMode(AddressingMode),
    /// Mirror columns horizontally
    SegmentRemap(bool),
    /// Mirror rows vertically
    ComScanReversed(bool),
    /// Multiplex ratio, parameter is rows - 1
    MultiplexRatio(u8),
    /// Vertical shift of the display relative to RAM
    DisplayOffset(u8),
    /// Clock divide ratio and oscillator frequency
    ClockDivide(u8),
    /// Pre-charge and dis-charge periods
    PreCharge(u8),
    /// VCOM deselect level
    VcomDeselect(u8),
    /// DC-DC converter parameter ([`DC_DC_ON`] / [`DC_DC_OFF`])
    DcDc(u8),
    /// Light all pixels (`true`) or follow RAM (`false`)
    EntireDisplayOn(bool),
    /// Hardware inverse display
    Inverse(bool),
    /// Select RAM page for the next data write
    PageAddress(u8),
    /// Lower nibble of the column pointer
    LowerColumn(u8),
    /// Upper bits of the column pointer
    UpperColumn(u8),
}

impl Command {
    /// Encode into command register bytes
    pub fn encode(self) -> Vec<u8, 2> {
        let (opcode, param) = match self {
            Command::DisplayOn(true) => (cmd::DISPLAY_ON, None),
            Command::DisplayOn(false) => (cmd::DISPLAY_OFF, None),
            Command::StartLine(line) => (cmd::SET_START_LINE, Some(line & 0x7F)),
            Command::Contrast(value) => (cmd::SET_CONTRAST, Some(value)),
            Command::AddressingMode(AddressingMode::Page) => (cmd::MEMORY_MODE_PAGE, None),
            Command::AddressingMode(AddressingMode::Vertical) => (cmd::MEMORY_MODE_VERTICAL, None),
            Command::SegmentRemap(false) => (cmd::SEG_REMAP_NORMAL, None),
            Command::SegmentRemap(true) => (cmd::SEG_REMAP_FLIPPED, None),
            Command::ComScanReversed(false) => (cmd::COM_SCAN_INC, None),
            Command::ComScanReversed(true) => (cmd::COM_SCAN_DEC, None),
            Command::MultiplexRatio(ratio) => (cmd::SET_MUX_RATIO, Some(ratio & 0x7F)),
            Command::DisplayOffset(offset) => (cmd::SET_DISPLAY_OFFSET, Some(offset & 0x7F)),
            Command::ClockDivide(value) => (cmd::SET_CLOCK_DIV, Some(value)),
            Command::PreCharge(value) => (cmd::SET_PRECHARGE, Some(value)),
            Command::VcomDeselect(value) => (cmd::SET_VCOM_DESELECT, Some(value)),
            Command::DcDc(value) => (cmd::SET_DC_DC, Some(value)),
            Command::EntireDisplayOn(true) => (cmd::ENTIRE_DISPLAY_ON, None),
            Command::EntireDisplayOn(false) => (cmd::ENTIRE_DISPLAY_RESUME, None),
            Command::Inverse(false) => (cmd::SET_NORMAL, None),
            Command::Inverse(true) => (cmd::SET_INVERSE, None),
            Command::PageAddress(page) => (cmd::SET_PAGE_ADDR | (page & 0x0F), None),
            Command::LowerColumn(column) => (cmd::SET_LOW_COLUMN | (column & 0x0F), None),
            Command::UpperColumn(column) => (cmd::SET_HIGH_COLUMN | ((column >> 4) & 0x07), None),
        };

        let mut bytes = Vec::new();
        // Capacity is 2 and at most 2 bytes are pushed
        let _ = bytes.push(opcode);
        if let Some(param) = param {
            let _ = bytes.push(param);
        }
        bytes
    }
}
