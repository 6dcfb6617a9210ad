//! SH1107 controller protocol
//!
//! Sequences the SH1107 command set into the state the panel needs:
//! the fixed power-on init sequence, power and contrast control, and
//! the page/column addressing that precedes every RAM write.
//!
//! # Init sequence
//!
//! Calibrated for the 128x64 FeatherWing panel. Order matters: the
//! oscillator, pre-charge, VCOM and charge pump must all be configured
//! before display-on, otherwise the panel shows garbage or undefined
//! contrast.
//!
//! ```text
//! AE        display off (sleep)
//! DC 00     start line 0
//! 81 cc     contrast (from DisplayConfig, default 0x4F)
//! 20        page addressing mode
//! A0        segment remap normal
//! C0        COM scan ascending
//! A8 7F     multiplex ratio 128
//! D3 60     display offset 0x60
//! D5 51     clock divide / oscillator
//! D9 22     pre-charge 2 DCLK / dis-charge 2 DCLK
//! DB 35     VCOM deselect level
//! B0        page 0
//! A4        follow RAM
//! A6        normal (non-inverse) display
//! AD 8B     charge pump on
//! AF        display on
//! ```

use sh1107_core::{DisplayConfig, Event, State};
use sh1107_hal::I2cBus;

use super::commands::{AddressingMode, Command, DC_DC_ON};
use crate::error::Error;
use crate::transport::I2cTransport;

/// Column where logical column 0 starts in controller RAM
///
/// Controller calibration for this panel; the row misalignment is
/// absorbed by the display offset in the init sequence instead.
pub const COLUMN_OFFSET: u8 = 0x00;

/// Multiplex ratio parameter (128 rows)
const MUX_RATIO: u8 = 0x7F;

/// Display offset parameter
const DISPLAY_OFFSET: u8 = 0x60;

/// Clock divide ratio / oscillator frequency parameter
const CLOCK_DIVIDE: u8 = 0x51;

/// Pre-charge / dis-charge period parameter
const PRECHARGE: u8 = 0x22;

/// VCOM deselect level parameter
const VCOM_DESELECT: u8 = 0x35;

/// Build the power-on init sequence for a given contrast
pub const fn init_sequence(contrast: u8) -> [Command; 16] {
    [
        Command::DisplayOn(false),
        Command::StartLine(0),
        Command::Contrast(contrast),
        Command::AddressingMode(AddressingMode::Page),
        Command::SegmentRemap(false),
        Command::ComScanReversed(false),
        Command::MultiplexRatio(MUX_RATIO),
        Command::DisplayOffset(DISPLAY_OFFSET),
        Command::ClockDivide(CLOCK_DIVIDE),
        Command::PreCharge(PRECHARGE),
        Command::VcomDeselect(VCOM_DESELECT),
        Command::PageAddress(0),
        Command::EntireDisplayOn(false),
        Command::Inverse(false),
        Command::DcDc(DC_DC_ON),
        Command::DisplayOn(true),
    ]
}

/// SH1107 command-level driver
///
/// # Lifecycle
///
/// 1. [`Controller::new()`] - no bus traffic.
/// 2. [`Controller::initialize()`] - probe, then the init sequence.
/// 3. Addressed writes ([`Controller::write_page()`]) and power/contrast
///    control.
pub struct Controller<B> {
    transport: I2cTransport<B>,
    contrast: u8,
    state: State,
}

impl<B: I2cBus> Controller<B> {
    /// Create a controller for the panel described by `config`
    pub fn new(bus: B, config: DisplayConfig) -> Self {
        Self {
            transport: I2cTransport::new(bus, config.address),
            contrast: config.contrast,
            state: State::Uninitialized,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Last contrast value transmitted (or to be transmitted by init)
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Check whether the panel answers on the bus
    ///
    /// Only the address phase goes out; no command is sent.
    pub fn probe(&mut self) -> bool {
        self.transport.probe()
    }

    /// Run the power-on init sequence
    ///
    /// # Errors
    ///
    /// * [`Error::NotDetected`] if the probe fails. No command is sent
    ///   and the state becomes `NotDetected`; calling again retries.
    /// * [`Error::Transport`] if a command write fails. A controller that
    ///   was `Ready` drops to `Ready { display_on: false }` once the
    ///   display-off command has been sent; otherwise the state is
    ///   unchanged.
    pub fn initialize(&mut self) -> Result<(), Error<B::Error>> {
        if !self.probe() {
            #[cfg(feature = "defmt")]
            defmt::warn!("SH1107 not detected at {=u8:#x}", self.transport.address());
            self.state = self.state.transition(Event::ProbeFailed);
            return Err(Error::NotDetected);
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("SH1107 init, contrast {=u8:#x}", self.contrast);

        for (sent, command) in init_sequence(self.contrast).into_iter().enumerate() {
            if let Err(e) = self.send(command) {
                // Display-off goes out first, so a re-init that fails
                // later leaves the panel asleep
                if sent > 0 {
                    self.state = self.state.transition(Event::DisplayOff);
                }
                return Err(e);
            }
        }

        self.state = self.state.transition(Event::InitComplete);

        #[cfg(feature = "defmt")]
        defmt::debug!("SH1107 ready");

        Ok(())
    }

    /// Power the panel on or put it to sleep (RAM is retained)
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<B::Error>> {
        self.send(Command::DisplayOn(on))?;
        let event = if on { Event::DisplayOn } else { Event::DisplayOff };
        self.state = self.state.transition(event);
        Ok(())
    }

    /// Set contrast; every value 0-255 is transmitted unchanged
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<B::Error>> {
        self.send(Command::Contrast(contrast))?;
        self.contrast = contrast;
        Ok(())
    }

    /// Hardware inverse display
    ///
    /// Independent of the renderer's inversion flag: this flips how the
    /// panel shows RAM, not what is stored.
    pub fn set_display_inverted(&mut self, inverted: bool) -> Result<(), Error<B::Error>> {
        self.send(Command::Inverse(inverted))
    }

    /// Select the RAM page for the next data write
    pub fn select_page(&mut self, page: u8) -> Result<(), Error<B::Error>> {
        self.send(Command::PageAddress(page))
    }

    /// Point the column pointer at logical column `column`
    ///
    /// [`COLUMN_OFFSET`] is added; lower nibble goes first.
    pub fn set_column_address(&mut self, column: u8) -> Result<(), Error<B::Error>> {
        let column = column.wrapping_add(COLUMN_OFFSET);
        self.send(Command::LowerColumn(column))?;
        self.send(Command::UpperColumn(column))
    }

    /// Address a page at column 0 and write one page row of pixels
    pub fn write_page(&mut self, page: u8, data: &[u8]) -> Result<(), Error<B::Error>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("SH1107 page {=u8}, {=usize} bytes", page, data.len());

        self.select_page(page)?;
        self.set_column_address(0)?;
        self.transport.write_data(data)?;
        Ok(())
    }

    /// Send one command, each byte as its own command register write
    pub fn send(&mut self, command: Command) -> Result<(), Error<B::Error>> {
        for byte in command.encode() {
            self.transport.write_command(byte)?;
        }
        Ok(())
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.transport.release()
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &I2cTransport<B> {
        &self.transport
    }

    #[cfg(test)]
    pub(crate) fn transport_mut(&mut self) -> &mut I2cTransport<B> {
        &mut self.transport
    }
}
