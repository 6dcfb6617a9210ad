//! Framebuffer-owning SH1107 driver
//!
//! [`Sh1107`] is the API applications use: draw into the in-memory
//! buffer as often as needed, then [`flush()`](Sh1107::flush) it to the
//! panel. Drawing never touches the bus; only `init`, `flush`, `clear`
//! and the power/contrast calls do.

use sh1107_core::{Color, DisplayConfig, Font, State, TextRenderer};
use sh1107_hal::I2cBus;

use super::commands::{RAM_COLUMNS, RAM_PAGES};
use super::controller::Controller;
use crate::error::Error;

/// SH1107 driver for a `WIDTH` x `PAGES * 8` panel (128x64 by default)
///
/// `WIDTH` may not exceed the controller's 128 RAM columns and `PAGES`
/// its 16 RAM pages; larger sizes fail to compile.
///
/// # Lifecycle
///
/// 1. [`Sh1107::new()`] - constructs the driver without any bus traffic.
/// 2. [`Sh1107::init()`] - probes the panel, sends the init sequence and
///    blanks the screen.
/// 3. Draw with [`fill`](Sh1107::fill), [`set_pixel`](Sh1107::set_pixel),
///    [`put_char`](Sh1107::put_char), [`put_string`](Sh1107::put_string).
/// 4. [`Sh1107::flush()`] - transfers the framebuffer page by page.
///
/// Not synchronized: share it between execution contexts only behind a
/// mutex that covers the whole driver, so one flush's command and data
/// writes never interleave with another operation.
pub struct Sh1107<B, const WIDTH: usize = 128, const PAGES: usize = 8> {
    controller: Controller<B>,
    renderer: TextRenderer<WIDTH, PAGES>,
}

impl<B, const W: usize, const P: usize> Sh1107<B, W, P>
where
    B: I2cBus,
{
    /// Construct an uninitialised driver
    ///
    /// No bus traffic is generated. Call [`init()`](Self::init) before
    /// flushing.
    pub fn new(bus: B, config: DisplayConfig) -> Self {
        const {
            assert!(W <= RAM_COLUMNS as usize, "WIDTH exceeds SH1107 RAM columns");
            assert!(P <= RAM_PAGES as usize, "PAGES exceeds SH1107 RAM pages");
        }

        Self {
            controller: Controller::new(bus, config),
            renderer: TextRenderer::new(),
        }
    }

    /// Probe and initialise the panel, then show a blank screen
    ///
    /// Resets the text cursor to (0, 0). May be called again after a
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotDetected`] if the panel does not answer (no
    /// command is sent), or [`Error::Transport`] on a bus failure.
    pub fn init(&mut self) -> Result<(), Error<B::Error>> {
        self.controller.initialize()?;
        self.renderer.fill(Color::Off);
        self.flush()?;
        self.renderer.set_cursor(0, 0);
        Ok(())
    }

    /// Check whether [`init()`](Self::init) has succeeded
    pub fn is_initialized(&self) -> bool {
        self.controller.state().is_ready()
    }

    /// Controller lifecycle state
    pub fn state(&self) -> State {
        self.controller.state()
    }

    /// Fill the framebuffer with one color (no bus traffic)
    pub fn fill(&mut self, color: Color) {
        self.renderer.fill(color);
    }

    /// Draw one pixel; out-of-bounds coordinates are ignored
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) {
        self.renderer.set_pixel(x, y, color);
    }

    /// Draw one character at the cursor and advance the cursor
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the glyph does not fit; nothing
    /// is drawn and the cursor does not move.
    pub fn put_char<F: Font>(
        &mut self,
        ch: char,
        font: &F,
        color: Color,
    ) -> Result<char, Error<B::Error>> {
        Ok(self.renderer.put_char(ch, font, color)?)
    }

    /// Draw a string at the cursor, without wrapping
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] with the first character that did
    /// not fit. Characters before it stay drawn.
    pub fn put_string<F: Font>(
        &mut self,
        text: &str,
        font: &F,
        color: Color,
    ) -> Result<(), Error<B::Error>> {
        Ok(self.renderer.put_string(text, font, color)?)
    }

    /// Move the text cursor
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.renderer.set_cursor(x, y);
    }

    /// Current text cursor
    pub fn cursor(&self) -> (u16, u16) {
        self.renderer.cursor()
    }

    /// Swap On/Off for subsequent draws (pixels already drawn keep
    /// their bits)
    pub fn set_inverted(&mut self, inverted: bool) {
        self.renderer.set_inverted(inverted);
    }

    /// Blank the framebuffer and flush it
    pub fn clear(&mut self) -> Result<(), Error<B::Error>> {
        self.renderer.fill(Color::Off);
        self.flush()
    }

    /// Transfer the framebuffer to the panel
    ///
    /// For each page: page select, column address (lower then upper
    /// nibble), then one data write of exactly `WIDTH` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] before a successful init (no
    /// bus traffic), or [`Error::Transport`] on the first failed write;
    /// later pages are not sent.
    pub fn flush(&mut self) -> Result<(), Error<B::Error>> {
        if !self.is_initialized() {
            return Err(Error::NotInitialized);
        }

        for (index, page) in self.renderer.framebuffer().pages().enumerate() {
            self.controller.write_page(index as u8, page)?;
        }
        Ok(())
    }

    /// Set panel contrast (0-255, transmitted as-is)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error<B::Error>> {
        self.ensure_ready()?;
        self.controller.set_contrast(contrast)
    }

    /// Power the panel on or put it to sleep
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error<B::Error>> {
        self.ensure_ready()?;
        self.controller.set_display_on(on)
    }

    /// Hardware inverse display (RAM contents are unchanged)
    pub fn set_display_inverted(&mut self, inverted: bool) -> Result<(), Error<B::Error>> {
        self.ensure_ready()?;
        self.controller.set_display_inverted(inverted)
    }

    /// Check if the panel is powered on
    pub fn is_display_on(&self) -> bool {
        self.controller.state().is_display_on()
    }

    /// Read-only view of the renderer (framebuffer, cursor, inversion)
    pub fn renderer(&self) -> &TextRenderer<W, P> {
        &self.renderer
    }

    /// Renderer as an embedded-graphics draw target
    #[cfg(feature = "graphics")]
    pub fn renderer_mut(&mut self) -> &mut TextRenderer<W, P> {
        &mut self.renderer
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.controller.release()
    }

    fn ensure_ready(&self) -> Result<(), Error<B::Error>> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockBus;
    use crate::transport::TransportError;
    use proptest::prelude::*;
    use sh1107_core::FONT_5X7;
    use sh1107_hal::I2cBusError;

    /// Commands sent by `init()` before the first flush
    const INIT_COMMANDS: usize = 24;

    fn ready() -> Sh1107<MockBus> {
        let mut oled = Sh1107::new(MockBus::new(), DisplayConfig::default());
        oled.init().unwrap();
        oled.controller.transport_mut().bus_mut().clear();
        oled
    }

    fn bus<const W: usize, const P: usize>(oled: &Sh1107<MockBus, W, P>) -> &MockBus {
        oled.controller.transport().bus()
    }

    #[test]
    fn test_new_sends_nothing() {
        let oled: Sh1107<MockBus> = Sh1107::new(MockBus::new(), DisplayConfig::default());
        assert!(!oled.is_initialized());
        let bus = oled.release();
        assert!(bus.writes.is_empty());
        assert_eq!(bus.probes, 0);
    }

    #[test]
    fn test_init_blanks_screen() {
        let mut oled: Sh1107<MockBus> = Sh1107::new(MockBus::new(), DisplayConfig::default());
        oled.set_cursor(40, 40);
        oled.init().unwrap();

        assert!(oled.is_initialized());
        assert!(oled.is_display_on());
        assert_eq!(oled.cursor(), (0, 0));

        let bus = bus(&oled);
        assert_eq!(bus.commands().len(), INIT_COMMANDS + 8 * 3);
        let data = bus.data_writes();
        assert_eq!(data.len(), 8);
        assert!(data.iter().all(|page| page.len() == 128 && page.iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_init_not_detected() {
        let mut oled: Sh1107<MockBus> = Sh1107::new(MockBus::absent(), DisplayConfig::default());
        assert_eq!(oled.init(), Err(Error::NotDetected));
        assert_eq!(oled.state(), State::NotDetected);
        assert!(oled.release().writes.is_empty());
    }

    #[test]
    fn test_flush_before_init() {
        let mut oled: Sh1107<MockBus> = Sh1107::new(MockBus::new(), DisplayConfig::default());
        assert_eq!(oled.flush(), Err(Error::NotInitialized));
        assert_eq!(oled.clear(), Err(Error::NotInitialized));
        assert_eq!(oled.set_contrast(0x10), Err(Error::NotInitialized));
        assert_eq!(oled.set_display_on(false), Err(Error::NotInitialized));
        assert_eq!(oled.set_display_inverted(true), Err(Error::NotInitialized));
        assert!(oled.release().writes.is_empty());
    }

    #[test]
    fn test_flush_off_shape() {
        let mut oled = ready();
        oled.fill(Color::Off);
        oled.flush().unwrap();

        let data = bus(&oled).data_writes();
        assert_eq!(data.len(), 8);
        for page in data {
            assert_eq!(page.len(), 128);
            assert!(page.iter().all(|&b| b == 0x00));
        }
    }

    #[test]
    fn test_flush_on_shape() {
        let mut oled = ready();
        oled.fill(Color::On);
        oled.flush().unwrap();

        let data = bus(&oled).data_writes();
        assert_eq!(data.len(), 8);
        for page in data {
            assert_eq!(page.len(), 128);
            assert!(page.iter().all(|&b| b == 0xFF));
        }
    }

    #[test]
    fn test_flush_page_order_and_addressing() {
        let mut oled = ready();
        oled.flush().unwrap();

        let bus = bus(&oled);
        let expected: Vec<u8> = (0..8u8).flat_map(|m| [0xB0 + m, 0x00, 0x10]).collect();
        assert_eq!(bus.commands(), expected);

        // Each data write follows its page's three address commands
        for (i, chunk) in bus.writes.chunks(4).enumerate() {
            assert_eq!(chunk[0].1, [0x00, 0xB0 + i as u8]);
            assert_eq!(chunk[3].1[0], 0x40);
        }
    }

    #[test]
    fn test_flush_slices_pages() {
        let mut oled = ready();
        // Row 8 is bit 0 of page 1; row 63 is bit 7 of page 7
        oled.set_pixel(7, 8, Color::On);
        oled.set_pixel(127, 63, Color::On);
        oled.flush().unwrap();

        let data = bus(&oled).data_writes();
        assert_eq!(data[1][7], 0x01);
        assert_eq!(data[7][127], 0x80);
        assert!(data[0].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_draws_do_not_touch_bus() {
        let mut oled = ready();
        oled.fill(Color::On);
        oled.set_pixel(1, 1, Color::Off);
        oled.set_cursor(0, 16);
        oled.put_string("Hi", &FONT_5X7, Color::On).unwrap();
        oled.set_inverted(true);
        oled.put_char('!', &FONT_5X7, Color::On).unwrap();
        assert!(bus(&oled).writes.is_empty());
    }

    #[test]
    fn test_clear_flushes_blank() {
        let mut oled = ready();
        oled.fill(Color::On);
        oled.clear().unwrap();

        let data = bus(&oled).data_writes();
        assert_eq!(data.len(), 8);
        assert!(data.iter().all(|page| page.iter().all(|&b| b == 0)));
    }

    #[test]
    fn test_put_char_round_trip() {
        let mut oled = ready();
        assert_eq!(oled.put_char('A', &FONT_5X7, Color::On), Ok('A'));
        assert_eq!(oled.cursor(), (6, 0));
        // Crossbar of 'A' on row 4 spans columns 0-4
        for x in 0..5 {
            assert_eq!(oled.renderer().pixel(x, 4), Some(Color::On));
        }
    }

    #[test]
    fn test_put_string_narrow_panel() {
        let mut oled: Sh1107<MockBus, 10, 1> = Sh1107::new(MockBus::new(), DisplayConfig::default());
        assert_eq!(
            oled.put_string("AB", &FONT_5X7, Color::On),
            Err(Error::OutOfBounds('B'))
        );
        assert_eq!(oled.cursor(), (6, 0));
    }

    #[test]
    fn test_narrow_panel_flush_width() {
        let mut oled: Sh1107<MockBus, 10, 1> = Sh1107::new(MockBus::new(), DisplayConfig::default());
        oled.init().unwrap();

        let bus = oled.release();
        let data = bus.data_writes();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].len(), 10);
    }

    #[test]
    fn test_tallest_panel_addresses_every_ram_page() {
        let mut oled: Sh1107<MockBus, 128, 16> =
            Sh1107::new(MockBus::new(), DisplayConfig::default());
        oled.init().unwrap();
        oled.controller.transport_mut().bus_mut().clear();
        oled.flush().unwrap();

        let pages: Vec<u8> = bus(&oled)
            .commands()
            .into_iter()
            .filter(|byte| byte & 0xF0 == 0xB0)
            .collect();
        assert_eq!(pages, (0xB0..=0xBF).collect::<Vec<u8>>());
        assert_eq!(bus(&oled).data_writes().len(), 16);
    }

    #[test]
    fn test_hardware_inverse_after_init() {
        let mut oled = ready();
        oled.set_display_inverted(true).unwrap();
        assert_eq!(bus(&oled).commands(), [0xA7]);
    }

    #[test]
    fn test_reinit_failure_reports_panel_asleep() {
        let mut oled = ready();
        oled.controller.transport_mut().bus_mut().fail_after = Some(1);
        assert!(oled.init().is_err());
        assert!(!oled.is_display_on());
    }

    #[test]
    fn test_contrast_and_power() {
        let mut oled = ready();
        oled.set_contrast(0x00).unwrap();
        oled.set_display_on(false).unwrap();
        assert!(!oled.is_display_on());
        assert!(oled.is_initialized());

        assert_eq!(bus(&oled).commands(), [0x81, 0x00, 0xAE]);
    }

    #[test]
    fn test_flush_stops_on_bus_error() {
        let mut oled = ready();
        // Page 0 address + column commands succeed, its data write fails
        oled.controller.transport_mut().bus_mut().fail_after = Some(3);
        assert_eq!(
            oled.flush(),
            Err(Error::Transport(TransportError::Bus(I2cBusError::Nack)))
        );
        assert!(bus(&oled).data_writes().is_empty());
    }

    proptest! {
        #[test]
        fn prop_flushed_byte_matches_pixel(x in 0u16..128, y in 0u16..64) {
            let mut oled = ready();
            oled.set_pixel(x, y, Color::On);
            oled.flush().unwrap();

            let data = bus(&oled).data_writes();
            let page = usize::from(y / 8);
            prop_assert_eq!(data[page][usize::from(x)], 1u8 << (y % 8));
            let lit: u32 = data.iter().flat_map(|p| p.iter()).map(|b| b.count_ones()).sum();
            prop_assert_eq!(lit, 1);
        }
    }
}
