//! SSD1306 OLED display wrapper.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::config::{DISPLAY_I2C_ADDRESS, PANEL_HEIGHT, PANEL_WIDTH, TEXT_SCALE};
use crate::countdown::ClockState;
use crate::error::Error;
use crate::render::{self, RenderSink};

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// `M:SS` never needs more than `u32::MAX` minutes plus ":SS".
type ClockText = heapless::String<16>;

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_10X20)
        .text_color(BinaryColor::On)
        .build()
}

/// Draws every incoming pixel as a `TEXT_SCALE` square block, offset by
/// `origin`, on the wrapped target.
struct Scaled<'a, D> {
    target: &'a mut D,
    origin: Point,
}

impl<D> OriginDimensions for Scaled<'_, D> {
    fn size(&self) -> Size {
        Size::new(PANEL_WIDTH / TEXT_SCALE, PANEL_HEIGHT / TEXT_SCALE)
    }
}

impl<D> DrawTarget for Scaled<'_, D>
where
    D: DrawTarget<Color = BinaryColor>,
{
    type Color = BinaryColor;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let scale = TEXT_SCALE as i32;
        for Pixel(point, color) in pixels {
            let corner = self.origin + Point::new(point.x * scale, point.y * scale);
            self.target
                .fill_solid(&Rectangle::new(corner, Size::new_equal(TEXT_SCALE)), color)?;
        }
        Ok(())
    }
}

/// The countdown face on a 128×64 SSD1306.
pub struct OledSink<I2C> {
    display: Display<I2C>,
    text: ClockText,
    draw_failed: bool,
}

impl<I2C> OledSink<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Bring up the panel and blank it. An error here means the panel is
    /// absent or not answering; callers treat it as fatal.
    pub fn init(i2c: I2C) -> Result<Self, Error> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| Error::DisplayInit)?;
        display.clear_buffer();
        display.flush().map_err(|_| Error::DisplayInit)?;

        Ok(Self {
            display,
            text: ClockText::new(),
            draw_failed: false,
        })
    }
}

impl<I2C> RenderSink for OledSink<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    type Error = Error;

    fn clear(&mut self) {
        self.display.clear_buffer();
        self.text.clear();
        self.draw_failed = false;
    }

    fn write_time(&mut self, minutes: u32, seconds: u8) {
        if write!(self.text, "{}", ClockState::new(minutes, seconds)).is_err() {
            self.draw_failed = true;
            return;
        }
        let (x, y) = render::clock_origin(self.text.len());
        let mut target = Scaled {
            target: &mut self.display,
            origin: Point::new(x, y),
        };
        if Text::with_baseline(self.text.as_str(), Point::zero(), text_style(), Baseline::Top)
            .draw(&mut target)
            .is_err()
        {
            self.draw_failed = true;
        }
    }

    fn present(&mut self) -> Result<(), Error> {
        if self.draw_failed {
            return Err(Error::DisplayWrite);
        }
        self.display.flush().map_err(|_| Error::DisplayWrite)
    }
}
