//! Output side of the timer: anything that can show `M:SS`.
//!
//! The control loop only talks to a [`RenderSink`]; the SSD1306 driver
//! lives behind it in [`crate::ui::display`] on the target, and tests
//! substitute a recording sink.

use crate::config::{GLYPH_HEIGHT, GLYPH_WIDTH, PANEL_HEIGHT, PANEL_WIDTH, TEXT_SCALE};
use crate::countdown::ClockState;

pub trait RenderSink {
    type Error;

    /// Blank the frame.
    fn clear(&mut self);

    /// Colour / text size / cursor set-up. Most sinks fix these at
    /// construction time.
    fn configure(&mut self) {}

    /// Put `minutes:seconds` into the frame, seconds zero-padded.
    fn write_time(&mut self, minutes: u32, seconds: u8);

    /// Push the frame to the physical output.
    fn present(&mut self) -> Result<(), Self::Error>;
}

/// One complete frame for `clock`.
pub fn draw<S: RenderSink>(sink: &mut S, clock: &ClockState) -> Result<(), S::Error> {
    sink.clear();
    sink.configure();
    sink.write_time(clock.minutes, clock.seconds);
    sink.present()
}

/// Top-left pixel that centres `chars` scaled clock glyphs on the panel.
///
/// Text wider than the panel starts at the left edge and is clipped on the
/// right.
pub fn clock_origin(chars: usize) -> (i32, i32) {
    let chars = u32::try_from(chars).unwrap_or(u32::MAX);
    let width = chars.saturating_mul(GLYPH_WIDTH * TEXT_SCALE);
    let height = GLYPH_HEIGHT * TEXT_SCALE;
    let x = PANEL_WIDTH.saturating_sub(width) / 2;
    let y = PANEL_HEIGHT.saturating_sub(height) / 2;
    (x as i32, y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_face_is_centred() {
        // "4:00": 4 cells of 20x40.
        assert_eq!(clock_origin(4), (24, 12));
    }

    #[test]
    fn longer_faces_shift_left_and_still_fit() {
        for chars in 4..=6usize {
            let (x, y) = clock_origin(chars);
            let width = chars as u32 * GLYPH_WIDTH * TEXT_SCALE;
            assert!(x >= 0 && y >= 0);
            assert!(x as u32 + width <= PANEL_WIDTH, "{chars} cells overflow");
            assert!(y as u32 + GLYPH_HEIGHT * TEXT_SCALE <= PANEL_HEIGHT);
        }
        assert_eq!(clock_origin(5), (14, 12));
        assert_eq!(clock_origin(6), (4, 12));
    }

    #[test]
    fn overwide_face_pins_to_left_edge() {
        assert_eq!(clock_origin(7), (0, 12));
        assert_eq!(clock_origin(usize::MAX), (0, 12));
    }
}
