//! Theater marquee chase
//!
//! Every third pixel is lit with the chase color and the rest with the
//! background color; the lit pixels crawl one position per step.

use super::{Frame, Pattern, steps_for};
use crate::{PixelDriver, color::Rgb};

const CHASE_SPACING: usize = 3;

#[derive(Debug, Clone, Copy)]
pub struct TheaterChasePattern {
    color: Rgb,
    background: Rgb,
}

impl TheaterChasePattern {
    pub const fn new(color: Rgb, background: Rgb) -> Self {
        Self { color, background }
    }
}

impl Pattern for TheaterChasePattern {
    fn total_steps(&self, pixel_count: usize) -> u16 {
        steps_for(pixel_count)
    }

    fn render<D: PixelDriver>(&mut self, frame: Frame, strip: &mut D) {
        for i in 0..strip.pixel_count() {
            let color = if (i + usize::from(frame.step)) % CHASE_SPACING == 0 {
                self.color
            } else {
                self.background
            };
            strip.set_pixel(i, color);
        }
    }
}
