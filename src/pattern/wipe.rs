//! Color wipe
//!
//! Paints the strip one pixel per step, then unpaints it in the same order.
//! Pixels are written incrementally, the buffer is never cleared as a whole.

use super::{Frame, Pattern, steps_for};
use crate::{
    PixelDriver,
    color::{BLACK, Rgb},
};

#[derive(Debug, Clone, Copy)]
pub struct ColorWipePattern {
    color: Rgb,
}

impl ColorWipePattern {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Pattern for ColorWipePattern {
    fn total_steps(&self, pixel_count: usize) -> u16 {
        steps_for(pixel_count).saturating_mul(2)
    }

    fn render<D: PixelDriver>(&mut self, frame: Frame, strip: &mut D) {
        let count = strip.pixel_count();
        let step = usize::from(frame.step);
        if step >= count {
            strip.set_pixel(step - count, BLACK);
        } else {
            strip.set_pixel(step, self.color);
        }
    }
}
