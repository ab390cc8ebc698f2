//! Whole-strip fade between two colors

use super::{Frame, Pattern};
use crate::{
    PixelDriver,
    color::{Rgb, fade_color},
};

#[derive(Debug, Clone, Copy)]
pub struct FadePattern {
    from: Rgb,
    to: Rgb,
    steps: u16,
}

impl FadePattern {
    /// Create a fade taking `steps` frames from `from` to `to`
    ///
    /// A fade needs at least one step; zero is raised to one.
    pub const fn new(from: Rgb, to: Rgb, steps: u16) -> Self {
        Self {
            from,
            to,
            steps: if steps == 0 { 1 } else { steps },
        }
    }
}

impl Pattern for FadePattern {
    fn total_steps(&self, _pixel_count: usize) -> u16 {
        self.steps
    }

    fn render<D: PixelDriver>(&mut self, frame: Frame, strip: &mut D) {
        let color = fade_color(self.from, self.to, frame.step, frame.total_steps);
        for i in 0..strip.pixel_count() {
            strip.set_pixel(i, color);
        }
    }
}
