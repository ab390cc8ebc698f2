//! Single pixel sparkles visiting the strip in a fixed order

use rand_core::RngCore;

use super::{Frame, Pattern};
use crate::{
    PixelDriver,
    color::{BLACK, Rgb, rgb_from_u32},
};

const SPARKLE_ORDER: [usize; 8] = [0, 4, 7, 3, 1, 5, 2, 6];

#[derive(Debug, Clone, Copy)]
pub struct SparklePattern {
    color: Rgb,
}

impl SparklePattern {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }
}

impl Pattern for SparklePattern {
    #[allow(clippy::cast_possible_truncation)]
    fn total_steps(&self, _pixel_count: usize) -> u16 {
        SPARKLE_ORDER.len() as u16
    }

    fn render<D: PixelDriver>(&mut self, frame: Frame, strip: &mut D) {
        strip.clear();
        if let Some(&index) = SPARKLE_ORDER.get(usize::from(frame.step)) {
            strip.set_pixel(index, self.color);
        }
    }
}

/// Sparkle that picks a new random color for every frame
#[derive(Debug, Clone, Copy)]
pub struct RandomSparklePattern {
    sparkle: SparklePattern,
}

impl RandomSparklePattern {
    pub const fn new() -> Self {
        Self {
            sparkle: SparklePattern::new(BLACK),
        }
    }

    /// Roll the next sparkle color
    pub fn randomize<R: RngCore>(&mut self, rng: &mut R) {
        self.sparkle.color = rgb_from_u32(rng.next_u32());
    }
}

impl Default for RandomSparklePattern {
    fn default() -> Self {
        Self::new()
    }
}

impl Pattern for RandomSparklePattern {
    fn total_steps(&self, pixel_count: usize) -> u16 {
        self.sparkle.total_steps(pixel_count)
    }

    fn render<D: PixelDriver>(&mut self, frame: Frame, strip: &mut D) {
        self.sparkle.render(frame, strip);
    }
}
