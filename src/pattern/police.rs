//! Police siren flashing two colors across a jewel

use super::{Frame, Pattern};
use crate::{PixelDriver, color::Rgb};

const SIREN_STEPS: u16 = 6;
const SIREN_FIRST: [usize; 4] = [0, 7, 4, 5];
const SIREN_SECOND: [usize; 4] = [2, 3, 6, 1];

/// Two alternating pixels per step
///
/// The loop is longer than the pixel tables; the extra steps stay dark
/// and act as a pause before the siren restarts.
#[derive(Debug, Clone, Copy)]
pub struct PoliceSirenPattern {
    first: Rgb,
    second: Rgb,
}

impl PoliceSirenPattern {
    pub const fn new(first: Rgb, second: Rgb) -> Self {
        Self { first, second }
    }
}

impl Pattern for PoliceSirenPattern {
    fn total_steps(&self, _pixel_count: usize) -> u16 {
        SIREN_STEPS
    }

    fn render<D: PixelDriver>(&mut self, frame: Frame, strip: &mut D) {
        strip.clear();
        let step = usize::from(frame.step);
        if let Some(&index) = SIREN_FIRST.get(step) {
            strip.set_pixel(index, self.first);
        }
        if let Some(&index) = SIREN_SECOND.get(step) {
            strip.set_pixel(index, self.second);
        }
    }
}
