//! Three color stripes rotating through three pixel groups

use super::{Frame, Pattern};
use crate::{PixelDriver, color::Rgb};

const STRIPE_GROUPS: [&[usize]; 3] = [&[7, 0, 6], &[1, 5], &[2, 4, 3]];

#[derive(Debug, Clone, Copy)]
pub struct ColorStripesPattern {
    colors: [Rgb; 3],
}

impl ColorStripesPattern {
    pub const fn new(color1: Rgb, color2: Rgb, color3: Rgb) -> Self {
        Self {
            colors: [color1, color2, color3],
        }
    }
}

impl Pattern for ColorStripesPattern {
    #[allow(clippy::cast_possible_truncation)]
    fn total_steps(&self, _pixel_count: usize) -> u16 {
        STRIPE_GROUPS.len() as u16
    }

    fn render<D: PixelDriver>(&mut self, frame: Frame, strip: &mut D) {
        strip.clear();

        let mut colors = self.colors;
        let shift = usize::from(frame.step) % colors.len();
        colors.rotate_right(shift);

        for (group, color) in STRIPE_GROUPS.iter().zip(colors) {
            for &index in *group {
                strip.set_pixel(index, color);
            }
        }
    }
}
