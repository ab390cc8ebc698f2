//! Scanner with a fading tail

use super::{Direction, Frame, Pattern, steps_for};
use crate::{
    PixelDriver,
    color::{Rgb, dim},
};

/// Dimming shift for the pixels 1, 2 and 3 positions behind the head
const TRAIL_DIMMING: [u8; 3] = [1, 2, 4];

#[derive(Debug, Clone, Copy)]
pub struct ScannerPattern {
    color: Rgb,
}

impl ScannerPattern {
    pub const fn new(color: Rgb) -> Self {
        Self { color }
    }

    /// Index of the pixel `distance` positions behind `head`, wrapping around
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        clippy::cast_sign_loss
    )]
    fn behind(head: usize, distance: usize, direction: Direction, count: usize) -> usize {
        let distance = distance as isize;
        let offset = match direction {
            Direction::Forward => -distance,
            Direction::Reverse => distance,
        };
        (head as isize + offset).rem_euclid(count as isize) as usize
    }
}

impl Pattern for ScannerPattern {
    fn total_steps(&self, pixel_count: usize) -> u16 {
        steps_for(pixel_count)
    }

    fn render<D: PixelDriver>(&mut self, frame: Frame, strip: &mut D) {
        strip.clear();
        let count = strip.pixel_count();
        if count == 0 {
            return;
        }

        let head = usize::from(frame.step);
        // Farthest first so nearer pixels win where the trail overlaps itself
        for (distance, &amount) in TRAIL_DIMMING.iter().enumerate().rev() {
            let index = Self::behind(head, distance + 1, frame.direction, count);
            if index != head {
                strip.set_pixel(index, dim(self.color, amount));
            }
        }
        strip.set_pixel(head, self.color);
    }
}
