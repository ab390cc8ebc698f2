//! Rainbow patterns driven by the color wheel
//!
//! - `RainbowCyclePattern`: the whole wheel spread over the strip, rotating
//! - `RainbowBloomPattern`: hue rings blooming out of a center pixel

use super::{Direction, Frame, Pattern};
use crate::{PixelDriver, color::wheel};

const RAINBOW_STEPS: u16 = 255;

/// Hue offset between bloom rings
const BLOOM_STEP: u16 = 16;
const BLOOM_CENTER: usize = 0;
const BLOOM_INNER_RING: [usize; 4] = [1, 3, 5, 7];
const BLOOM_OUTER_RING: [usize; 3] = [2, 4, 6];

/// Full color wheel spread evenly across the strip
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowCyclePattern;

impl Pattern for RainbowCyclePattern {
    fn total_steps(&self, _pixel_count: usize) -> u16 {
        RAINBOW_STEPS
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render<D: PixelDriver>(&mut self, frame: Frame, strip: &mut D) {
        let count = strip.pixel_count();
        for i in 0..count {
            let hue = (i * 256 / count + usize::from(frame.step)) & 0xFF;
            strip.set_pixel(i, wheel(hue as u8));
        }
    }
}

/// Center pixel with two rings trailing its hue
///
/// Laid out for an 8 pixel jewel: pixel 0 in the middle, the odd pixels as
/// the inner ring and the remaining even pixels as the outer ring.
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowBloomPattern;

impl RainbowBloomPattern {
    /// Hue of a ring `offset` positions away from the center
    ///
    /// Sums below zero wrap around the 256-step wheel, not the 255-step loop.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn ring_hue(step: u16, offset: i32) -> u8 {
        ((i32::from(step) + offset) % i32::from(RAINBOW_STEPS)) as u8
    }
}

impl Pattern for RainbowBloomPattern {
    const INCREMENT: u16 = BLOOM_STEP;

    fn total_steps(&self, _pixel_count: usize) -> u16 {
        RAINBOW_STEPS
    }

    fn render<D: PixelDriver>(&mut self, frame: Frame, strip: &mut D) {
        let offset = match frame.direction {
            Direction::Forward => i32::from(BLOOM_STEP),
            Direction::Reverse => -i32::from(BLOOM_STEP),
        };

        strip.set_pixel(BLOOM_CENTER, wheel(Self::ring_hue(frame.step, 0)));

        let inner = wheel(Self::ring_hue(frame.step, offset));
        for &index in &BLOOM_INNER_RING {
            strip.set_pixel(index, inner);
        }

        let outer = wheel(Self::ring_hue(frame.step, offset * 2));
        for &index in &BLOOM_OUTER_RING {
            strip.set_pixel(index, outer);
        }
    }
}
