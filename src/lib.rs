#![no_std]

pub mod color;
pub mod pattern;
pub mod stepper;
pub mod strip;

pub use pattern::{Direction, Frame, PatternConfig, PatternId, PatternSlot};
pub use stepper::{PatternStepper, StepOutcome};
pub use strip::{FrameBuffer, OutputDriver, SmartLedsOutput};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract pixel strip trait
///
/// Implement this trait to drive patterns on different hardware.
/// The pattern stepper is generic over this trait.
pub trait PixelDriver {
    /// Error reported when pushing pixels to the hardware fails
    type Error;

    /// Number of addressable pixels
    fn pixel_count(&self) -> usize;

    /// Set a single pixel in the buffer
    ///
    /// Indices past `pixel_count` must be ignored.
    fn set_pixel(&mut self, index: usize, color: Rgb);

    /// Turn every pixel in the buffer off
    fn clear(&mut self);

    /// Flush the buffer to the LEDs
    fn show(&mut self) -> Result<(), Self::Error>;
}
