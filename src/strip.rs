//! Pixel buffers and output adapters.
//!
//! [`FrameBuffer`] keeps the pixels in memory and only touches the hardware
//! on `show`, through an [`OutputDriver`].

use smart_leds::SmartLedsWrite;

use crate::{
    PixelDriver,
    color::{BLACK, Rgb},
};

/// Abstract LED output trait
///
/// Implement this trait to support different hardware platforms.
pub trait OutputDriver {
    type Error;

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}

/// Fixed-capacity pixel buffer
///
/// `N` is the maximum number of LEDs; the strip may use fewer.
pub struct FrameBuffer<O: OutputDriver, const N: usize> {
    output: O,
    pixels: [Rgb; N],
    len: usize,
}

impl<O: OutputDriver, const N: usize> FrameBuffer<O, N> {
    /// Create a buffer driving all `N` pixels
    pub fn new(output: O) -> Self {
        Self::with_len(output, N)
    }

    /// Create a buffer driving the first `len` pixels
    ///
    /// `len` is clamped to `N`.
    pub fn with_len(output: O, len: usize) -> Self {
        Self {
            output,
            pixels: [BLACK; N],
            len: len.min(N),
        }
    }

    /// Current buffer contents
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// Get a mutable reference to the output driver.
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}

impl<O: OutputDriver, const N: usize> PixelDriver for FrameBuffer<O, N> {
    type Error = O::Error;

    fn pixel_count(&self) -> usize {
        self.len
    }

    fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels[..self.len].get_mut(index) {
            *pixel = color;
        }
    }

    fn clear(&mut self) {
        self.pixels.fill(BLACK);
    }

    fn show(&mut self) -> Result<(), Self::Error> {
        self.output.write(&self.pixels[..self.len])
    }
}

/// Output adapter for any `smart-leds` writer
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get a reference to the wrapped writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    Rgb: Into<W::Color>,
{
    type Error = W::Error;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.writer.write(colors.iter().copied())
    }
}
