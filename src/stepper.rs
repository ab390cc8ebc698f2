//! Timer-gated pattern stepper.
//!
//! The stepper is polled from the main loop with the current time. It never
//! blocks: each poll renders at most one frame and returns right away.
//!
//! ```ignore
//! let mut stepper = PatternStepper::new(strip, rng);
//! stepper.rainbow_cycle(Duration::from_millis(20), Direction::Forward);
//!
//! loop {
//!     if stepper.update(Instant::now())? == StepOutcome::Completed {
//!         stepper.set_final_delay(Duration::from_millis(500));
//!     }
//! }
//! ```

use embassy_time::{Duration, Instant};
#[cfg(feature = "esp32-log")]
use esp_println::println;
use rand_core::RngCore;

use crate::{
    PixelDriver,
    color::Rgb,
    pattern::{
        ColorStripesPattern, ColorWipePattern, Direction, FadePattern, Frame, PatternConfig,
        PatternId, PatternSlot, PoliceSirenPattern, RainbowBloomPattern, RainbowCyclePattern,
        RandomSparklePattern, ScannerPattern, SparklePattern, TheaterChasePattern,
    },
};

const NO_DELAY: Duration = Duration::from_millis(0);

/// Result of a single `update` poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A final delay is still pending
    Paused,
    /// Not time for a frame yet, or no active pattern
    Idle,
    /// A frame was rendered and shown
    Rendered,
    /// A frame was rendered and the pattern wrapped around
    Completed,
}

/// Animation state for one strip
#[derive(Debug, Clone)]
struct PatternState {
    pattern: Option<PatternSlot>,
    direction: Direction,
    delay: Duration,
    last_update: Instant,
    final_delay: Duration,
    total_steps: u16,
    current_step: u16,
}

impl PatternState {
    const fn new() -> Self {
        Self {
            pattern: None,
            direction: Direction::Forward,
            delay: NO_DELAY,
            last_update: Instant::from_millis(0),
            final_delay: NO_DELAY,
            total_steps: 1,
            current_step: 0,
        }
    }

    const fn frame(&self) -> Frame {
        Frame {
            step: self.current_step,
            total_steps: self.total_steps,
            direction: self.direction,
        }
    }

    /// Move to the next step in the current direction
    ///
    /// Returns true if the step counter wrapped around.
    fn advance(&mut self, increment: u16) -> bool {
        match self.direction {
            Direction::Forward => {
                self.current_step = self.current_step.saturating_add(increment);
                if self.current_step >= self.total_steps {
                    self.current_step = 0;
                    return true;
                }
            }
            Direction::Reverse => {
                if self.current_step < increment {
                    self.current_step = self.total_steps - 1;
                    return true;
                }
                self.current_step -= increment;
            }
        }
        false
    }
}

/// Pattern stepper - drives one strip through the pattern catalogue
///
/// `R` provides colors for the random sparkle, `C` is called every time the
/// active pattern completes a loop.
pub struct PatternStepper<D, R, C = fn()> {
    strip: D,
    rng: R,
    on_complete: Option<C>,
    state: PatternState,
}

impl<D: PixelDriver, R: RngCore> PatternStepper<D, R, fn()> {
    /// Create a stepper without a completion callback
    pub fn new(strip: D, rng: R) -> Self {
        Self {
            strip,
            rng,
            on_complete: None,
            state: PatternState::new(),
        }
    }
}

impl<D: PixelDriver, R: RngCore, C: FnMut()> PatternStepper<D, R, C> {
    /// Create a stepper calling `on_complete` whenever a pattern loops
    pub fn with_on_complete(strip: D, rng: R, on_complete: C) -> Self {
        Self {
            strip,
            rng,
            on_complete: Some(on_complete),
            state: PatternState::new(),
        }
    }

    /// Advance the active pattern if its delay has elapsed
    ///
    /// This is the main loop step. Call this continuously.
    pub fn update(&mut self, now: Instant) -> Result<StepOutcome, D::Error> {
        let elapsed = now.saturating_duration_since(self.state.last_update);
        if elapsed < self.state.final_delay {
            return Ok(StepOutcome::Paused);
        }
        self.state.final_delay = NO_DELAY;

        if elapsed <= self.state.delay {
            return Ok(StepOutcome::Idle);
        }
        self.state.last_update = now;

        let frame = self.state.frame();
        let Some(pattern) = self.state.pattern.as_mut() else {
            return Ok(StepOutcome::Idle);
        };
        pattern.render(frame, &mut self.strip, &mut self.rng);
        let increment = pattern.increment();

        if let Err(err) = self.strip.show() {
            #[cfg(feature = "esp32-log")]
            println!("[PatternStepper.update] show failed at step {}", frame.step);
            return Err(err);
        }

        if !self.state.advance(increment) {
            return Ok(StepOutcome::Rendered);
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[PatternStepper.update] {} completed a loop",
            self.active_pattern().map_or("none", PatternId::as_str)
        );
        if let Some(on_complete) = self.on_complete.as_mut() {
            on_complete();
        }
        Ok(StepOutcome::Completed)
    }

    /// Select any pattern from a configuration
    pub fn select(&mut self, config: &PatternConfig) {
        self.start(config.id.to_slot(config), config.delay, config.direction);
    }

    /// Stop animating; the strip keeps its last frame
    pub fn stop(&mut self) {
        self.state.pattern = None;
    }

    /// Rotate the full color wheel along the strip
    pub fn rainbow_cycle(&mut self, delay: Duration, direction: Direction) {
        self.start(
            PatternSlot::RainbowCycle(RainbowCyclePattern),
            delay,
            direction,
        );
    }

    /// Bloom wheel hues outward from the center pixel
    pub fn rainbow_bloom(&mut self, delay: Duration, direction: Direction) {
        self.start(
            PatternSlot::RainbowBloom(RainbowBloomPattern),
            delay,
            direction,
        );
    }

    /// Chase every third pixel in `color` over a `background` fill
    pub fn theater_chase(
        &mut self,
        color: Rgb,
        background: Rgb,
        delay: Duration,
        direction: Direction,
    ) {
        self.start(
            PatternSlot::TheaterChase(TheaterChasePattern::new(color, background)),
            delay,
            direction,
        );
    }

    /// Paint the strip with `color` one pixel at a time, then clear it the same way
    pub fn color_wipe(&mut self, color: Rgb, delay: Duration, direction: Direction) {
        self.start(
            PatternSlot::ColorWipe(ColorWipePattern::new(color)),
            delay,
            direction,
        );
    }

    /// Sweep a single `color` pixel with a dimming trail
    pub fn scanner(&mut self, color: Rgb, delay: Duration, direction: Direction) {
        self.start(
            PatternSlot::Scanner(ScannerPattern::new(color)),
            delay,
            direction,
        );
    }

    /// Fade the whole strip from `from` to `to` over `steps` frames
    pub fn fade(&mut self, from: Rgb, to: Rgb, steps: u16, delay: Duration, direction: Direction) {
        self.start(
            PatternSlot::Fade(FadePattern::new(from, to, steps)),
            delay,
            direction,
        );
    }

    /// Fade the whole strip from `from` to `to` over `steps` frames
    pub fn rgb_fade(
        &mut self,
        from: Rgb,
        to: Rgb,
        steps: u16,
        delay: Duration,
        direction: Direction,
    ) {
        self.start(
            PatternSlot::RgbFade(FadePattern::new(from, to, steps)),
            delay,
            direction,
        );
    }

    /// Light one pixel at a time with `color` in a fixed scattered order
    pub fn sparkle(&mut self, color: Rgb, delay: Duration, direction: Direction) {
        self.start(
            PatternSlot::Sparkle(SparklePattern::new(color)),
            delay,
            direction,
        );
    }

    /// Sparkle with a new random color every frame
    pub fn sparkle_random(&mut self, delay: Duration, direction: Direction) {
        self.start(
            PatternSlot::SparkleRandom(RandomSparklePattern::new()),
            delay,
            direction,
        );
    }

    /// Flash one `first` and one `second` pixel per step, then pause dark
    pub fn police_siren(&mut self, first: Rgb, second: Rgb, delay: Duration, direction: Direction) {
        self.start(
            PatternSlot::PoliceSiren(PoliceSirenPattern::new(first, second)),
            delay,
            direction,
        );
    }

    /// Rotate `color1`, `color2` and `color3` through three fixed pixel groups
    pub fn color_stripes(
        &mut self,
        color1: Rgb,
        color2: Rgb,
        color3: Rgb,
        delay: Duration,
        direction: Direction,
    ) {
        self.start(
            PatternSlot::ColorStripes(ColorStripesPattern::new(color1, color2, color3)),
            delay,
            direction,
        );
    }

    /// Flip the direction and restart from the new direction's first step
    pub fn reverse(&mut self) {
        match self.state.direction {
            Direction::Forward => {
                self.state.direction = Direction::Reverse;
                self.state.current_step = self.state.total_steps - 1;
            }
            Direction::Reverse => {
                self.state.direction = Direction::Forward;
                self.state.current_step = 0;
            }
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[PatternStepper.reverse] direction {:?}, step {}",
            self.state.direction, self.state.current_step
        );
    }

    /// Hold the next frame until `delay` has passed since the last one
    pub fn set_final_delay(&mut self, delay: Duration) {
        self.state.final_delay = delay;
    }

    /// Set every pixel to `color` and show it
    pub fn fill(&mut self, color: Rgb) -> Result<(), D::Error> {
        for i in 0..self.strip.pixel_count() {
            self.strip.set_pixel(i, color);
        }
        self.strip.show()
    }

    pub fn active_pattern(&self) -> Option<PatternId> {
        self.state.pattern.as_ref().map(PatternSlot::id)
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn current_step(&self) -> u16 {
        self.state.current_step
    }

    pub fn total_steps(&self) -> u16 {
        self.state.total_steps
    }

    pub fn delay(&self) -> Duration {
        self.state.delay
    }

    pub fn final_delay(&self) -> Duration {
        self.state.final_delay
    }

    /// Get a reference to the strip driver.
    pub fn strip(&self) -> &D {
        &self.strip
    }

    /// Get a mutable reference to the strip driver.
    pub fn strip_mut(&mut self) -> &mut D {
        &mut self.strip
    }

    /// Reset the state for a newly selected pattern
    ///
    /// Nothing is rendered until the next `update`.
    fn start(&mut self, pattern: PatternSlot, delay: Duration, direction: Direction) {
        let total_steps = pattern.total_steps(self.strip.pixel_count()).max(1);
        #[cfg(feature = "esp32-log")]
        println!(
            "[PatternStepper.start] {} with {} steps every {}ms",
            pattern.id().as_str(),
            total_steps,
            delay.as_millis()
        );
        self.state.pattern = Some(pattern);
        self.state.delay = delay;
        self.state.direction = direction;
        self.state.total_steps = total_steps;
        self.state.current_step = 0;
        self.state.final_delay = NO_DELAY;
    }
}
