//! Pattern system with compile-time known pattern variants
//!
//! All patterns are stored in an enum to avoid heap allocations.
//! Each pattern implements the `Pattern` trait.

mod chase;
mod fade;
mod police;
mod rainbow;
mod scanner;
mod sparkle;
mod stripes;
mod wipe;

use embassy_time::Duration;
pub use chase::TheaterChasePattern;
pub use fade::FadePattern;
pub use police::PoliceSirenPattern;
pub use rainbow::{RainbowBloomPattern, RainbowCyclePattern};
use rand_core::RngCore;
pub use scanner::ScannerPattern;
pub use sparkle::{RandomSparklePattern, SparklePattern};
pub use stripes::ColorStripesPattern;
pub use wipe::ColorWipePattern;

use crate::{
    PixelDriver,
    color::{BLACK, Rgb},
};

const PATTERN_NAME_RAINBOW_CYCLE: &str = "rainbow_cycle";
const PATTERN_NAME_RAINBOW_BLOOM: &str = "rainbow_bloom";
const PATTERN_NAME_COLOR_WIPE: &str = "color_wipe";
const PATTERN_NAME_SCANNER: &str = "scanner";
const PATTERN_NAME_FADE: &str = "fade";
const PATTERN_NAME_RGB_FADE: &str = "rgb_fade";
const PATTERN_NAME_SPARKLE: &str = "sparkle";
const PATTERN_NAME_SPARKLE_RANDOM: &str = "sparkle_random";
const PATTERN_NAME_THEATER_CHASE: &str = "theater_chase";
const PATTERN_NAME_POLICE_SIREN: &str = "police_siren";
const PATTERN_NAME_COLOR_STRIPES: &str = "color_stripes";

const PATTERN_ID_RAINBOW_CYCLE: u8 = 0;
const PATTERN_ID_RAINBOW_BLOOM: u8 = 1;
const PATTERN_ID_COLOR_WIPE: u8 = 2;
const PATTERN_ID_SCANNER: u8 = 3;
const PATTERN_ID_FADE: u8 = 4;
const PATTERN_ID_RGB_FADE: u8 = 5;
const PATTERN_ID_SPARKLE: u8 = 6;
const PATTERN_ID_SPARKLE_RANDOM: u8 = 7;
const PATTERN_ID_THEATER_CHASE: u8 = 8;
const PATTERN_ID_POLICE_SIREN: u8 = 9;
const PATTERN_ID_COLOR_STRIPES: u8 = 10;

/// Default number of steps for fades selected through [`PatternConfig`]
pub const DEFAULT_FADE_STEPS: u16 = 64;

/// Direction a pattern steps through its frames
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// Position of the frame being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub step: u16,
    pub total_steps: u16,
    pub direction: Direction,
}

pub trait Pattern {
    /// Steps advanced after each rendered frame
    const INCREMENT: u16 = 1;

    /// Number of steps in one loop of the pattern
    fn total_steps(&self, pixel_count: usize) -> u16;

    /// Render a single frame into the strip buffer
    fn render<D: PixelDriver>(&mut self, frame: Frame, strip: &mut D);
}

/// Pattern slot - enum containing all possible patterns
#[derive(Debug, Clone)]
pub enum PatternSlot {
    RainbowCycle(RainbowCyclePattern),
    RainbowBloom(RainbowBloomPattern),
    ColorWipe(ColorWipePattern),
    Scanner(ScannerPattern),
    Fade(FadePattern),
    /// Same interpolation as `Fade`, kept as its own id
    RgbFade(FadePattern),
    Sparkle(SparklePattern),
    SparkleRandom(RandomSparklePattern),
    TheaterChase(TheaterChasePattern),
    PoliceSiren(PoliceSirenPattern),
    ColorStripes(ColorStripesPattern),
}

/// Known pattern ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    RainbowCycle = PATTERN_ID_RAINBOW_CYCLE,
    RainbowBloom = PATTERN_ID_RAINBOW_BLOOM,
    ColorWipe = PATTERN_ID_COLOR_WIPE,
    Scanner = PATTERN_ID_SCANNER,
    Fade = PATTERN_ID_FADE,
    RgbFade = PATTERN_ID_RGB_FADE,
    Sparkle = PATTERN_ID_SPARKLE,
    SparkleRandom = PATTERN_ID_SPARKLE_RANDOM,
    TheaterChase = PATTERN_ID_THEATER_CHASE,
    PoliceSiren = PATTERN_ID_POLICE_SIREN,
    ColorStripes = PATTERN_ID_COLOR_STRIPES,
}

/// Parameters for selecting any pattern by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    pub id: PatternId,
    /// Pattern specific colors, unused entries are ignored
    pub colors: [Rgb; 3],
    /// Loop length for `Fade` and `RgbFade`
    pub fade_steps: u16,
    pub delay: Duration,
    pub direction: Direction,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            id: PatternId::RainbowCycle,
            colors: [BLACK; 3],
            fade_steps: DEFAULT_FADE_STEPS,
            delay: Duration::from_millis(50),
            direction: Direction::Forward,
        }
    }
}

impl PatternId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_RAINBOW_CYCLE => Self::RainbowCycle,
            PATTERN_ID_RAINBOW_BLOOM => Self::RainbowBloom,
            PATTERN_ID_COLOR_WIPE => Self::ColorWipe,
            PATTERN_ID_SCANNER => Self::Scanner,
            PATTERN_ID_FADE => Self::Fade,
            PATTERN_ID_RGB_FADE => Self::RgbFade,
            PATTERN_ID_SPARKLE => Self::Sparkle,
            PATTERN_ID_SPARKLE_RANDOM => Self::SparkleRandom,
            PATTERN_ID_THEATER_CHASE => Self::TheaterChase,
            PATTERN_ID_POLICE_SIREN => Self::PoliceSiren,
            PATTERN_ID_COLOR_STRIPES => Self::ColorStripes,
            _ => return None,
        })
    }

    pub fn to_slot(self, config: &PatternConfig) -> PatternSlot {
        let [color1, color2, color3] = config.colors;
        match self {
            Self::RainbowCycle => PatternSlot::RainbowCycle(RainbowCyclePattern),
            Self::RainbowBloom => PatternSlot::RainbowBloom(RainbowBloomPattern),
            Self::ColorWipe => PatternSlot::ColorWipe(ColorWipePattern::new(color1)),
            Self::Scanner => PatternSlot::Scanner(ScannerPattern::new(color1)),
            Self::Fade => {
                PatternSlot::Fade(FadePattern::new(color1, color2, config.fade_steps))
            }
            Self::RgbFade => {
                PatternSlot::RgbFade(FadePattern::new(color1, color2, config.fade_steps))
            }
            Self::Sparkle => PatternSlot::Sparkle(SparklePattern::new(color1)),
            Self::SparkleRandom => PatternSlot::SparkleRandom(RandomSparklePattern::new()),
            Self::TheaterChase => {
                PatternSlot::TheaterChase(TheaterChasePattern::new(color1, color2))
            }
            Self::PoliceSiren => {
                PatternSlot::PoliceSiren(PoliceSirenPattern::new(color1, color2))
            }
            Self::ColorStripes => PatternSlot::ColorStripes(ColorStripesPattern::new(
                color1, color2, color3,
            )),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RainbowCycle => PATTERN_NAME_RAINBOW_CYCLE,
            Self::RainbowBloom => PATTERN_NAME_RAINBOW_BLOOM,
            Self::ColorWipe => PATTERN_NAME_COLOR_WIPE,
            Self::Scanner => PATTERN_NAME_SCANNER,
            Self::Fade => PATTERN_NAME_FADE,
            Self::RgbFade => PATTERN_NAME_RGB_FADE,
            Self::Sparkle => PATTERN_NAME_SPARKLE,
            Self::SparkleRandom => PATTERN_NAME_SPARKLE_RANDOM,
            Self::TheaterChase => PATTERN_NAME_THEATER_CHASE,
            Self::PoliceSiren => PATTERN_NAME_POLICE_SIREN,
            Self::ColorStripes => PATTERN_NAME_COLOR_STRIPES,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_RAINBOW_CYCLE => Some(Self::RainbowCycle),
            PATTERN_NAME_RAINBOW_BLOOM => Some(Self::RainbowBloom),
            PATTERN_NAME_COLOR_WIPE => Some(Self::ColorWipe),
            PATTERN_NAME_SCANNER => Some(Self::Scanner),
            PATTERN_NAME_FADE => Some(Self::Fade),
            PATTERN_NAME_RGB_FADE => Some(Self::RgbFade),
            PATTERN_NAME_SPARKLE => Some(Self::Sparkle),
            PATTERN_NAME_SPARKLE_RANDOM => Some(Self::SparkleRandom),
            PATTERN_NAME_THEATER_CHASE => Some(Self::TheaterChase),
            PATTERN_NAME_POLICE_SIREN => Some(Self::PoliceSiren),
            PATTERN_NAME_COLOR_STRIPES => Some(Self::ColorStripes),
            _ => None,
        }
    }
}

impl PatternSlot {
    /// Steps advanced after each rendered frame
    ///
    /// Derived from each pattern's `Pattern::INCREMENT` constant.
    pub fn increment(&self) -> u16 {
        match self {
            Self::RainbowCycle(_) => RainbowCyclePattern::INCREMENT,
            Self::RainbowBloom(_) => RainbowBloomPattern::INCREMENT,
            Self::ColorWipe(_) => ColorWipePattern::INCREMENT,
            Self::Scanner(_) => ScannerPattern::INCREMENT,
            Self::Fade(_) | Self::RgbFade(_) => FadePattern::INCREMENT,
            Self::Sparkle(_) => SparklePattern::INCREMENT,
            Self::SparkleRandom(_) => RandomSparklePattern::INCREMENT,
            Self::TheaterChase(_) => TheaterChasePattern::INCREMENT,
            Self::PoliceSiren(_) => PoliceSirenPattern::INCREMENT,
            Self::ColorStripes(_) => ColorStripesPattern::INCREMENT,
        }
    }

    /// Number of steps in one loop on a strip of `pixel_count` pixels
    pub fn total_steps(&self, pixel_count: usize) -> u16 {
        match self {
            Self::RainbowCycle(pattern) => pattern.total_steps(pixel_count),
            Self::RainbowBloom(pattern) => pattern.total_steps(pixel_count),
            Self::ColorWipe(pattern) => pattern.total_steps(pixel_count),
            Self::Scanner(pattern) => pattern.total_steps(pixel_count),
            Self::Fade(pattern) | Self::RgbFade(pattern) => pattern.total_steps(pixel_count),
            Self::Sparkle(pattern) => pattern.total_steps(pixel_count),
            Self::SparkleRandom(pattern) => pattern.total_steps(pixel_count),
            Self::TheaterChase(pattern) => pattern.total_steps(pixel_count),
            Self::PoliceSiren(pattern) => pattern.total_steps(pixel_count),
            Self::ColorStripes(pattern) => pattern.total_steps(pixel_count),
        }
    }

    /// Render the current pattern
    ///
    /// `rng` is only consumed by the random sparkle.
    pub fn render<D: PixelDriver, R: RngCore>(
        &mut self,
        frame: Frame,
        strip: &mut D,
        rng: &mut R,
    ) {
        match self {
            Self::RainbowCycle(pattern) => pattern.render(frame, strip),
            Self::RainbowBloom(pattern) => pattern.render(frame, strip),
            Self::ColorWipe(pattern) => pattern.render(frame, strip),
            Self::Scanner(pattern) => pattern.render(frame, strip),
            Self::Fade(pattern) | Self::RgbFade(pattern) => pattern.render(frame, strip),
            Self::Sparkle(pattern) => pattern.render(frame, strip),
            Self::SparkleRandom(pattern) => {
                pattern.randomize(rng);
                pattern.render(frame, strip);
            }
            Self::TheaterChase(pattern) => pattern.render(frame, strip),
            Self::PoliceSiren(pattern) => pattern.render(frame, strip),
            Self::ColorStripes(pattern) => pattern.render(frame, strip),
        }
    }

    /// Get the pattern ID for external observation
    pub fn id(&self) -> PatternId {
        match self {
            Self::RainbowCycle(_) => PatternId::RainbowCycle,
            Self::RainbowBloom(_) => PatternId::RainbowBloom,
            Self::ColorWipe(_) => PatternId::ColorWipe,
            Self::Scanner(_) => PatternId::Scanner,
            Self::Fade(_) => PatternId::Fade,
            Self::RgbFade(_) => PatternId::RgbFade,
            Self::Sparkle(_) => PatternId::Sparkle,
            Self::SparkleRandom(_) => PatternId::SparkleRandom,
            Self::TheaterChase(_) => PatternId::TheaterChase,
            Self::PoliceSiren(_) => PatternId::PoliceSiren,
            Self::ColorStripes(_) => PatternId::ColorStripes,
        }
    }
}

/// Clamp a pixel-derived step count into the step counter range
pub(crate) fn steps_for(pixel_count: usize) -> u16 {
    u16::try_from(pixel_count).unwrap_or(u16::MAX)
}
