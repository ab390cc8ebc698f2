use crate::color::Rgb;

/// Red channel of a packed `0xRRGGBB` color
#[inline]
pub const fn red(color: u32) -> u8 {
    ((color >> 16) & 0xFF) as u8
}

/// Green channel of a packed `0xRRGGBB` color
#[inline]
pub const fn green(color: u32) -> u8 {
    ((color >> 8) & 0xFF) as u8
}

/// Blue channel of a packed `0xRRGGBB` color
#[inline]
pub const fn blue(color: u32) -> u8 {
    (color & 0xFF) as u8
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: red(color),
        g: green(color),
        b: blue(color),
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Dim a color by shifting every channel `amount` bits to the right
///
/// Each shift roughly halves the brightness, eight shifts take pure white
/// to black.
#[inline]
pub fn dim(color: Rgb, amount: u8) -> Rgb {
    let shift = u32::from(amount);
    Rgb {
        r: color.r.checked_shr(shift).unwrap_or(0),
        g: color.g.checked_shr(shift).unwrap_or(0),
        b: color.b.checked_shr(shift).unwrap_or(0),
    }
}

/// Linear interpolation between two colors at `step` out of `total` steps
///
/// Each channel is computed as `(from * (total - step) + to * step) / total`
/// so the truncation happens once. `total` of zero is treated as one, and
/// `step` is clamped to `total`.
#[allow(clippy::cast_possible_truncation)]
pub fn fade_color(from: Rgb, to: Rgb, step: u16, total: u16) -> Rgb {
    let total = u32::from(total.max(1));
    let step = u32::from(step).min(total);
    let channel = |a: u8, b: u8| -> u8 {
        ((u32::from(a) * (total - step) + u32::from(b) * step) / total) as u8
    };

    Rgb {
        r: channel(from.r, to.r),
        g: channel(from.g, to.g),
        b: channel(from.b, to.b),
    }
}
