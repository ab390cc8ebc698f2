use crate::color::Rgb;

/// Map a position on the 256-step color wheel to a color
///
/// The colours are a transition r - g - b - back to r.
pub const fn wheel(position: u8) -> Rgb {
    let position = 255 - position;
    if position < 85 {
        return Rgb {
            r: 255 - position * 3,
            g: 0,
            b: position * 3,
        };
    }
    if position < 170 {
        let position = position - 85;
        return Rgb {
            r: 0,
            g: position * 3,
            b: 255 - position * 3,
        };
    }
    let position = position - 170;
    Rgb {
        r: position * 3,
        g: 255 - position * 3,
        b: 0,
    }
}
