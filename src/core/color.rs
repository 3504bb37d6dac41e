/// 8-bit sRGB triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgba(r,g,b,a)` string for canvas fill/stroke styles.
    pub fn css_rgba(&self, alpha: f32) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

#[inline]
fn to_channel(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// HSL to RGB with all components in `[0, 1]`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Rgb {
    let a = s * l.min(1.0 - l);
    let f = |n: f32| {
        let k = (n + h * 12.0).rem_euclid(12.0);
        let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        to_channel(c)
    };
    Rgb::new(f(0.0), f(8.0), f(4.0))
}

/// Palette colour for a hue in degrees.
#[inline]
pub fn hue_to_rgb(hue_deg: f32, saturation: f32, lightness: f32) -> Rgb {
    hsl_to_rgb(hue_deg.rem_euclid(360.0) / 360.0, saturation, lightness)
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Per-channel linear mix, rounded.
pub fn mix(from: Rgb, to: Rgb, t: f32) -> Rgb {
    let ch = |a: u8, b: u8| lerp(a as f32, b as f32, t).round().clamp(0.0, 255.0) as u8;
    Rgb::new(ch(from.r, to.r), ch(from.g, to.g), ch(from.b, to.b))
}

/// Symmetric cubic ease: accelerates until 0.5, then decelerates.
#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
