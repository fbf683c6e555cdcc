// color.rs - Border Color Model
//
// Turns a `#RRGGBB` argument into the two colors the overlay switches
// between: the primary color shown while focused and a dimmed variant
// shown otherwise. Channels are kept at X11's native 16-bit depth.

use crate::constants;
use crate::error::FrameError;

/// One color at X11 channel depth (0..=65535 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb16 {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl Rgb16 {
    pub fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    /// Scale from 8-bit channels the same way XAllocColor callers usually do (`v * 256`)
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        let scale = |v: u8| u16::from(v) * constants::colors::CHANNEL_SCALE;
        Self::new(scale(red), scale(green), scale(blue))
    }

    /// Multiply every channel by `factor`, truncating toward zero
    pub fn attenuate(self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let dim = |v: u16| (f64::from(v) * factor) as u16;
        Self::new(dim(self.red), dim(self.green), dim(self.blue))
    }
}

/// Which member of the pair is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Primary,
    Dimmed,
}

/// Primary color and its dimmed variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub primary: Rgb16,
    pub dimmed: Rgb16,
}

impl ColorPair {
    pub fn get(&self, shade: Shade) -> Rgb16 {
        match shade {
            Shade::Primary => self.primary,
            Shade::Dimmed => self.dimmed,
        }
    }
}

/// Pixel values handed out by the colormap for a `ColorPair`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: u32,
    pub dimmed: u32,
}

impl Palette {
    pub fn pixel(&self, shade: Shade) -> u32 {
        match shade {
            Shade::Primary => self.primary,
            Shade::Dimmed => self.dimmed,
        }
    }
}

/// Parse `#RRGGBB` using the default dim factor.
pub fn parse_color(hex: &str) -> Result<ColorPair, FrameError> {
    parse_color_with_dim(hex, constants::colors::DIM_FACTOR)
}

/// Parse `#RRGGBB` (hex digits in either case) and derive the dimmed
/// variant with `dim_factor`, clamped to `[0, 1]`.
///
/// # Errors
/// `InvalidColorFormat` unless the input is exactly `#` plus six hex digits.
pub fn parse_color_with_dim(hex: &str, dim_factor: f64) -> Result<ColorPair, FrameError> {
    let invalid = || FrameError::InvalidColorFormat(hex.to_string());

    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    let primary = Rgb16::from_rgb8(channel(0)?, channel(2)?, channel(4)?);

    Ok(ColorPair {
        primary,
        dimmed: primary.attenuate(dim_factor),
    })
}
