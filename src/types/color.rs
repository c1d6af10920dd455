//! Color payload representation and hex parsing.

use super::color_space::ColorSpace;

/// The channel representation a client chose for a color definition.
///
/// Exactly one representation is active at a time (the last setter call
/// wins); alpha is carried separately on the definition. Hex strings are
/// stored as written and parsed during validation, so setter calls never
/// fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// A hex string such as `#262D44` or `#FFF`.
    Hex(String),
    /// 8-bit RGB channels.
    Rgb { red: u8, green: u8, blue: u8 },
    /// Floating-point RGB channels in `[0, 1]`.
    RgbFloat { red: f64, green: f64, blue: f64 },
    /// A single white level in `[0, 1]`.
    White(f64),
}

/// Resolved numeric components, ready for emission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Components {
    Rgb { red: f64, green: f64, blue: f64 },
    White(f64),
}

impl ColorValue {
    /// Resolve the payload against a color space.
    ///
    /// Parses hex strings, range-checks float channels, and rejects
    /// representations that do not belong to the space (RGB on
    /// grayscale, white on sRGB). The error string becomes the
    /// `PayloadMismatch` message.
    pub fn resolve(&self, space: ColorSpace) -> Result<Components, String> {
        let components = match self {
            ColorValue::Hex(s) => {
                let (red, green, blue) = parse_hex(s)?;
                Components::Rgb {
                    red: f64::from(red) / 255.0,
                    green: f64::from(green) / 255.0,
                    blue: f64::from(blue) / 255.0,
                }
            }
            ColorValue::Rgb { red, green, blue } => Components::Rgb {
                red: f64::from(*red) / 255.0,
                green: f64::from(*green) / 255.0,
                blue: f64::from(*blue) / 255.0,
            },
            ColorValue::RgbFloat { red, green, blue } => {
                for (name, v) in [("red", *red), ("green", *green), ("blue", *blue)] {
                    if !(0.0..=1.0).contains(&v) {
                        return Err(format!("{} component {} is outside [0, 1]", name, v));
                    }
                }
                Components::Rgb {
                    red: *red,
                    green: *green,
                    blue: *blue,
                }
            }
            ColorValue::White(w) => {
                if !(0.0..=1.0).contains(w) {
                    return Err(format!("white component {} is outside [0, 1]", w));
                }
                Components::White(*w)
            }
        };

        match (space, &components) {
            (ColorSpace::Srgb, Components::Rgb { .. }) => Ok(components),
            (ColorSpace::Grayscale, Components::White(_)) => Ok(components),
            (ColorSpace::Srgb, Components::White(_)) => {
                Err("white component set on an sRGB color space".to_string())
            }
            (ColorSpace::Grayscale, Components::Rgb { .. }) => {
                Err("RGB components set on a grayscale color space".to_string())
            }
        }
    }
}

/// Parse a hex color string.
///
/// Supports `#RGB` (expanded to 6 digits) and `#RRGGBB`; the leading
/// `#` is optional.
pub fn parse_hex(s: &str) -> Result<(u8, u8, u8), String> {
    let trimmed = s.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);

    // Length checks below count bytes; non-ASCII input could otherwise
    // slice inside a character.
    if !hex.is_ascii() {
        return Err(format!(
            "invalid hex color '{}' (expected #RGB or #RRGGBB)",
            s
        ));
    }

    match hex.len() {
        3 => {
            let mut chars = hex.chars();
            let r = parse_hex_digit(chars.next().unwrap_or('x'))?;
            let g = parse_hex_digit(chars.next().unwrap_or('x'))?;
            let b = parse_hex_digit(chars.next().unwrap_or('x'))?;
            Ok((r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => {
            let r = parse_hex_byte(&hex[0..2])?;
            let g = parse_hex_byte(&hex[2..4])?;
            let b = parse_hex_byte(&hex[4..6])?;
            Ok((r, g, b))
        }
        _ => Err(format!(
            "invalid hex color '{}' (expected #RGB or #RRGGBB)",
            s
        )),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8, String> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| format!("invalid hex digit '{}'", c))
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8, String> {
    u8::from_str_radix(s, 16).map_err(|_| format!("invalid hex byte '{}'", s))
}
