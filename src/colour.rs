use crate::RenderError;
use serde::Deserialize;

/// A colour, expressed in RGB or Grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug, Deserialize)]
#[serde(try_from = "String")]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Parse a CSS-style hex colour such as `#1f2937` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Colour, RenderError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(RenderError::InvalidColour(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| RenderError::InvalidColour(hex.to_string()))
        };
        Ok(Colour::new_rgb_bytes(
            channel(0..2)?,
            channel(2..4)?,
            channel(4..6)?,
        ))
    }
}

impl TryFrom<String> for Colour {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Colour::from_hex(&value)
    }
}

macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        Colour::RGB {
            r: $r as f32 / 255.0,
            g: $g as f32 / 255.0,
            b: $b as f32 / 255.0,
        }
    };
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    /// Body text on light backgrounds
    pub const SLATE_800: Colour = rgb!(0x1f, 0x29, 0x37);
    /// Secondary text: dates, contact details
    pub const SLATE_500: Colour = rgb!(0x6b, 0x72, 0x80);
    pub const SLATE_200: Colour = rgb!(0xe5, 0xe7, 0xeb);
    pub const SLATE_100: Colour = rgb!(0xf3, 0xf4, 0xf6);
    pub const BLUE_600: Colour = rgb!(0x25, 0x63, 0xeb);
    pub const NAVY_900: Colour = rgb!(0x1e, 0x29, 0x3b);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colours() {
        let colour = Colour::from_hex("#ff8000").expect("valid colour");
        assert_eq!(
            colour,
            Colour::RGB {
                r: 1.0,
                g: 128.0 / 255.0,
                b: 0.0
            }
        );
        assert_eq!(Colour::from_hex("2563eb").ok(), Some(colours::BLUE_600));
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(matches!(
            Colour::from_hex("#12345"),
            Err(RenderError::InvalidColour(_))
        ));
        assert!(Colour::from_hex("#gg0000").is_err());
    }

    #[test]
    fn deserializes_from_json_strings() {
        let colour: Colour = serde_json::from_str("\"#000000\"").expect("valid json colour");
        assert_eq!(colour, Colour::new_rgb_bytes(0, 0, 0));
    }
}
