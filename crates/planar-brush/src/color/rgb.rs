//! 8-bit RGB triple

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// An 8-bit-per-channel RGB triple, no alpha.
///
/// This is the unit the brush builder consumes: one decoded pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new color from channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    ///
    /// # Example
    /// ```
    /// use planar_brush::Rgb;
    /// let orange = Rgb::from_bytes([255, 128, 0]);
    /// assert_eq!(orange.g, 128);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The value (lightness proxy): `max(r, g, b)`.
    ///
    /// ```
    /// use planar_brush::Rgb;
    /// assert_eq!(Rgb::new(200, 50, 90).value(), 200);
    /// ```
    #[inline]
    pub fn value(self) -> u8 {
        self.r.max(self.g).max(self.b)
    }

    /// Apply a per-channel mapping, e.g. a gamma lookup table.
    #[inline]
    pub fn map(self, mut f: impl FnMut(u8) -> u8) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#RRGGBB`, `RRGGBB` or decimal `R,G,B`.
    ///
    /// ```
    /// use planar_brush::Rgb;
    ///
    /// assert_eq!("#C83232".parse::<Rgb>().unwrap(), Rgb::new(200, 50, 50));
    /// assert_eq!("200, 50, 50".parse::<Rgb>().unwrap(), Rgb::new(200, 50, 50));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains(',') {
            return parse_decimal(s);
        }
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.is_empty() {
            return Err(ParseColorError::Empty);
        }
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::BadHex(s.to_string()));
        }
        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| ParseColorError::BadHex(s.to_string()))?;
        let [_, r, g, b] = packed.to_be_bytes();
        Ok(Self::new(r, g, b))
    }
}

fn parse_decimal(s: &str) -> Result<Rgb, ParseColorError> {
    let fields: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = fields.as_slice() else {
        return Err(ParseColorError::ChannelCount(fields.len()));
    };
    let channel = |field: &str| {
        field
            .parse::<u8>()
            .map_err(|_| ParseColorError::BadChannel(field.to_string()))
    };
    Ok(Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_channel_max() {
        assert_eq!(Rgb::BLACK.value(), 0);
        assert_eq!(Rgb::WHITE.value(), 255);
        assert_eq!(Rgb::new(10, 200, 30).value(), 200);
        assert_eq!(Rgb::new(10, 20, 130).value(), 130);
        assert_eq!(Rgb::new(127, 127, 127).value(), 127);
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#FF8000".parse::<Rgb>().unwrap(), Rgb::new(255, 128, 0));
        assert_eq!("ff8000".parse::<Rgb>().unwrap(), Rgb::new(255, 128, 0));
        assert_eq!("  #000000 ".parse::<Rgb>().unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!("200,50,50".parse::<Rgb>().unwrap(), Rgb::new(200, 50, 50));
        assert_eq!(" 0, 255 ,7 ".parse::<Rgb>().unwrap(), Rgb::new(0, 255, 7));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("".parse::<Rgb>(), Err(ParseColorError::Empty));
        assert_eq!("#".parse::<Rgb>(), Err(ParseColorError::Empty));
        assert_eq!(
            "#abc".parse::<Rgb>(),
            Err(ParseColorError::BadHex("#abc".to_string()))
        );
        assert_eq!(
            "#GG0000".parse::<Rgb>(),
            Err(ParseColorError::BadHex("#GG0000".to_string()))
        );
        assert_eq!(
            "+12345".parse::<Rgb>(),
            Err(ParseColorError::BadHex("+12345".to_string()))
        );
        assert!("#ééé".parse::<Rgb>().is_err());
        assert_eq!("1,2".parse::<Rgb>(), Err(ParseColorError::ChannelCount(2)));
        assert_eq!(
            "1,2,256".parse::<Rgb>(),
            Err(ParseColorError::BadChannel("256".to_string()))
        );
    }

    #[test]
    fn test_parse_error_messages() {
        assert_eq!(
            "#12345".parse::<Rgb>().unwrap_err().to_string(),
            "'#12345' is not a #RRGGBB color"
        );
        assert_eq!(
            "1,2,3,4".parse::<Rgb>().unwrap_err().to_string(),
            "expected R,G,B but found 4 channel(s)"
        );
        assert_eq!(
            "1,x,3".parse::<Rgb>().unwrap_err().to_string(),
            "channel 'x' is not a number in 0..=255"
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let color = Rgb::new(0x12, 0xAB, 0xEF);
        assert_eq!(color.to_string(), "#12ABEF");
        assert_eq!(color.to_string().parse::<Rgb>().unwrap(), color);
    }

    #[test]
    fn test_map_applies_per_channel() {
        let halved = Rgb::new(200, 100, 50).map(|c| c / 2);
        assert_eq!(halved, Rgb::new(100, 50, 25));
    }
}
