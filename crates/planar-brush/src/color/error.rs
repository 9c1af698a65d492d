use std::fmt;

/// Why a color argument could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Nothing but whitespace (or a lone `#`).
    Empty,
    /// Hex form without exactly six digits, or with a non-hex digit.
    BadHex(String),
    /// Decimal form with other than three comma-separated fields.
    ChannelCount(usize),
    /// Decimal field that is not an integer in 0..=255.
    BadChannel(String),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::Empty => f.write_str("empty color"),
            ParseColorError::BadHex(s) => write!(f, "'{s}' is not a #RRGGBB color"),
            ParseColorError::ChannelCount(n) => {
                write!(f, "expected R,G,B but found {n} channel(s)")
            }
            ParseColorError::BadChannel(s) => {
                write!(f, "channel '{s}' is not a number in 0..=255")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}
