//! Audio encoding value object

use std::fmt;

/// Encodings understood by the recognition service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioEncoding {
    /// Uncompressed 16-bit signed little-endian samples
    Linear16,
    /// Free Lossless Audio Codec
    #[default]
    Flac,
    /// 8-bit companded samples (G.711 mu-law)
    Mulaw,
    /// Adaptive Multi-Rate narrowband, 8 kHz only
    Amr,
    /// Adaptive Multi-Rate wideband, 16 kHz only
    AmrWb,
}

impl AudioEncoding {
    /// Get the string identifier for this encoding
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linear16 => "LINEAR16",
            Self::Flac => "FLAC",
            Self::Mulaw => "MULAW",
            Self::Amr => "AMR",
            Self::AmrWb => "AMR_WB",
        }
    }

    /// Wire value of the encoding enum
    pub const fn wire_value(&self) -> i32 {
        match self {
            Self::Linear16 => 1,
            Self::Flac => 2,
            Self::Mulaw => 3,
            Self::Amr => 4,
            Self::AmrWb => 5,
        }
    }
}

impl fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
