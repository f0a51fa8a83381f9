//! ANSI colour escapes used to decorate chart markers.

use std::{borrow::Cow, fmt, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit in '{0}'")]
    InvalidHexDigit(String),
    #[error("hex colour must be exactly 6 digits, got '{0}'")]
    InvalidHexLength(String),
}

/// Named foreground colours, in `colors` listing order.
static NAMED: [(&str, &str); 8] = [
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
];

/// A foreground colour escape sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnsiCode(Cow<'static, str>);

impl AnsiCode {
    pub const RESET: &'static str = "\x1b[0m";

    /// Marker colour used when none is configured.
    #[must_use]
    pub const fn yellow() -> Self {
        Self(Cow::Borrowed("\x1b[33m"))
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Cow::Owned(format!("\x1b[38;2;{r};{g};{b}m")))
    }

    /// Colour names or `#rrggbb`.
    ///
    /// # Errors
    /// [`ColorError`] when `s` is neither a known name nor a valid hex triplet.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let wanted = s.trim().to_ascii_lowercase();
        NAMED
            .iter()
            .find(|(name, _)| *name == wanted)
            .map_or_else(|| Self::from_hex(s.trim()), |(_, seq)| Ok(Self(Cow::Borrowed(*seq))))
    }

    /// # Errors
    /// [`ColorError`] for anything but six hex digits with an optional `#`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength(hex.to_owned()));
        }
        let byte = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit(hex.to_owned()))
        };
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    /// Every named colour with its escape.
    pub fn palette() -> impl Iterator<Item = (&'static str, AnsiCode)> {
        NAMED
            .iter()
            .map(|(name, seq)| (*name, Self(Cow::Borrowed(*seq))))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AnsiCode {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::RESET)
}
