//! Display theme + fluent builder.

use crate::core::{
    color::AnsiCode,
    constants::{DEFAULT_BACKGROUND, DEFAULT_MARKER, DEFAULT_STROKE_SIZE},
    error::ConfigError,
};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: char,
    pub marker: char,
    /// Written before every marker, e.g. a colour escape.
    pub marker_prefix: String,
    /// Written after every marker, e.g. a reset escape.
    pub marker_suffix: String,
    pub stroke_size: f32,
    pub columns: usize,
    pub rows: usize,
}

impl Theme {
    #[inline]
    #[must_use]
    pub fn builder(columns: usize, rows: usize) -> ThemeBuilder {
        ThemeBuilder::new(columns, rows)
    }
}

#[derive(Debug)]
pub struct ThemeBuilder {
    columns: usize,
    rows: usize,
    background: Option<char>,
    marker: Option<char>,
    decoration: Option<(String, String)>,
    stroke_size: Option<f32>,
}

impl ThemeBuilder {
    pub(crate) fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            background: None,
            marker: None,
            decoration: None,
            stroke_size: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn background(mut self, c: char) -> Self {
        self.background = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn marker(mut self, c: char) -> Self {
        self.marker = Some(c);
        self
    }
    #[inline]
    #[must_use]
    pub fn stroke_size(mut self, s: f32) -> Self {
        self.stroke_size = Some(s);
        self
    }
    /// Raw text around each marker.
    #[inline]
    #[must_use]
    pub fn decoration(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.decoration = Some((prefix.into(), suffix.into()));
        self
    }
    /// Colour the marker and reset afterwards.
    #[inline]
    #[must_use]
    pub fn color(self, c: &AnsiCode) -> Self {
        self.decoration(c.as_str(), AnsiCode::RESET)
    }

    /// # Errors
    /// [`ConfigError::InvalidStroke`] if the stroke size is negative or not finite.
    pub fn build(self) -> Result<Theme, ConfigError> {
        let stroke_size = self.stroke_size.unwrap_or(DEFAULT_STROKE_SIZE);
        if !stroke_size.is_finite() || stroke_size < 0.0 {
            return Err(ConfigError::InvalidStroke(stroke_size));
        }
        let (marker_prefix, marker_suffix) = self.decoration.unwrap_or_default();
        Ok(Theme {
            background: self.background.unwrap_or(DEFAULT_BACKGROUND),
            marker: self.marker.unwrap_or(DEFAULT_MARKER),
            marker_prefix,
            marker_suffix,
            stroke_size,
            columns: self.columns,
            rows: self.rows,
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ThemeBuilder> for Result<Theme, ConfigError> {
    fn from(b: ThemeBuilder) -> Self {
        b.build()
    }
}
