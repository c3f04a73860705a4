//! Requested icon size.

use crate::error::IconError;

/// Side length used when the size argument is missing or not a number.
pub const DEFAULT_SIZE: u32 = 32;

/// Largest canvas we are willing to allocate.
pub const MAX_SIZE: u32 = 4096;

/// Side length of the square output canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize(u32);

impl Default for IconSize {
    fn default() -> Self {
        IconSize(DEFAULT_SIZE)
    }
}

impl IconSize {
    /// Interpret the optional size argument.
    ///
    /// Anything that is not a decimal number falls back to [`DEFAULT_SIZE`].
    /// A number that cannot describe a canvas (zero, negative, infinite, or
    /// larger than [`MAX_SIZE`]) is an error.
    pub fn from_arg(arg: Option<&str>) -> Result<Self, IconError> {
        match arg.and_then(|s| s.parse::<f64>().ok()) {
            Some(value) => Self::from_value(value),
            None => Ok(Self::default()),
        }
    }

    /// Round a numeric size to whole pixels.
    pub fn from_value(value: f64) -> Result<Self, IconError> {
        if !value.is_finite() {
            return Err(IconError::InvalidSize(value.to_string()));
        }

        let pixels = value.round();
        if pixels < 1.0 || pixels > f64::from(MAX_SIZE) {
            return Err(IconError::InvalidSize(value.to_string()));
        }

        Ok(IconSize(pixels as u32))
    }

    pub fn pixels(self) -> u32 {
        self.0
    }
}
