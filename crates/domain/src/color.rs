// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// An employee's grid color as a `#RRGGBB` hex string.
///
/// Colors are normalized to lowercase so uniqueness checks are
/// case-insensitive. Construction does not validate the value; the
/// validation layer decides when a color is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color {
    value: String,
}

impl Color {
    /// Creates a new `Color`.
    ///
    /// The value is normalized to lowercase.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_lowercase(),
        }
    }

    /// Returns the color value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns whether the color value is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Computes the perceptual luminance of this color in the range 0..=1.
    ///
    /// Uses the Rec. 601 weighting (0.299 R + 0.587 G + 0.114 B) over the
    /// 8-bit channel values.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a `#RRGGBB` hex string.
    pub fn luminance(&self) -> Result<f64, DomainError> {
        let (r, g, b) = self.channels()?;
        Ok((0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0)
    }

    /// Splits the value into 8-bit RGB channels.
    fn channels(&self) -> Result<(u8, u8, u8), DomainError> {
        let hex: &str = self
            .value
            .strip_prefix('#')
            .ok_or_else(|| self.invalid("missing '#' prefix"))?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(self.invalid("expected 6 hex digits"));
        }
        let parse = |range: std::ops::Range<usize>| -> Result<u8, DomainError> {
            u8::from_str_radix(&hex[range], 16).map_err(|_| self.invalid("invalid hex digit"))
        };
        Ok((parse(0..2)?, parse(2..4)?, parse(4..6)?))
    }

    fn invalid(&self, reason: &str) -> DomainError {
        DomainError::InvalidColor {
            color: self.value.clone(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
