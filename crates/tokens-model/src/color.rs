//! Normalized RGB(A) colors and their hexadecimal encoding.

use serde::{Deserialize, Serialize};

/// A color with channels in the `0.0..=1.0` range.
///
/// This is the shape the variable store uses for `COLOR` values. Alpha is
/// optional; an absent alpha means fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
}

impl Rgba {
    /// Opaque color without an alpha component.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: None }
    }

    /// Color with an explicit alpha component.
    #[must_use]
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Encode as `#rrggbb`, or `#rrggbbaa` when alpha is present and not 1.
    ///
    /// Channels are clamped to `0.0..=1.0` (NaN counts as 0) before being
    /// scaled by 255 and rounded, so out-of-range input never panics.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let mut hex = format!(
            "#{:02x}{:02x}{:02x}",
            channel_byte(self.r),
            channel_byte(self.g),
            channel_byte(self.b)
        );
        if let Some(alpha) = self.a.map(clamp_unit)
            && alpha != 1.0
        {
            hex.push_str(&format!("{:02x}", channel_byte(alpha)));
        }
        hex
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn channel_byte(value: f64) -> u8 {
    // Clamped to [0, 255] so the cast cannot truncate.
    (clamp_unit(value) * 255.0).round() as u8
}
