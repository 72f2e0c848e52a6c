//! GaugeColor type — the public color representation for floem-gauge.
//!
//! Stores RGBA as f64 values in 0.0–1.0 range. Conversion to the renderer's
//! color type happens only at the paint boundary.

/// RGBA color with components in the 0.0–1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeColor {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

impl GaugeColor {
    pub const WHITE: GaugeColor = GaugeColor {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };

    pub const BLACK: GaugeColor = GaugeColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    /// Red component (0.0–1.0).
    pub fn r(&self) -> f64 {
        self.r
    }
    /// Green component (0.0–1.0).
    pub fn g(&self) -> f64 {
        self.g
    }
    /// Blue component (0.0–1.0).
    pub fn b(&self) -> f64 {
        self.b
    }
    /// Alpha component (0.0–1.0).
    pub fn a(&self) -> f64 {
        self.a
    }
}

impl Default for GaugeColor {
    fn default() -> Self {
        Self {
            r: 0.5,
            g: 0.5,
            b: 0.5,
            a: 1.0,
        }
    }
}

impl GaugeColor {
    /// Create from f64 RGBA (all 0.0–1.0).
    pub const fn from_rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 0–255 RGB values with full opacity.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a hex string (with or without `#`, 6 or 8 chars).
    ///
    /// 8-char hex is interpreted as RRGGBBAA. 6-char hex defaults to full opacity.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let stripped = hex.trim_start_matches('#');
        if !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match stripped.len() {
            6 => {
                let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
                let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
                let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
                Some(Self::from_rgb8(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
                let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
                let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
                let a = u8::from_str_radix(&stripped[6..8], 16).ok()?;
                Some(Self::from_rgba(
                    r as f64 / 255.0,
                    g as f64 / 255.0,
                    b as f64 / 255.0,
                    a as f64 / 255.0,
                ))
            }
            _ => None,
        }
    }

    /// Componentwise linear blend toward `other` by `t` (clamped to 0.0–1.0).
    ///
    /// Alpha is blended as well.
    pub fn lerp(&self, other: GaugeColor, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: crate::math::lerp(self.r, other.r, t),
            g: crate::math::lerp(self.g, other.g, t),
            b: crate::math::lerp(self.b, other.b, t),
            a: crate::math::lerp(self.a, other.a, t),
        }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(&self, a: f64) -> Self {
        Self { a, ..*self }
    }

    /// Convert to the renderer's color type.
    pub fn to_peniko(self) -> floem::peniko::Color {
        floem::peniko::Color::rgba(self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parses_six_and_eight_chars() {
        let c = GaugeColor::from_hex("#FF0000").unwrap();
        assert_eq!(c, GaugeColor::from_rgba(1.0, 0.0, 0.0, 1.0));

        let c = GaugeColor::from_hex("00000000").unwrap();
        assert_eq!(c.a(), 0.0);

        assert!(GaugeColor::from_hex("xyz").is_none());
        assert!(GaugeColor::from_hex("1234").is_none());
    }

    #[test]
    fn lerp_blends_componentwise() {
        let a = GaugeColor::from_rgba(0.0, 0.0, 0.0, 1.0);
        let b = GaugeColor::from_rgba(1.0, 0.5, 0.0, 0.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid, GaugeColor::from_rgba(0.5, 0.25, 0.0, 0.5));

        // t is clamped
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp(b, -1.0), a);
    }
}
