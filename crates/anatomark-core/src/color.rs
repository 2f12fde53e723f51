//! CSS-style color strings as used by diagnosis style catalogs and stroke colors.
//!
//! Supported notations: `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)`,
//! `rgba(r,g,b,a)` with `a` in `0.0..=1.0`, and a handful of named colors.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Returns the same color with its alpha multiplied by `factor` (clamped to `0..=1`).
    pub fn with_alpha_factor(self, factor: f64) -> Self {
        let a = (self.a as f64 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Alpha as a fraction in `0.0..=1.0`.
    pub fn alpha_f64(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({},{},{},{})",
                self.r,
                self.g,
                self.b,
                (self.alpha_f64() * 100.0).round() / 100.0
            )
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(input, hex);
        }

        let lower = input.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return parse_functional(input, body);
        }

        match lower.as_str() {
            "black" => Ok(Rgba::BLACK),
            "white" => Ok(Rgba::WHITE),
            "red" => Ok(Rgba::RED),
            "transparent" => Ok(Rgba::new(0, 0, 0, 0)),
            _ => Err(ColorError::Unrecognized(input.to_string())),
        }
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn parse_hex(input: &str, hex: &str) -> Result<Rgba, ColorError> {
    let invalid = |component: &str| ColorError::InvalidComponent {
        input: input.to_string(),
        component: component.to_string(),
    };
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid(s));

    match hex.len() {
        3 => {
            let mut out = [0u8; 3];
            for (slot, c) in out.iter_mut().zip(hex.chars()) {
                let v = c.to_digit(16).ok_or_else(|| invalid(&c.to_string()))? as u8;
                *slot = v * 17;
            }
            Ok(Rgba::rgb(out[0], out[1], out[2]))
        }
        6 | 8 => {
            let r = channel(hex.get(0..2).ok_or_else(|| invalid(hex))?)?;
            let g = channel(hex.get(2..4).ok_or_else(|| invalid(hex))?)?;
            let b = channel(hex.get(4..6).ok_or_else(|| invalid(hex))?)?;
            let a = match hex.get(6..8) {
                Some(a) => channel(a)?,
                None => 255,
            };
            Ok(Rgba::new(r, g, b, a))
        }
        _ => Err(ColorError::Unrecognized(input.to_string())),
    }
}

fn parse_functional(input: &str, body: &str) -> Result<Rgba, ColorError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(ColorError::Unrecognized(input.to_string()));
    }

    let invalid = |component: &str| ColorError::InvalidComponent {
        input: input.to_string(),
        component: component.to_string(),
    };

    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part.parse::<u8>().map_err(|_| invalid(part))?;
    }

    let a = match parts.get(3) {
        Some(part) => {
            let alpha: f64 = part.parse().map_err(|_| invalid(part))?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(invalid(part));
            }
            (alpha * 255.0).round() as u8
        }
        None => 255,
    };

    Ok(Rgba::new(rgb[0], rgb[1], rgb[2], a))
}
