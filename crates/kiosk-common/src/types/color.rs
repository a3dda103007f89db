use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::from_rgba(255, 255, 255, 255);
    pub const TRANSPARENT: Color = Color::from_rgba(0, 0, 0, 0);

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        match hex.len() {
            3 => {
                let mut channels = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    channels[i] = v * 17;
                }
                Some(Self::from_rgba(channels[0], channels[1], channels[2], 255))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self { r, g, b, a: 255 })
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }

    /// Parse a computed CSS color as browsers report it from
    /// `getComputedStyle`: `rgb(r, g, b)`, `rgba(r, g, b, a)` with a
    /// fractional alpha, hex, or the keywords `white` and `transparent`.
    pub fn from_css(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "transparent" => return Some(Self::TRANSPARENT),
            "white" => return Some(Self::WHITE),
            _ => {}
        }
        if s.starts_with('#') {
            return Self::from_hex(&s);
        }

        let inner = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        let channel = |p: &str| -> Option<u8> {
            let v: f64 = p.parse().ok()?;
            (0.0..=255.0).contains(&v).then(|| v.round() as u8)
        };

        match parts.as_slice() {
            [r, g, b] => Some(Self::from_rgba(channel(r)?, channel(g)?, channel(b)?, 255)),
            [r, g, b, a] => {
                let alpha = parse_alpha(a)?;
                Some(Self::from_rgba(channel(r)?, channel(g)?, channel(b)?, alpha))
            }
            _ => None,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    pub fn is_white(&self) -> bool {
        self.r == 255 && self.g == 255 && self.b == 255
    }
}

/// CSS alpha is either a 0..1 fraction or a percentage.
fn parse_alpha(s: &str) -> Option<u8> {
    let fraction = match s.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? / 100.0,
        None => s.parse::<f64>().ok()?,
    };
    (0.0..=1.0)
        .contains(&fraction)
        .then(|| (fraction * 255.0).round() as u8)
}
