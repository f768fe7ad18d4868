//! Text box and the document-wide text style.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::types::{CanvasPoint, CanvasRect, CanvasSize};

/// Font weight shared by every box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FromStr for FontWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" | "400" => Ok(Self::Normal),
            "bold" | "700" => Ok(Self::Bold),
            other => Err(format!("Unknown font weight: {}", other)),
        }
    }
}

/// Font slant shared by every box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

impl FromStr for FontSlant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "italic" | "oblique" => Ok(Self::Italic),
            other => Err(format!("Unknown font style: {}", other)),
        }
    }
}

/// Document-wide text style. Boxes carry no style of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    /// Family name, or one of the generic "Sans", "Serif", "Monospace".
    pub font_family: String,
    /// Font size in layout pixels.
    pub font_size: f64,
    /// CSS-style hex color, `#rrggbb` or `#rgb`.
    pub font_color: String,
    pub font_weight: FontWeight,
    pub font_style: FontSlant,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Sans".to_string(),
            font_size: 16.0,
            font_color: "#000000".to_string(),
            font_weight: FontWeight::Normal,
            font_style: FontSlant::Normal,
        }
    }
}

impl TextStyle {
    pub fn is_bold(&self) -> bool {
        self.font_weight == FontWeight::Bold
    }

    pub fn is_italic(&self) -> bool {
        self.font_style == FontSlant::Italic
    }

    /// Parses `font_color` into RGB. Returns `None` for malformed input.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.font_color)
    }
}

/// Parses `#rrggbb` or `#rgb`.
pub fn parse_hex_color(input: &str) -> Option<(u8, u8, u8)> {
    let hex = input.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}

/// A free-positioned text element on the label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub id: u32,
    /// Left edge in layout px.
    pub x: f64,
    /// Top edge in layout px.
    pub y: f64,
    pub text: String,
    /// Measured size in layout px, used for bounds and hit-testing.
    pub footprint: CanvasSize,
}

impl TextBox {
    pub fn new(id: u32, x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            id,
            x,
            y,
            text: text.into(),
            footprint: CanvasSize::default(),
        }
    }

    pub fn with_footprint(mut self, width: f64, height: f64) -> Self {
        self.footprint = CanvasSize::new(width, height);
        self
    }

    pub fn top_left(&self) -> CanvasPoint {
        CanvasPoint::new(self.x, self.y)
    }

    pub fn bounds(&self) -> CanvasRect {
        CanvasRect::new(self.x, self.y, self.footprint.width, self.footprint.height)
    }
}

impl fmt::Display for TextBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} at ({:.1}, {:.1}) \"{}\"", self.id, self.x, self.y, self.text)
    }
}
