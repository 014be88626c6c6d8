//! Area resolution: fit a 2:1 parliament frame inside an arbitrary rectangle.
//!
//! ```text
//!   ┌──────────────────────────────┐  raw drawing area
//!   │   ┌──────────────────────┐   │
//!   │   │      frame (2:1)     │   │  ← padded by 2p horizontally, p vertically
//!   │   │        ╭────╮        │   │
//!   │   │     ╭──╯    ╰──╮     │   │
//!   └───┴─────┴──────────┴─────┴───┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Raw available rectangle. Not required to be 2:1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawingArea {
    pub width: f64,
    pub height: f64,
}

impl DrawingArea {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The padded 2:1 region inside a [`DrawingArea`], origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParliamentFrame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
    pub area: f64,
}

/// Clamp `area` to the largest enclosed 2:1 rectangle, apply `padding`
/// and center the result.
pub fn resolve_frame(area: DrawingArea, padding: f64) -> Result<ParliamentFrame, LayoutError> {
    let invalid = || LayoutError::InvalidArea {
        width: area.width,
        height: area.height,
    };
    if !area.width.is_finite() || !area.height.is_finite() {
        return Err(invalid());
    }
    if area.width <= 0.0 || area.height <= 0.0 {
        return Err(invalid());
    }
    if !padding.is_finite() || padding < 0.0 {
        return Err(invalid());
    }

    let ratio = area.width / area.height;
    let (mut width, mut height) = (area.width, area.height);
    if ratio > 2.0 {
        width = area.height * 2.0;
    } else if ratio < 2.0 {
        height = area.width / 2.0;
    }
    width -= 2.0 * padding;
    height -= padding;

    if width <= 0.0 || height <= 0.0 {
        return Err(LayoutError::InvalidArea { width, height });
    }

    Ok(ParliamentFrame {
        width,
        height,
        left: (area.width - width) / 2.0,
        top: (area.height - height) / 2.0,
        area: width * height,
    })
}
