//! Percentage geometry for placed items.
//!
//! Positions and sizes are percentages of the floor plan container, so the
//! layout is independent of the rendered pixel size.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower bound of a percentage coordinate.
pub const PERCENT_MIN: f64 = 0.0;

/// Upper bound of a percentage coordinate.
pub const PERCENT_MAX: f64 = 100.0;

/// Clamps a coordinate into `[0, 100]`.
///
/// NaN maps to `0`; infinities map to the nearest bound.
#[must_use]
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        PERCENT_MIN
    } else {
        value.clamp(PERCENT_MIN, PERCENT_MAX)
    }
}

/// Position of an item's anchor, in percent of the container.
///
/// Both coordinates are always within `[0, 100]`; every constructor clamps.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawPoint", into = "RawPoint"))]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Creates a position, clamping both coordinates into bounds.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    /// The centre of the container.
    #[must_use]
    pub fn center() -> Self {
        Self { x: 50.0, y: 50.0 }
    }

    /// Horizontal coordinate.
    #[must_use]
    pub fn x(self) -> f64 {
        self.x
    }

    /// Vertical coordinate.
    #[must_use]
    pub fn y(self) -> f64 {
        self.y
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::center()
    }
}

/// Footprint of an item, in percent of the container.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawSize", into = "RawSize"))]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a size, clamping both extents into `[0, 100]`.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: clamp_percent(width),
            height: clamp_percent(height),
        }
    }

    /// Width in percent.
    #[must_use]
    pub fn width(self) -> f64 {
        self.width
    }

    /// Height in percent.
    #[must_use]
    pub fn height(self) -> f64 {
        self.height
    }
}

// Wire shapes: deserialized values pass back through the clamping constructors.

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
}

#[cfg(feature = "serde")]
impl From<RawPoint> for Position {
    fn from(raw: RawPoint) -> Self {
        Self::new(raw.x, raw.y)
    }
}

#[cfg(feature = "serde")]
impl From<Position> for RawPoint {
    fn from(p: Position) -> Self {
        Self { x: p.x, y: p.y }
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawSize {
    width: f64,
    height: f64,
}

#[cfg(feature = "serde")]
impl From<RawSize> for Size {
    fn from(raw: RawSize) -> Self {
        Self::new(raw.width, raw.height)
    }
}

#[cfg(feature = "serde")]
impl From<Size> for RawSize {
    fn from(s: Size) -> Self {
        Self {
            width: s.width,
            height: s.height,
        }
    }
}
