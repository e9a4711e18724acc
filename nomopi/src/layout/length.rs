//! Layout sizing types.
//!
//! Core types for specifying how a widget claims space from its container,
//! and how a container insets its content.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::primitives::Size;

/// Sizing policy of a widget along its container's main axis.
///
/// Fixed at construction. The cross axis always receives the container's
/// full inner cross dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SizePolicy {
    /// Share the space left after fixed siblings, weighted against other
    /// Fill siblings.
    Fill { weight: f32 },
    /// A fixed fraction of the container's usable span.
    Proportional { fraction: f32 },
    /// An exact pixel extent chosen by the caller.
    PixelPerfect { pixels: u32 },
}

impl Default for SizePolicy {
    fn default() -> Self {
        SizePolicy::Fill { weight: 1.0 }
    }
}

impl SizePolicy {
    /// Fill with weight 1.
    pub fn fill() -> Self {
        Self::default()
    }

    pub fn fill_weighted(weight: f32) -> Self {
        SizePolicy::Fill { weight }
    }

    pub fn proportional(fraction: f32) -> Self {
        SizePolicy::Proportional { fraction }
    }

    pub fn pixels(pixels: u32) -> Self {
        SizePolicy::PixelPerfect { pixels }
    }

    /// Whether this policy participates in Fill distribution.
    pub fn is_fill(&self) -> bool {
        matches!(self, SizePolicy::Fill { .. })
    }

    /// Fill weight, or 0 for non-Fill policies.
    pub fn weight(&self) -> f32 {
        match self {
            SizePolicy::Fill { weight } => *weight,
            _ => 0.0,
        }
    }

    /// Reject weights and fractions that cannot produce a sane layout.
    pub fn validate(&self) -> Result<()> {
        match *self {
            SizePolicy::Fill { weight } => {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(LayoutError::InvalidWeight(weight));
                }
            }
            SizePolicy::Proportional { fraction } => {
                if !is_unit_fraction(fraction) {
                    return Err(LayoutError::InvalidFraction(fraction));
                }
            }
            SizePolicy::PixelPerfect { .. } => {}
        }
        Ok(())
    }
}

/// Direction in which a container places its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Children flow left to right (HBox).
    Horizontal,
    /// Children flow top to bottom (VBox).
    Vertical,
}

impl Orientation {
    /// Main-axis extent of a size.
    #[inline]
    pub fn main(&self, size: Size) -> u32 {
        match self {
            Orientation::Horizontal => size.width,
            Orientation::Vertical => size.height,
        }
    }

    /// Cross-axis extent of a size.
    #[inline]
    pub fn cross(&self, size: Size) -> u32 {
        match self {
            Orientation::Horizontal => size.height,
            Orientation::Vertical => size.width,
        }
    }

    /// Build a size from main/cross extents.
    #[inline]
    pub fn size(&self, main: u32, cross: u32) -> Size {
        match self {
            Orientation::Horizontal => Size::new(main, cross),
            Orientation::Vertical => Size::new(cross, main),
        }
    }
}

/// A screen axis, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => f.write_str("horizontal"),
            Axis::Vertical => f.write_str("vertical"),
        }
    }
}

/// One side of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Top => f.write_str("top"),
            Side::Bottom => f.write_str("bottom"),
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Text alignment inside a label's box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Align {
    Top,
    Bottom,
    Left,
    Right,
    #[default]
    Center,
}

/// Padding expressed as fractions of the container's own size.
///
/// Top/bottom are fractions of the height, left/right of the width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Padding {
    /// Create padding with explicit fractions for each side.
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self { top, bottom, left, right }
    }

    /// Uniform padding on all sides.
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    /// Symmetric padding (horizontal, vertical).
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            bottom: vertical,
            left: horizontal,
            right: horizontal,
        }
    }

    /// Total horizontal fraction.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical fraction.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Every side must be in [0, 1] and opposite sides must not overlap.
    pub fn validate(&self) -> Result<()> {
        for (side, value) in [
            (Side::Top, self.top),
            (Side::Bottom, self.bottom),
            (Side::Left, self.left),
            (Side::Right, self.right),
        ] {
            if !is_unit_fraction(value) {
                return Err(LayoutError::InvalidPadding { side, value });
            }
        }
        if self.horizontal() > 1.0 {
            return Err(LayoutError::PaddingOverflow {
                axis: Axis::Horizontal,
                total: self.horizontal(),
            });
        }
        if self.vertical() > 1.0 {
            return Err(LayoutError::PaddingOverflow {
                axis: Axis::Vertical,
                total: self.vertical(),
            });
        }
        Ok(())
    }
}

/// Reject spacing fractions outside [0, 1].
pub fn validate_spacing(spacing: f32) -> Result<()> {
    if is_unit_fraction(spacing) {
        Ok(())
    } else {
        Err(LayoutError::InvalidSpacing(spacing))
    }
}

#[inline]
fn is_unit_fraction(value: f32) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_unit_fill() {
        assert_eq!(SizePolicy::default(), SizePolicy::Fill { weight: 1.0 });
        assert!(SizePolicy::default().is_fill());
    }

    #[test]
    fn test_policy_validation() {
        assert!(SizePolicy::fill_weighted(0.0).validate().is_ok());
        assert!(SizePolicy::proportional(1.0).validate().is_ok());
        assert!(SizePolicy::pixels(0).validate().is_ok());

        assert!(matches!(
            SizePolicy::fill_weighted(-1.0).validate(),
            Err(LayoutError::InvalidWeight(_))
        ));
        assert!(matches!(
            SizePolicy::fill_weighted(f32::NAN).validate(),
            Err(LayoutError::InvalidWeight(_))
        ));
        assert!(matches!(
            SizePolicy::proportional(1.5).validate(),
            Err(LayoutError::InvalidFraction(_))
        ));
    }

    #[test]
    fn test_orientation_axis_mapping() {
        let size = Size::new(300, 200);
        assert_eq!(Orientation::Horizontal.main(size), 300);
        assert_eq!(Orientation::Horizontal.cross(size), 200);
        assert_eq!(Orientation::Vertical.main(size), 200);
        assert_eq!(Orientation::Vertical.size(50, 10), Size::new(10, 50));
    }

    #[test]
    fn test_padding_validation() {
        assert!(Padding::all(0.25).validate().is_ok());
        assert!(Padding::new(0.5, 0.5, 0.0, 0.0).validate().is_ok());

        let err = Padding::new(-0.1, 0.0, 0.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, LayoutError::InvalidPadding { side: Side::Top, .. }));

        let err = Padding::new(0.0, 0.0, 0.6, 0.5).validate().unwrap_err();
        assert!(matches!(
            err,
            LayoutError::PaddingOverflow { axis: Axis::Horizontal, .. }
        ));
    }

    #[test]
    fn test_spacing_validation() {
        assert!(validate_spacing(0.0).is_ok());
        assert!(validate_spacing(0.05).is_ok());
        assert!(validate_spacing(-0.01).is_err());
        assert!(validate_spacing(1.01).is_err());
    }

    #[test]
    fn test_error_message_names_side() {
        let err = Padding::new(0.0, 0.0, 0.0, 2.0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid right padding: 2 (expected a fraction in [0, 1])"
        );
    }
}
