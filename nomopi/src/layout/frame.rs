//! Container frame: pixel padding, inner content box and spacing.
//!
//! Everything a container must know about itself before it can size its
//! children. The frame is computed and stored on the container first; child
//! distribution reads from it.

use crate::primitives::{Rect, Size};

use super::length::{Orientation, Padding};

/// Padding resolved to whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PixelPadding {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl PixelPadding {
    /// Resolve fractional padding against the container's own size.
    ///
    /// With `equal`, every side collapses to the smallest resolved side.
    pub fn resolve(padding: &Padding, size: Size, equal: bool) -> Self {
        let resolved = Self {
            top: scale(padding.top, size.height),
            bottom: scale(padding.bottom, size.height),
            left: scale(padding.left, size.width),
            right: scale(padding.right, size.width),
        };

        if equal {
            let min = resolved
                .top
                .min(resolved.bottom)
                .min(resolved.left)
                .min(resolved.right);
            Self::all(min)
        } else {
            resolved
        }
    }

    pub fn all(value: u32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Shrink a rectangle by this padding, saturating at zero size.
    pub fn deflate(&self, bounds: Rect) -> Rect {
        Rect::new(
            bounds.x.saturating_add(self.left as i32),
            bounds.y.saturating_add(self.top as i32),
            bounds.width.saturating_sub(self.horizontal()),
            bounds.height.saturating_sub(self.vertical()),
        )
    }
}

/// Number of spacing gaps for `child_count` children.
///
/// Between children only (`N - 1`), or also before the first and after the
/// last child when `edge_spacing` is set (`N + 1`). No children, no gaps.
#[inline]
pub fn gap_count(child_count: usize, edge_spacing: bool) -> u32 {
    match child_count {
        0 => 0,
        n if edge_spacing => (n + 1) as u32,
        n => (n - 1) as u32,
    }
}

/// Round `fraction * extent` to whole pixels.
#[inline]
pub(crate) fn scale(fraction: f32, extent: u32) -> u32 {
    let px = (fraction as f64 * extent as f64).round();
    if px <= 0.0 { 0 } else { px as u32 }
}

/// The resolved geometry of a container for its most recent resize.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerFrame {
    /// The container's own rectangle.
    pub bounds: Rect,
    /// Padding in pixels.
    pub padding: PixelPadding,
    /// Content box: bounds minus padding.
    pub inner: Rect,
    /// Spacing in pixels along the main axis.
    pub spacing: u32,
    /// Inner main extent minus all spacing gaps.
    pub usable_span: u32,
    /// Whether spacing was reduced so the gaps fit the inner box.
    pub spacing_clamped: bool,
    /// Main-axis pixels assigned to children.
    pub consumed: u32,
    /// Spacer slots, interleaved with children in placement order.
    pub spacers: Vec<Rect>,
}

impl ContainerFrame {
    /// Compute padding, inner box and spacing for a container.
    pub fn resolve(
        bounds: Rect,
        padding: &Padding,
        padding_equal: bool,
        spacing: f32,
        orientation: Orientation,
        child_count: usize,
        edge_spacing: bool,
    ) -> Self {
        let padding = PixelPadding::resolve(padding, bounds.size(), padding_equal);
        let inner = padding.deflate(bounds);

        let inner_main = orientation.main(inner.size());
        let gaps = gap_count(child_count, edge_spacing);
        let mut spacing = scale(spacing, inner_main);

        // Gaps alone must never overflow the inner box
        let spacing_clamped = gaps > 0 && spacing.saturating_mul(gaps) > inner_main;
        if spacing_clamped {
            spacing = inner_main / gaps;
        }
        let usable_span = inner_main - spacing * gaps;

        Self {
            bounds,
            padding,
            inner,
            spacing,
            usable_span,
            spacing_clamped,
            consumed: 0,
            spacers: Vec::new(),
        }
    }

    /// Inner content size.
    #[inline]
    pub fn inner_size(&self) -> Size {
        self.inner.size()
    }

    /// Main-axis pixels of the usable span not assigned to any child.
    #[inline]
    pub fn remainder(&self) -> u32 {
        self.usable_span.saturating_sub(self.consumed)
    }
}
