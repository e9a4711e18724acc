//! Container - a widget that lays out an ordered list of children.
//!
//! HBox and VBox flow children along one axis; ScrollBox is a vertical box
//! whose content may be taller than its viewport.
//!
//! Resizing a container only resolves its own frame (pixel padding, inner
//! box, spacing). The layout pass then distributes the frame's usable span
//! among the children and records spacer slots back into the frame.

use std::path::PathBuf;

use crate::error::Result;
use crate::layout::{
    ContainerFrame, Orientation, Padding, SizePolicy, SpanMode, validate_spacing,
};
use crate::primitives::{Color, Rect};

use super::{Widget, WidgetEnv, WidgetId};

/// Texture sampling for container backgrounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filtering {
    Nearest,
    #[default]
    Linear,
}

/// Visual background of a container.
///
/// Stored for the host renderer; nomopi never draws it.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub enabled: bool,
    pub color: Color,
    /// Texture file name under the textures folder. `None` uses the
    /// configured white background.
    pub texture: Option<String>,
    pub filtering: Filtering,
}

impl Default for Background {
    fn default() -> Self {
        Self {
            enabled: false,
            color: Color::WHITE,
            texture: None,
            filtering: Filtering::default(),
        }
    }
}

/// Flavour of container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// A plain box: children are fitted inside the container.
    Box,
    /// A scrolling box: content may overflow and is shifted by an offset.
    Scroll,
}

/// A box-model container.
#[derive(Debug, Clone)]
pub struct Container {
    kind: ContainerKind,
    orientation: Orientation,
    policy: SizePolicy,
    pub(crate) children: Vec<WidgetId>,
    padding: Padding,
    padding_equal: bool,
    spacing: f32,
    edge_spacing: bool,
    background: Background,
    /// Background texture resolved against the settings on last resize.
    resolved_texture: Option<PathBuf>,
    pub(crate) frame: ContainerFrame,
    scroll_offset: u32,
    content_extent: u32,
}

impl Container {
    fn new(kind: ContainerKind, orientation: Orientation) -> Self {
        Self {
            kind,
            orientation,
            policy: SizePolicy::default(),
            children: Vec::new(),
            padding: Padding::default(),
            padding_equal: false,
            spacing: 0.0,
            edge_spacing: false,
            background: Background::default(),
            resolved_texture: None,
            frame: ContainerFrame::default(),
            scroll_offset: 0,
            content_extent: 0,
        }
    }

    /// A horizontal box (children flow left to right).
    pub fn hbox() -> Self {
        Self::new(ContainerKind::Box, Orientation::Horizontal)
    }

    /// A vertical box (children flow top to bottom).
    pub fn vbox() -> Self {
        Self::new(ContainerKind::Box, Orientation::Vertical)
    }

    /// A vertical scrolling box.
    pub fn scroll_box() -> Self {
        Self::new(ContainerKind::Scroll, Orientation::Vertical)
    }

    /// Set the sizing policy.
    pub fn policy(mut self, policy: SizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set padding fractions.
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Collapse all four padding sides to the smallest resolved side.
    pub fn padding_equal(mut self, equal: bool) -> Self {
        self.padding_equal = equal;
        self
    }

    /// Set spacing between children, as a fraction of the inner main extent.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Also reserve a spacing slot before the first and after the last child.
    pub fn edge_spacing(mut self, edge_spacing: bool) -> Self {
        self.edge_spacing = edge_spacing;
        self
    }

    /// Enable or disable the background.
    pub fn background(mut self, enabled: bool) -> Self {
        self.background.enabled = enabled;
        self
    }

    /// Set the background color (enables the background).
    pub fn background_color(mut self, color: Color) -> Self {
        self.background.enabled = true;
        self.background.color = color;
        self
    }

    /// Set the background texture file name (enables the background).
    pub fn background_texture(mut self, texture: impl Into<String>) -> Self {
        self.background.enabled = true;
        self.background.texture = Some(texture.into());
        self
    }

    /// Set background texture filtering.
    pub fn background_filtering(mut self, filtering: Filtering) -> Self {
        self.background.filtering = filtering;
        self
    }

    /// Check padding and spacing fractions and the sizing policy.
    pub fn validate(&self) -> Result<()> {
        self.policy.validate()?;
        self.padding.validate()?;
        validate_spacing(self.spacing)
    }

    pub fn kind(&self) -> ContainerKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    pub fn padding_fractions(&self) -> Padding {
        self.padding
    }

    pub fn is_padding_equal(&self) -> bool {
        self.padding_equal
    }

    pub fn spacing_fraction(&self) -> f32 {
        self.spacing
    }

    pub fn has_edge_spacing(&self) -> bool {
        self.edge_spacing
    }

    pub fn background_settings(&self) -> &Background {
        &self.background
    }

    /// Full path of the background texture, once resized with a background.
    pub fn resolved_texture(&self) -> Option<&PathBuf> {
        self.resolved_texture.as_ref()
    }

    /// The frame resolved by the most recent resize.
    pub fn frame(&self) -> &ContainerFrame {
        &self.frame
    }

    /// Inner content width in pixels.
    pub fn inner_width(&self) -> u32 {
        self.frame.inner.width
    }

    /// Inner content height in pixels.
    pub fn inner_height(&self) -> u32 {
        self.frame.inner.height
    }

    pub(crate) fn span_mode(&self) -> SpanMode {
        match self.kind {
            ContainerKind::Box => SpanMode::Bounded,
            ContainerKind::Scroll => SpanMode::Scrollable,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match (self.kind, self.orientation) {
            (ContainerKind::Scroll, _) => "ScrollBox",
            (ContainerKind::Box, Orientation::Horizontal) => "HBox",
            (ContainerKind::Box, Orientation::Vertical) => "VBox",
        }
    }

    // =====================================================================
    // Scrolling
    // =====================================================================

    /// Total main-axis extent of the content, padding included.
    pub fn content_extent(&self) -> u32 {
        self.content_extent
    }

    /// Current scroll offset (0 = top).
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> u32 {
        self.content_extent
            .saturating_sub(self.orientation.main(self.frame.bounds.size()))
    }

    /// Scroll by a signed delta, clamped to the valid range.
    ///
    /// Takes effect on the next layout pass.
    pub fn scroll_by(&mut self, delta: i32) {
        let target = i64::from(self.scroll_offset) + i64::from(delta);
        self.scroll_to(target.max(0) as u32);
    }

    /// Scroll to an absolute offset, clamped to the valid range.
    pub fn scroll_to(&mut self, offset: u32) {
        if self.kind == ContainerKind::Scroll {
            self.scroll_offset = offset.min(self.max_scroll());
        }
    }

    /// Record the content extent after distribution and re-clamp the offset.
    pub(crate) fn set_content_extent(&mut self, extent: u32) {
        self.content_extent = extent;
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }
}

impl Widget for Container {
    fn policy(&self) -> SizePolicy {
        self.policy
    }

    fn resize(&mut self, bounds: Rect, env: &WidgetEnv<'_>) {
        self.frame = ContainerFrame::resolve(
            bounds,
            &self.padding,
            self.padding_equal,
            self.spacing,
            self.orientation,
            self.children.len(),
            self.edge_spacing,
        );

        self.resolved_texture = self.background.enabled.then(|| match &self.background.texture {
            Some(texture) => env.settings.textures_path(texture),
            None => env.settings.white_background(),
        });
    }
}
