//! EditLine - a single-line text input.
//!
//! Input handling belongs to the host; nomopi keeps the text and picks a
//! font size that fills the line height.

use std::path::PathBuf;

use crate::error::Result;
use crate::layout::SizePolicy;
use crate::primitives::Rect;
use crate::settings::Settings;

use super::{Widget, WidgetEnv};

/// Glyph ascent relative to the line box for the bundled fonts.
const ASCENT_NUMERATOR: u64 = 999;
const ASCENT_DENOMINATOR: u64 = 1124;

#[derive(Debug, Clone, Default)]
pub struct EditLine {
    policy: SizePolicy,
    text: String,
    default_font: Option<usize>,
    bounds: Rect,
    font: Option<PathBuf>,
    font_size: u32,
}

impl EditLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: SizePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn default_font(mut self, index: usize) -> Self {
        self.default_font = Some(index);
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn validate(&self, settings: &Settings) -> Result<()> {
        self.policy.validate()?;
        if let Some(index) = self.default_font {
            settings.default_font(index)?;
        }
        Ok(())
    }

    pub fn current_text(&self) -> &str {
        &self.text
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Font size applied on the last resize.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn font(&self) -> Option<&PathBuf> {
        self.font.as_ref()
    }
}

impl Widget for EditLine {
    fn policy(&self) -> SizePolicy {
        self.policy
    }

    fn resize(&mut self, bounds: Rect, env: &WidgetEnv<'_>) {
        self.bounds = bounds;
        self.font_size = (u64::from(bounds.height) * ASCENT_NUMERATOR / ASCENT_DENOMINATOR) as u32;
        self.font = self
            .default_font
            .and_then(|index| env.settings.default_font(index).ok());
    }
}
